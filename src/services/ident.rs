//! Response identifier generation
//!
//! Identifiers are injected rather than pulled from a process-wide
//! counter so tests can pin them deterministically.

use std::sync::atomic::{AtomicU32, Ordering};

use uuid::Uuid;

/// Source of fresh response identifiers
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// Production generator: random UUID v4
#[derive(Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: "opt-1", "opt-2", ...
#[derive(Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU32,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> u32 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("opt-{}", n)
    }
}
