//! Business logic services

pub mod cache;
pub mod fingerprint;
pub mod geo;
pub mod ident;
pub mod optimizer;
pub mod partition;
pub mod schedule;
