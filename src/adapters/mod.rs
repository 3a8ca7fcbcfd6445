//! Infrastructure adapters. Implement outbound ports.
//!
//! Reddit over HTTP, filesystem. Map errors to DomainError.

pub mod persistence;
pub mod reddit;
