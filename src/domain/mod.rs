//! Core domain layer. No external I/O dependencies.
//!
//! Entities, taxonomies and the analysis rules live here. Dependencies flow inward.

pub mod analysis;
pub mod entities;
pub mod errors;
pub mod persona;
pub mod taxonomy;

pub use entities::{Citation, ContentItem, ContentKind, SourceKind, UserInfo};
pub use errors::DomainError;
pub use persona::{CategoryResult, Dimension, EvidenceLedger, Finding, Findings, PersonaRecord};
