//! Application use cases. Orchestrate domain logic via ports.

pub mod aggregator;
pub mod persona_service;
pub mod report_renderer;

pub use aggregator::PersonaAggregator;
pub use persona_service::{PersonaOutcome, PersonaRequest, PersonaService};
