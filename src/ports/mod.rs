//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into content sources and report sinks.

pub mod outbound;

pub use outbound::{ContentSource, ReportSink};
