//! Filesystem adapters: saved listings in, reports out.

pub mod json_source;
pub mod report_writer;

pub use json_source::JsonListingSource;
pub use report_writer::FsReportWriter;
