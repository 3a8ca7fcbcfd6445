//! Reddit adapter. Profile URL parsing, listing fetch and record mapping.

pub mod client;
pub mod mapper;
pub mod profile_url;

pub use client::RedditClient;
pub use profile_url::extract_username;
