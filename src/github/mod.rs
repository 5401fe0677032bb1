pub mod client;
pub mod error;
pub mod rest_types;

pub use client::{GitHubClient, QueryParams};
