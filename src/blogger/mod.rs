// Blogger API module.
// Provides client and types for interacting with the Blogger v3 REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{BloggerClient, ClientConfig};
pub use types::*;
