//! Bitbucket issue tracker API client library.
//!
//! A Rust library for the issue-tracking endpoints of the Bitbucket Cloud
//! REST API, built around resource objects: each resource holds a shared
//! transport handle plus the immutable context it addresses, builds one
//! URL path per operation, and passes request parameters and decoded
//! responses through untouched.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use bucketapi::{BucketClient, Issues, Params};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> bucketapi::Result<()> {
//!     // Create client from environment variables
//!     let client = Arc::new(BucketClient::from_env()?);
//!
//!     // Issues of one repository
//!     let issues = Issues::new(client, "acme", "widgets");
//!
//!     // List open issues
//!     let mut filters = Params::new();
//!     filters.insert("q".to_string(), json!("state=\"open\""));
//!     let open = issues.list(&filters).await?;
//!     println!("{open}");
//!
//!     // Fetch one issue, then comment on it
//!     let issue = issues.show("7", &Params::new()).await?;
//!     println!("{issue}");
//!
//!     let mut comment = Params::new();
//!     comment.insert("content".to_string(), json!({"raw": "Looking into it."}));
//!     issues.comments("7").create(&comment).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized in three layers:
//!
//! - [`BucketClient`] - the HTTP transport: authentication, verb methods,
//!   status checking, response decoding
//! - [`Transport`] - the trait seam the resources talk through, so tests
//!   (or alternative transports) can stand in for the real client
//! - [`Issues`] and its sub-resources ([`Attachments`], [`Changes`],
//!   [`Comments`], [`Vote`], [`Watch`]) - path construction and delegation
//!
//! Request parameters ([`Params`]) and responses (`serde_json::Value`) are
//! opaque pass-through: which keys an endpoint accepts and what it returns
//! is the server's schema, not this crate's.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `BITBUCKET_TOKEN` (required) - access token for bearer auth
//! - `BITBUCKET_API_URL` (optional) - base URL (defaults to
//!   `https://api.bitbucket.org/2.0`)
//!
//! # Errors
//!
//! Malformed arguments (empty path segments) fail fast with
//! [`BucketError::InvalidArgument`] before any network I/O. Everything
//! else - network failures, non-2xx statuses, undecodable bodies - is
//! raised by the transport and propagated unchanged; this crate never
//! retries or swallows.

mod client;
mod error;
mod path;
mod resources;
mod transport;

// Re-export core types
pub use client::BucketClient;
pub use error::{BucketError, Result};
pub use transport::{to_params, Params, Transport};

// Re-export resources
pub use resources::{Attachments, Changes, Comments, Issues, Vote, Watch};
