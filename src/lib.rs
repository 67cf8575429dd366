//! # xkcd-dl
//!
//! Fetch a single xkcd comic's metadata, optionally save its image, and render
//! it as display text or JSON.
//!
//! One invocation handles one comic:
//! - build the metadata URL from a [`ComicId`]
//! - GET and decode it into a [`RemoteRecord`], then project it into a [`Comic`]
//! - optionally stream the comic's image into the output directory
//! - render the [`Comic`] with [`to_display_text`] or [`to_structured_text`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use xkcd_dl::{ComicId, Config, XkcdClient, to_display_text};
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default().with_timeout(Duration::from_secs(10));
//!     let client = XkcdClient::new(config)?;
//!
//!     let comic = client.fetch(ComicId::Latest, false).await?;
//!     println!("{}", to_display_text(&comic));
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Command line surface
pub mod cli;
/// Comic service client
pub mod client;
/// Configuration types and constants
pub mod config;
/// Error types
pub mod error;
/// Display text and JSON rendering
pub mod presenter;
/// Core types
pub mod types;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use client::XkcdClient;
pub use config::{BASE_URL, Config, DEFAULT_TIMEOUT, LATEST_COMIC};
pub use error::{Error, Result};
pub use presenter::{OutputFormat, render, to_display_text, to_structured_text};
pub use types::{Comic, ComicId, RemoteRecord};
