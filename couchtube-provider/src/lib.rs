//! # couchtube-provider
//!
//! Video metadata sources for the CouchTube client, with a resilient
//! multi-instance fetch strategy.
//!
//! Public API instances come and go. Instead of depending on one of them, a
//! source is configured with an ordered list of interchangeable instances and
//! every logical request is resolved by the first instance that can answer it.
//!
//! ## Supported Sources
//!
//! | Source | Endpoints |
//! |--------|-----------|
//! | [Piped](https://github.com/TeamPiped/Piped) | `/trending?region=`, `/search?q=&filter=videos` |
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and TV boxes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use couchtube_provider::{create_source, SourceSettings, VideoSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source(&SourceSettings::default())?;
//!
//!     for item in source.trending("US").await? {
//!         println!("{:?} {:?}", item.title, item.url);
//!     }
//!
//!     let found = source.search("lofi").await?;
//!     println!("{} results", found.items.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Fallback Semantics
//!
//! [`FallbackFetcher::fetch_with_fallback`] tries instances strictly in order,
//! one at a time:
//!
//! - a transport error, timeout, non-2xx status or non-JSON body moves on to
//!   the next instance (the same instance is never retried);
//! - the first JSON document wins and no further instance is contacted;
//! - when every instance failed the call returns
//!   [`FetchError::AllBackendsUnavailable`] with one entry per attempt.

mod error;
mod factory;
mod fallback;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{AttemptFailure, FetchError, Result};

// Re-export factory functions
pub use factory::{SourceSettings, create_source};

// Re-export the fallback chain
pub use fallback::{FallbackFetcher, FetcherOptions};

// Re-export core trait
pub use traits::VideoSource;

// Re-export types
pub use types::{DurationValue, SearchResponse, VideoItem, WATCH_PATH_PREFIX};

// Re-export concrete sources
pub use providers::{DEFAULT_PIPED_INSTANCES, PipedSource, search_path, trending_path};

pub use utils::log_sanitizer;
