//! Video source implementations

mod piped;

pub use piped::{DEFAULT_PIPED_INSTANCES, PipedSource, search_path, trending_path};
