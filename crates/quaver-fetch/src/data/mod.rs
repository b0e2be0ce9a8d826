//! Immutable data types for audio stream acquisition.
//!
//! Stream catalogs arrive from the external resolver, progress values flow
//! out to observers, and options parameterize a single download. Nothing in
//! this module performs I/O or is mutated after construction.

pub mod options;
pub mod progress;
pub mod stream;

pub use options::DownloadOptions;
pub use progress::DownloadProgress;
pub use stream::{MediaFormat, MediaStream};
