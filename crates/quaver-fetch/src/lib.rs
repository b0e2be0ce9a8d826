//! Audio stream selection and HTTP downloading with progress reporting.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable catalog, progress, and options types
//! - [`core`] - Pure stream selection
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Single-Attempt**: one fetch per call, caching disabled; retry policy
//!   stays with the caller
//! - **Observable**: a [`DownloadMonitor`] receives task-created, waiting,
//!   per-chunk progress, and exactly one terminal event
//! - **Cooperative Cancellation**: a `CancellationToken` aborts the
//!   transfer without orphaning background I/O
//! - **Mechanism-Only**: no policy; relocation and extraction live with the
//!   caller

pub mod core;
pub mod data;
mod effects;
mod error;

pub use crate::core::select_best_audio;
pub use data::{DownloadOptions, DownloadProgress, MediaFormat, MediaStream};
pub use effects::{BoxStream, DownloadMonitor, Downloader, FetchedBody, HttpTransport, ProgressHandle};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestTransport;

pub use error::DownloadError;
