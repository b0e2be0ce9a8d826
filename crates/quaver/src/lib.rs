//! Acquire the audio track of a remote video resource.
//!
//! Given a resource URL, the pipeline resolves its encoded streams through
//! an external [`StreamResolver`], selects the best audio-only candidate,
//! downloads it with progress and connectivity-stall reporting, relocates
//! the bytes under a collision-free name, and hands the file to an external
//! [`AudioExtractor`]. See [`Acquisition`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use quaver::{Acquisition, Downloader, ProgressHandle, ReqwestTransport};
//! # async fn run(resolver: Arc<dyn quaver::StreamResolver>, extractor: Arc<dyn quaver::AudioExtractor>) -> anyhow::Result<()> {
//! let downloader = Downloader::new(ReqwestTransport::new()?);
//! let pipeline = Acquisition::new(resolver, extractor, downloader);
//!
//! let handle = Arc::new(ProgressHandle::new());
//! let acquired = pipeline.acquire("https://video.example/v/42", handle.clone()).await?;
//! println!("audio at {}", acquired.local_path.display());
//! # Ok(())
//! # }
//! ```

mod collaborators;
mod error;
mod pipeline;

pub use collaborators::{AudioExtractor, StreamResolver};
pub use error::AcquireError;
pub use pipeline::{Acquired, Acquisition};

pub use quaver_fetch::{
    BoxStream, DownloadError, DownloadMonitor, DownloadOptions, DownloadProgress, Downloader,
    FetchedBody, HttpTransport, MediaFormat, MediaStream, ProgressHandle, select_best_audio,
};

#[cfg(feature = "reqwest")]
pub use quaver_fetch::ReqwestTransport;
