//! Pipeline-level error taxonomy.

use quaver_fetch::DownloadError;
use thiserror::Error;

/// Terminal failure of one acquisition, carrying the stage and its cause.
///
/// Every stage fails fast into its variant without local recovery; whether
/// to retry the whole acquisition is the caller's decision.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("stream resolution failed: {0:#}")]
    Resolution(anyhow::Error),

    #[error("no suitable audio-only stream")]
    NoSuitableStream,

    #[error("download failed")]
    Download(#[source] DownloadError),

    #[error("relocation failed")]
    Relocation(#[source] quaver_fs::Error),

    #[error("audio extraction failed: {0:#}")]
    Extraction(anyhow::Error),

    #[error("acquisition cancelled")]
    Cancelled,
}
