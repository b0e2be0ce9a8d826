//! Error types for quaver-fetch.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request for {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("server returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("download produced no data: {url}")]
    Empty { url: String },

    #[error("failed writing downloaded bytes")]
    Io(#[source] io::Error),

    #[error("download timed out")]
    TimedOut,

    #[error("download cancelled")]
    Cancelled,
}
