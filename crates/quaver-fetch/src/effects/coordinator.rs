use std::path::PathBuf;
use std::sync::Arc;

use futures_util::StreamExt;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::data::{DownloadOptions, DownloadProgress, MediaStream};
use crate::effects::http::HttpTransport;
use crate::effects::monitor::DownloadMonitor;
use crate::error::DownloadError;

/// Drives one network download of a selected stream into a staging file.
///
/// A coordinator is cheap and reusable across unrelated downloads; each
/// [`download`](Self::download) call owns its own transfer, staging file
/// and monitor, so concurrent calls never share mutable state. A given
/// `(stream, monitor)` pair must be used for exactly one call.
pub struct Downloader<T> {
    transport: T,
    staging_dir: Option<PathBuf>,
}

impl<T: HttpTransport> Downloader<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            staging_dir: None,
        }
    }

    /// Stage downloads under `dir` instead of the process temp directory.
    #[must_use]
    pub fn staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }

    /// Download `stream` to a staging file, reporting lifecycle and byte
    /// progress to `monitor`.
    ///
    /// Performs a single attempt with caching disabled and suspends the
    /// caller until the transfer terminates; retry policy belongs to the
    /// caller. The monitor is held until its terminal hook has fired:
    /// exactly one `on_completed` is delivered whether the transfer
    /// succeeds, fails, times out or is cancelled. On failure the partial
    /// staging file is removed best-effort; on success its path is
    /// returned and the file is non-empty.
    pub async fn download(
        &self,
        stream: &MediaStream,
        monitor: Arc<dyn DownloadMonitor>,
        options: &DownloadOptions,
    ) -> Result<PathBuf, DownloadError> {
        monitor.on_task_created();
        let outcome = self.supervise(stream, monitor.as_ref(), options).await;
        match &outcome {
            Ok(_) => monitor.on_completed(None),
            Err(e) => monitor.on_completed(Some(e)),
        }
        outcome
    }

    /// Apply cancellation and the overall timeout around the transfer.
    async fn supervise(
        &self,
        stream: &MediaStream,
        monitor: &dyn DownloadMonitor,
        options: &DownloadOptions,
    ) -> Result<PathBuf, DownloadError> {
        let guarded = async {
            tokio::select! {
                // cancellation wins when both are ready
                biased;
                _ = options.cancel.cancelled() => Err(DownloadError::Cancelled),
                result = self.transfer(stream, monitor, options) => result,
            }
        };
        match options.timeout {
            Some(limit) => tokio::time::timeout(limit, guarded)
                .await
                .unwrap_or(Err(DownloadError::TimedOut)),
            None => guarded.await,
        }
    }

    async fn transfer(
        &self,
        stream: &MediaStream,
        monitor: &dyn DownloadMonitor,
        options: &DownloadOptions,
    ) -> Result<PathBuf, DownloadError> {
        let url = stream.url.as_str();
        debug!(url, "requesting stream");

        let fetched = self
            .transport
            .fetch(url, &options.headers)
            .await
            .map_err(|e| DownloadError::Transport {
                url: url.to_owned(),
                source: Box::new(e),
            })?;

        if !(200..300).contains(&fetched.status) {
            return Err(DownloadError::Status {
                url: url.to_owned(),
                status: fetched.status,
            });
        }
        let expected = fetched.content_length;

        // The staging file is deleted when `staged_path` drops, which
        // covers every early return below; `keep` disarms that on success.
        let staged = match &self.staging_dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(DownloadError::Io)?;
        let (file, staged_path) = staged.into_parts();
        let mut file = tokio::fs::File::from_std(file);

        let mut body = fetched.body;
        let mut written: u64 = 0;
        loop {
            let next = match options.stall_notice {
                Some(window) => loop {
                    match tokio::time::timeout(window, body.next()).await {
                        Ok(item) => break item,
                        Err(_) => {
                            warn!(url, "no data received, waiting for connectivity");
                            monitor.on_waiting_for_connectivity();
                        }
                    }
                },
                None => body.next().await,
            };
            let Some(chunk) = next else { break };
            let chunk = chunk.map_err(|e| DownloadError::Transport {
                url: url.to_owned(),
                source: Box::new(e),
            })?;
            file.write_all(&chunk).await.map_err(DownloadError::Io)?;
            written += chunk.len() as u64;
            monitor.on_progress(DownloadProgress {
                bytes_written: written,
                bytes_expected: expected,
            });
        }

        if written == 0 {
            return Err(DownloadError::Empty {
                url: url.to_owned(),
            });
        }
        file.flush().await.map_err(DownloadError::Io)?;

        let path = staged_path.keep().map_err(|e| DownloadError::Io(e.error))?;
        debug!(url, bytes = written, path = %path.display(), "stream downloaded");
        Ok(path)
    }
}
