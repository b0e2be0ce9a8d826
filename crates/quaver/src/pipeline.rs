use std::path::PathBuf;
use std::sync::Arc;

use quaver_fetch::{
    DownloadError, DownloadMonitor, DownloadOptions, Downloader, HttpTransport, select_best_audio,
};
use tracing::{debug, info};

use crate::collaborators::{AudioExtractor, StreamResolver};
use crate::error::AcquireError;

/// Extension hint under which downloaded containers are relocated before
/// extraction.
const CONTAINER_EXT: &str = "mp4";

/// Outcome of a successful acquisition: the extractor's reported output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquired {
    pub local_path: PathBuf,
}

/// The acquisition pipeline: resolve → select → download → relocate →
/// extract, each stage short-circuiting into [`AcquireError`].
///
/// One [`acquire`](Self::acquire) call is one logical task; it suspends
/// while streams resolve and while the download runs, and nothing is
/// retried automatically. Independent calls may run concurrently; they
/// share nothing but the temp directory, where relocation names are
/// collision-free.
pub struct Acquisition<T> {
    resolver: Arc<dyn StreamResolver>,
    extractor: Arc<dyn AudioExtractor>,
    downloader: Downloader<T>,
    options: DownloadOptions,
    output_dir: Option<PathBuf>,
}

impl<T: HttpTransport> Acquisition<T> {
    pub fn new(
        resolver: Arc<dyn StreamResolver>,
        extractor: Arc<dyn AudioExtractor>,
        downloader: Downloader<T>,
    ) -> Self {
        Self {
            resolver,
            extractor,
            downloader,
            options: DownloadOptions::default(),
            output_dir: None,
        }
    }

    /// Download configuration applied to every acquisition.
    #[must_use]
    pub fn options(mut self, options: DownloadOptions) -> Self {
        self.options = options;
        self
    }

    /// Relocate downloads into `dir` instead of the process temp directory.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Acquire the audio track of the resource at `resource_url`.
    ///
    /// `monitor` observes the download stage per the
    /// [`DownloadMonitor`] protocol; it is kept alive until its terminal
    /// event has fired. Cancellation (via the options' token) surfaces as
    /// [`AcquireError::Cancelled`] with no transfer left running.
    pub async fn acquire(
        &self,
        resource_url: &str,
        monitor: Arc<dyn DownloadMonitor>,
    ) -> Result<Acquired, AcquireError> {
        debug!(url = resource_url, "resolving candidate streams");
        let candidates = self
            .resolver
            .resolve(resource_url)
            .await
            .map_err(AcquireError::Resolution)?;

        let selected = select_best_audio(&candidates).ok_or(AcquireError::NoSuitableStream)?;
        debug!(
            url = %selected.url,
            format = selected.format.extension(),
            bitrate = ?selected.audio_bitrate,
            "selected audio stream"
        );

        let downloaded = self
            .downloader
            .download(selected, monitor, &self.options)
            .await
            .map_err(|e| match e {
                DownloadError::Cancelled => AcquireError::Cancelled,
                other => AcquireError::Download(other),
            })?;

        // A failed relocation leaves `downloaded` in place for inspection.
        let relocated = match &self.output_dir {
            Some(dir) => quaver_fs::relocate_into(&downloaded, dir, CONTAINER_EXT),
            None => quaver_fs::relocate(&downloaded, CONTAINER_EXT),
        }
        .map_err(AcquireError::Relocation)?;
        debug!(path = %relocated.display(), "downloaded stream relocated");

        let local_path = self
            .extractor
            .extract(&relocated)
            .await
            .map_err(AcquireError::Extraction)?;
        info!(url = resource_url, path = %local_path.display(), "audio track acquired");

        Ok(Acquired { local_path })
    }
}
