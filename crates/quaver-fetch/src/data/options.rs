use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Configuration for a single download.
///
/// # Examples
///
/// ```
/// use quaver_fetch::DownloadOptions;
/// use std::time::Duration;
///
/// let options = DownloadOptions::default()
///     .timeout(Some(Duration::from_secs(600)))
///     .header("User-Agent", "quaver/0.1");
/// ```
#[derive(Clone, Debug)]
pub struct DownloadOptions {
    /// Overall limit for the whole transfer.
    ///
    /// `None` (the default) lets a download run indefinitely; expiry
    /// terminates it with `DownloadError::TimedOut`.
    pub timeout: Option<Duration>,

    /// Window without received data after which the monitor is told the
    /// transfer is waiting for connectivity. The transfer keeps waiting;
    /// only completion, failure, cancellation or `timeout` end it.
    ///
    /// `None` disables the notice. Default: 15s.
    pub stall_notice: Option<Duration>,

    /// Extra request headers sent with the fetch.
    ///
    /// Default: empty.
    pub headers: Arc<[(String, String)]>,

    /// Cooperative cancellation for the transfer. Cancelling aborts the
    /// in-flight request and surfaces `DownloadError::Cancelled` after the
    /// terminal monitor event.
    pub cancel: CancellationToken,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            stall_notice: Some(Duration::from_secs(15)),
            headers: Arc::new([]),
            cancel: CancellationToken::new(),
        }
    }
}

impl DownloadOptions {
    /// Set or clear the overall transfer timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set or disable the connectivity stall notice window.
    #[must_use]
    pub fn stall_notice(mut self, window: Option<Duration>) -> Self {
        self.stall_notice = window;
        self
    }

    /// Add one extra request header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// Use the given cancellation token for this download.
    #[must_use]
    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }
}
