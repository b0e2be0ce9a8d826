use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

use crate::data::DownloadProgress;
use crate::error::DownloadError;

/// Receiver for the lifecycle of a single download.
///
/// The coordinator invokes the hooks in this order and cardinality:
///
/// 1. [`on_task_created`](Self::on_task_created) - exactly once, before any
///    bytes move.
/// 2. [`on_waiting_for_connectivity`](Self::on_waiting_for_connectivity) -
///    zero or more times while the transfer stalls; it stays pending and
///    later resumes or terminates.
/// 3. [`on_progress`](Self::on_progress) - zero or more times,
///    `bytes_written` monotonically non-decreasing.
/// 4. [`on_completed`](Self::on_completed) - exactly once, terminal.
///
/// Hooks run on the transfer's own task, never the caller's. They must be
/// cheap and non-blocking, and may only communicate outward through
/// thread-safe state. The coordinator holds the monitor until the terminal
/// hook has fired, so implementations need no keep-alive tricks of their
/// own.
pub trait DownloadMonitor: Send + Sync {
    /// The transfer task exists; no bytes have moved yet.
    fn on_task_created(&self) {}

    /// No data is arriving; the transfer is waiting for connectivity.
    fn on_waiting_for_connectivity(&self) {}

    /// Bytes were written to the staging file.
    fn on_progress(&self, progress: DownloadProgress);

    /// Terminal event. `None` is success; after this no further hooks fire
    /// for the download.
    fn on_completed(&self, error: Option<&DownloadError>);
}

const EXPECTED_UNKNOWN: u64 = u64::MAX;

/// Lock-free progress observer for UIs.
///
/// Implements [`DownloadMonitor`] by mirroring the latest progress into
/// atomics, readable from any thread while the download runs. The handle is
/// a read-only view of the transfer plus the single permitted control edge:
/// [`cancel`](Self::cancel).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use quaver_fetch::{DownloadOptions, ProgressHandle};
///
/// let handle = Arc::new(ProgressHandle::new());
/// let options = DownloadOptions::default().cancel(handle.cancellation_token());
/// // pass `handle.clone()` as the monitor and poll `handle.fraction()`
/// ```
#[derive(Debug)]
pub struct ProgressHandle {
    bytes_written: AtomicU64,
    bytes_expected: AtomicU64,
    finished: AtomicBool,
    failed: AtomicBool,
    cancel: CancellationToken,
}

impl ProgressHandle {
    pub fn new() -> Self {
        Self {
            bytes_written: AtomicU64::new(0),
            bytes_expected: AtomicU64::new(EXPECTED_UNKNOWN),
            finished: AtomicBool::new(false),
            failed: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    /// Latest observed byte counts.
    pub fn progress(&self) -> DownloadProgress {
        let expected = self.bytes_expected.load(Ordering::Acquire);
        DownloadProgress {
            bytes_written: self.bytes_written.load(Ordering::Acquire),
            bytes_expected: (expected != EXPECTED_UNKNOWN).then_some(expected),
        }
    }

    /// Completed fraction, `None` while indeterminate.
    pub fn fraction(&self) -> Option<f64> {
        self.progress().fraction()
    }

    /// Whether the terminal event has fired.
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// Whether the download terminated with an error.
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }

    /// Request cooperative cancellation of the observed download.
    ///
    /// Takes effect when the download runs with options carrying
    /// [`cancellation_token`](Self::cancellation_token).
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token to wire into [`DownloadOptions::cancel`](crate::DownloadOptions::cancel).
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Default for ProgressHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadMonitor for ProgressHandle {
    fn on_progress(&self, progress: DownloadProgress) {
        self.bytes_expected.store(
            progress.bytes_expected.unwrap_or(EXPECTED_UNKNOWN),
            Ordering::Release,
        );
        self.bytes_written
            .store(progress.bytes_written, Ordering::Release);
    }

    fn on_completed(&self, error: Option<&DownloadError>) {
        self.failed.store(error.is_some(), Ordering::Release);
        self.finished.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_mirrors_progress() {
        let handle = ProgressHandle::new();
        assert_eq!(handle.fraction(), None);

        handle.on_progress(DownloadProgress {
            bytes_written: 50,
            bytes_expected: Some(200),
        });
        assert_eq!(handle.fraction(), Some(0.25));
        assert!(!handle.is_finished());

        handle.on_completed(None);
        assert!(handle.is_finished());
        assert!(!handle.has_failed());
    }

    #[test]
    fn test_handle_records_failure() {
        let handle = ProgressHandle::new();
        handle.on_completed(Some(&DownloadError::TimedOut));
        assert!(handle.is_finished());
        assert!(handle.has_failed());
    }

    #[test]
    fn test_handle_fraction_indeterminate_without_length() {
        let handle = ProgressHandle::new();
        handle.on_progress(DownloadProgress {
            bytes_written: 1024,
            bytes_expected: None,
        });
        assert_eq!(handle.fraction(), None);
        assert_eq!(handle.progress().bytes_written, 1024);
    }

    #[test]
    fn test_cancel_trips_the_token() {
        let handle = ProgressHandle::new();
        let token = handle.cancellation_token();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
    }
}
