use serde::Serialize;

/// Byte-level state of an in-flight download.
///
/// Produced on the transport side after every chunk write and handed to
/// [`DownloadMonitor::on_progress`](crate::DownloadMonitor::on_progress).
/// `bytes_written` is monotonically non-decreasing across the events of one
/// download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DownloadProgress {
    /// Bytes written to the staging file so far.
    pub bytes_written: u64,

    /// Total expected bytes, if the server sent a Content-Length.
    ///
    /// `None` under chunked transfer encoding; the fraction is then
    /// indeterminate.
    pub bytes_expected: Option<u64>,
}

impl DownloadProgress {
    /// Completed fraction in `0.0..=1.0`.
    ///
    /// Returns `None` when the expected total is unknown or zero, rather
    /// than guessing or dividing by zero.
    #[must_use]
    pub fn fraction(&self) -> Option<f64> {
        match self.bytes_expected {
            Some(total) if total > 0 => Some(self.bytes_written as f64 / total as f64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_known_total() {
        let progress = DownloadProgress {
            bytes_written: 25,
            bytes_expected: Some(100),
        };
        assert_eq!(progress.fraction(), Some(0.25));
    }

    #[test]
    fn test_fraction_indeterminate_without_total() {
        let progress = DownloadProgress {
            bytes_written: 25,
            bytes_expected: None,
        };
        assert_eq!(progress.fraction(), None);
    }

    #[test]
    fn test_fraction_indeterminate_for_zero_total() {
        let progress = DownloadProgress {
            bytes_written: 0,
            bytes_expected: Some(0),
        };
        assert_eq!(progress.fraction(), None);
    }
}
