//! I/O side of the crate: transport binding, download coordination, and
//! the monitor protocol the coordinator drives.

mod coordinator;
mod http;
mod monitor;

pub use coordinator::Downloader;
pub use http::{BoxStream, FetchedBody, HttpTransport};
pub use monitor::{DownloadMonitor, ProgressHandle};

#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;
