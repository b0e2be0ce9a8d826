//! External collaborators consumed by the pipeline.
//!
//! Both stages are owned elsewhere; the traits pin down only what the
//! pipeline needs, and errors cross the boundary as `anyhow::Error` so
//! integrations plug in without a shared error type.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quaver_fetch::MediaStream;

/// Turns a resource URL into the catalog of its encoded streams.
#[async_trait]
pub trait StreamResolver: Send + Sync {
    /// Resolve the candidate streams for `resource_url`, in the resolver's
    /// preference order.
    async fn resolve(&self, resource_url: &str) -> anyhow::Result<Vec<MediaStream>>;
}

/// Converts a downloaded container file into a normalized audio file.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Extract the audio track of the container at `source`, returning the
    /// path of the produced file.
    async fn extract(&self, source: &Path) -> anyhow::Result<PathBuf>;
}
