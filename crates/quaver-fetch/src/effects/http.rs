use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// An opened response: status, advertised length, and the body stream.
pub struct FetchedBody<E> {
    /// HTTP status code of the response.
    pub status: u16,

    /// Content-Length, when the server sent one.
    pub content_length: Option<u64>,

    /// The response body as a stream of chunks.
    pub body: BoxStream<'static, Result<Bytes, E>>,
}

/// Asynchronous HTTP transport abstraction.
///
/// The minimal surface the download coordinator needs: open a streaming
/// GET and hand back status, length, and body. Implementations own their
/// redirect and TLS configuration and must not serve cached bodies: every
/// fetch goes to origin.
///
/// # Implementations
///
/// - [`ReqwestTransport`]: production implementation using `reqwest`
/// - Scripted implementations for testing
pub trait HttpTransport: Send + Sync {
    /// Error type for transport operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open a streaming connection to `url`.
    ///
    /// `headers` are sent in addition to whatever the implementation adds
    /// itself. Errors cover DNS failure, connection errors, and TLS
    /// problems; non-success HTTP statuses are returned in
    /// [`FetchedBody::status`], not as errors.
    fn fetch(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<FetchedBody<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP transport backed by `reqwest`.
    ///
    /// Every request carries `Cache-Control: no-cache` and `Pragma:
    /// no-cache` so intermediaries never serve a stale or partial prior
    /// attempt.
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Create a transport with default client configuration.
        pub fn new() -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder().build()?;
            Ok(Self { client })
        }

        /// Wrap an already configured client (proxies, TLS, ...).
        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl HttpTransport for ReqwestTransport {
        type Error = reqwest::Error;

        async fn fetch(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> Result<FetchedBody<Self::Error>, Self::Error> {
            let mut request = self
                .client
                .get(url)
                .header(reqwest::header::CACHE_CONTROL, "no-cache")
                .header(reqwest::header::PRAGMA, "no-cache");

            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            let status = response.status().as_u16();
            let content_length = response.content_length();

            Ok(FetchedBody {
                status,
                content_length,
                body: Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
