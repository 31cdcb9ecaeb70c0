//! Authenticated HTTP transport
//!
//! Issues one GET per call and maps the response:
//! - 2xx: the body is decoded into the requested type
//! - non-2xx with a `{"message": ...}` body: [`Error::Api`]
//! - any other non-2xx: [`Error::HttpStatus`]
//!
//! The response body is always read to the end, whatever the outcome, so
//! the connection goes back to the pool. There is no retry anywhere.

use crate::auth::{Authenticator, CallContext};
use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};
use bytes::Bytes;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use tracing::debug;
use url::Url;

/// Query parameters of a request, in insertion order. Keys may repeat.
pub type QueryParams = Vec<(&'static str, String)>;

/// Body of a non-2xx response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP transport for the Qonto API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(config, client))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self {
            client,
            config,
            authenticator: Authenticator::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Join the base URL (resolved now) with `path` segments and `query`.
    ///
    /// Each segment is percent-encoded on its own.
    pub fn build_url(&self, path: &[&str], query: &[(&'static str, String)]) -> Result<Url> {
        let mut url = Url::parse(&self.config.resolved_base_url())?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::config("Base URL cannot carry a path"))?;
            segments.pop_if_empty();
            segments.extend(path);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Authenticated GET on `path`, decoding a 2xx body into `T`
    pub async fn authenticated_get<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        path: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let url = self.build_url(path, query)?;
        let req = self.authenticator.apply(ctx, self.prepare(ctx, Method::GET, &url))?;

        debug!("GET {}", url);
        let response = self.send(ctx, url.as_str(), req).await?;
        let status = response.status();
        let body = self.read_body(ctx, url.as_str(), response).await?;

        if !status.is_success() {
            return Err(map_error_body(&url, status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Unauthenticated GET of raw bytes from an absolute URL.
    ///
    /// Used for attachment downloads: the URL comes from the API and is
    /// already signed, so no `Authorization` header is added. Failures are
    /// reported as [`Error::Download`] to keep them apart from API calls.
    pub async fn download(&self, ctx: &CallContext, url: &str) -> Result<Bytes> {
        let parsed = Url::parse(url)?;
        let req = self.prepare(ctx, Method::GET, &parsed);

        debug!("GET {} (download)", parsed.host_str().unwrap_or_default());
        let to_download_error = |source| Error::Download {
            url: url.to_string(),
            source,
        };
        let response = guard(ctx, url, req.send())
            .await?
            .map_err(to_download_error)?;
        let status = response.status();
        let body = guard(ctx, url, response.bytes())
            .await?
            .map_err(to_download_error)?;

        if !status.is_success() {
            return Err(Error::DownloadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(body)
    }

    /// Build a request with default headers and the context timeout
    fn prepare(&self, ctx: &CallContext, method: Method, url: &Url) -> RequestBuilder {
        let mut req = self.client.request(method, url.clone());
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = ctx.timeout() {
            req = req.timeout(timeout);
        }
        req
    }

    async fn send(&self, ctx: &CallContext, url: &str, req: RequestBuilder) -> Result<Response> {
        guard(ctx, url, req.send())
            .await?
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })
    }

    async fn read_body(&self, ctx: &CallContext, url: &str, response: Response) -> Result<Bytes> {
        guard(ctx, url, response.bytes())
            .await?
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Run `fut` unless the context gets cancelled first
async fn guard<F: Future>(ctx: &CallContext, url: &str, fut: F) -> Result<F::Output> {
    let cancelled = || Error::Cancelled {
        url: url.to_string(),
    };
    match ctx.cancel_token() {
        None => Ok(fut.await),
        Some(token) if token.is_cancelled() => Err(cancelled()),
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => Err(cancelled()),
                output = fut => Ok(output),
            }
        }
    }
}

/// Map a non-2xx body to a structured or generic error
fn map_error_body(url: &Url, status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { message }) => Error::Api(ApiError {
            method: Method::GET,
            url: url.to_string(),
            status,
            message,
        }),
        Err(_) => Error::HttpStatus {
            url: url.to_string(),
            status,
        },
    }
}
