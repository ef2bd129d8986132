//! The transport seam between resource clients and the network.
//!
//! Resource clients never talk to reqwest directly. They hand an [`HttpRequest`] to a
//! [`Transport`], which owns authentication and connection handling and returns the raw
//! [`HttpResponse`]. [`HttpTransport`] is the default implementation.

use crate::config::AnxcloudConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::warn;
use url::Url;

const USER_AGENT: &str = concat!("anxcloud-rust/", env!("CARGO_PKG_VERSION"));

/// Failure to get a response from the server at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete in time
    #[error("request timed out: {0}")]
    Timeout(String),

    /// No connection could be established (DNS, refused, TLS handshake)
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request failed for another reason
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read
    #[error("could not read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// A fully built request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL including query parameters.
    pub url: Url,
    /// JSON encoded body, if any.
    pub body: Option<Vec<u8>>,
}

/// A response with its body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response from a status and body.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Executes requests against the API.
///
/// Implementations must be safe to share between concurrently running operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base URL every resource path is appended to.
    fn base_url(&self) -> &Url;

    /// Send the request and read the whole response body.
    async fn execute(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportError>;
}

/// reqwest backed [`Transport`] authenticating with an API token.
pub struct HttpTransport {
    http: Client,
    base_url: Url,
    token: SecretString,
}

impl HttpTransport {
    /// Build the transport from a client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be built.
    pub fn new(config: &AnxcloudConfig) -> Result<Self> {
        config.check()?;
        let base_url = config.parse_base_url()?;

        let mut builder = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout())
            .gzip(config.compression());

        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        if !config.tls_verify() {
            warn!("TLS verification disabled for Anexia API client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url,
            token: SecretString::from(config.token().expose_secret().to_owned()),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn execute(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Token {}", self.token.expose_secret()));

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
