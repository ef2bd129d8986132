//! The generic resource operation runner.
//!
//! Every resource call follows the same steps: build the URL from the base URL, a
//! resource path and path segments, optionally encode a JSON payload, execute the request
//! through the [`Transport`], check the status and decode the body. [`Operation`] describes
//! one such call and [`ApiClient`] runs it.

use crate::config::AnxcloudConfig;
use crate::error::{Error, Result};
use crate::query::QueryParams;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Description of a single API call.
#[derive(Debug, Clone)]
pub struct Operation<'a> {
    name: &'static str,
    method: Method,
    path: &'a str,
    segments: Vec<&'a str>,
    query: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

impl<'a> Operation<'a> {
    /// Create an operation named `name` calling `method` on the resource `path`.
    ///
    /// The name appears in every error the operation produces, e.g. `"address list"`.
    #[must_use]
    pub fn new(name: &'static str, method: Method, path: &'a str) -> Self {
        Self {
            name,
            method,
            path,
            segments: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A GET operation.
    #[must_use]
    pub fn get(name: &'static str, path: &'a str) -> Self {
        Self::new(name, Method::GET, path)
    }

    /// A POST operation.
    #[must_use]
    pub fn post(name: &'static str, path: &'a str) -> Self {
        Self::new(name, Method::POST, path)
    }

    /// A PUT operation.
    #[must_use]
    pub fn put(name: &'static str, path: &'a str) -> Self {
        Self::new(name, Method::PUT, path)
    }

    /// A DELETE operation.
    #[must_use]
    pub fn delete(name: &'static str, path: &'a str) -> Self {
        Self::new(name, Method::DELETE, path)
    }

    /// Append a path segment after the resource path. Segments are percent-encoded.
    #[must_use]
    pub fn segment(mut self, segment: &'a str) -> Self {
        self.segments.push(segment);
        self
    }

    /// Add query parameters.
    #[must_use]
    pub fn query(mut self, params: QueryParams) -> Self {
        self.query.extend(params.into_pairs());
        self
    }

    /// Attach a JSON encoded payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the payload cannot be serialized.
    pub fn json<B>(mut self, payload: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(|err| Error::Encode {
            operation: self.name,
            message: err.to_string(),
        })?;
        self.body = Some(body);
        Ok(self)
    }

    /// The operation name used in errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }
}

/// Runs [`Operation`]s against the API through a shared [`Transport`].
///
/// Cloning is cheap and clones share the transport. Dropping the future returned by
/// [`send`](Self::send) or [`send_empty`](Self::send_empty) aborts the in-flight request.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Wrap an existing transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a client with the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &AnxcloudConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Build a client from `ANEXIA_TOKEN` and `ANEXIA_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not set or the configuration is invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&AnxcloudConfig::from_env()?)
    }

    /// Access the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    /// Build the full request URL of an operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestConstruction`] if a path segment is empty or the base URL
    /// cannot carry a path.
    pub fn url_for(&self, operation: &Operation<'_>) -> Result<Url> {
        let construction = |message: String| Error::RequestConstruction {
            operation: operation.name,
            message,
        };

        if operation.segments.iter().any(|segment| segment.is_empty()) {
            return Err(construction("empty path segment".to_string()));
        }

        let mut url = self.transport.base_url().clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| construction("base URL cannot carry a path".to_string()))?;
            segments.pop_if_empty();
            segments.extend(operation.path.split('/').filter(|part| !part.is_empty()));
            segments.extend(operation.segments.iter());
        }

        if !operation.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                operation
                    .query
                    .iter()
                    .map(|(key, value)| (*key, value.as_str())),
            );
        }

        Ok(url)
    }

    /// Run an operation and decode the response body into `R`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or executed, the server answers
    /// with a non-success status, or the body does not decode into `R`.
    pub async fn send<R>(&self, operation: Operation<'_>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let name = operation.name;
        let response = self.dispatch(operation).await?;
        decode_body(name, &response)
    }

    /// Run an operation and discard the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or executed, or the server answers
    /// with a non-success status.
    pub async fn send_empty(&self, operation: Operation<'_>) -> Result<()> {
        self.dispatch(operation).await.map(|_| ())
    }

    async fn dispatch(&self, operation: Operation<'_>) -> Result<HttpResponse> {
        let url = self.url_for(&operation)?;
        let Operation {
            name, method, body, ..
        } = operation;

        debug!(operation = name, %method, %url, "sending request");

        let response = self
            .transport
            .execute(HttpRequest { method, url, body })
            .await
            .map_err(|source| Error::RequestExecution {
                operation: name,
                source,
            })?;

        debug!(
            operation = name,
            status = response.status.as_u16(),
            "received response"
        );

        if !response.status.is_success() {
            return Err(Error::from_status(name, response.status, &response.body));
        }

        Ok(response)
    }
}

fn decode_body<R>(operation: &'static str, response: &HttpResponse) -> Result<R>
where
    R: DeserializeOwned,
{
    let decoded = if response.status == StatusCode::NO_CONTENT || response.body.is_empty() {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(&response.body)
    };

    decoded.map_err(|err| Error::Decode {
        operation,
        message: err.to_string(),
    })
}
