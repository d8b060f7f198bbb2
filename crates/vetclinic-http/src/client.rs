//! HTTP client for the clinic API.

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use vetclinic_core::error::{NetworkError, ServerError};
use vetclinic_core::{ApiUrl, Error, Locale, Resource, Result};

use crate::config::{ClientConfig, PaginationMode};
use crate::resource::HttpResource;
use crate::wire::ErrorBody;

/// Shared HTTP client; cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Setup`] if the TLS backend cannot be initialised.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("vetclinic/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| NetworkError::Setup {
            message: e.to_string(),
        })?;

        Ok(Self { client, config })
    }

    /// Bind this client to one entity type.
    pub fn resource<R: Resource>(&self) -> HttpResource<R> {
        HttpResource::new(self.clone())
    }

    pub fn base(&self) -> &ApiUrl {
        &self.config.base
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn pagination(&self) -> PaginationMode {
        self.config.pagination
    }

    /// GET a URL with query parameters, returning the raw JSON body.
    #[instrument(skip(self, query), fields(%url))]
    pub(crate) async fn get_value(&self, url: Url, query: &[(String, String)]) -> Result<Value> {
        debug!("GET");
        trace!(?query, "query parameters");

        let response = self
            .request(Method::GET, url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// GET a URL and decode the body.
    pub(crate) async fn get_json<R: DeserializeOwned>(&self, url: Url) -> Result<R> {
        let value = self.get_value(url, &[]).await?;
        serde_json::from_value(value).map_err(decode)
    }

    /// POST or PUT a JSON body and decode the answer.
    #[instrument(skip(self, body), fields(%method, %url))]
    pub(crate) async fn send_json<B, R>(&self, method: Method, url: Url, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("sending JSON body");

        let response = self
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        let value = self.handle_response(response).await?;
        serde_json::from_value(value).map_err(decode)
    }

    /// DELETE a URL, returning the status and the (possibly empty) body.
    #[instrument(skip(self), fields(%url))]
    pub(crate) async fn delete(&self, url: Url) -> Result<(u16, Option<Value>)> {
        debug!("DELETE");

        let response = self
            .request(Method::DELETE, url)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Server(self.parse_error_response(response).await));
        }

        let text = response.text().await.map_err(transport)?;
        if text.trim().is_empty() {
            return Ok((status.as_u16(), None));
        }
        let value = serde_json::from_str(&text).map_err(decode)?;
        Ok((status.as_u16(), Some(value)))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Decode a success body or turn the failure into a [`ServerError`].
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<Value>().await.map_err(transport)?;
            Ok(body)
        } else {
            Err(Error::Server(self.parse_error_response(response).await))
        }
    }

    async fn parse_error_response(&self, response: Response) -> ServerError {
        let status = response.status().as_u16();

        match response.json::<ErrorBody>().await {
            Ok(body) => ServerError::new(status, Some(body.into_detail())),
            Err(_) => ServerError::new(status, None),
        }
    }
}

/// Map a reqwest failure into the crate's error type.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        NetworkError::Timeout.into()
    } else if err.is_connect() {
        NetworkError::Connection {
            message: err.to_string(),
        }
        .into()
    } else if err.is_decode() {
        Error::Decode {
            message: err.to_string(),
        }
    } else {
        NetworkError::Http {
            message: err.to_string(),
        }
        .into()
    }
}

pub(crate) fn decode(err: serde_json::Error) -> Error {
    Error::Decode {
        message: err.to_string(),
    }
}
