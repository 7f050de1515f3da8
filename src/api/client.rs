//! HTTP transport against the cloud.ca API.

use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use super::error::{ApiError, TransportError};
use super::request::{Options, Request};
use super::response::Response;

pub const DEFAULT_API_URL: &str = "https://api.cloud.ca/v1/";

const API_KEY_HEADER: &str = "MC-Api-Key";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues one request and decodes the envelope.
///
/// Domain errors come back as an `Ok` envelope with `is_error() == true`;
/// `Err` is reserved for transport failures and protocol violations.
pub trait ApiClient: Send + Sync {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, ApiError>> + Send;

    fn api_url(&self) -> &str;

    fn api_key(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct CcaClient {
    api_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl CcaClient {
    pub fn builder(api_key: impl Into<String>) -> CcaClientBuilder {
        CcaClientBuilder {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            insecure: false,
            connect_timeout: CONNECT_TIMEOUT,
        }
    }

    /// Join the base URL with `endpoint` and append `options` as query
    /// parameters.
    pub fn build_url(&self, endpoint: &str, options: &Options) -> Result<Url, TransportError> {
        let raw = format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            endpoint.trim_matches('/')
        );
        let mut url = Url::parse(&raw).map_err(|source| TransportError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;
        if !options.is_empty() {
            url.query_pairs_mut().extend_pairs(options.iter());
        }
        Ok(url)
    }
}

impl ApiClient for CcaClient {
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let url = self.build_url(&request.endpoint, &request.options)?;
        let url_text = url.to_string();

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|source| TransportError::Network {
                url: url_text.clone(),
                source,
            })?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|source| TransportError::Network {
                url: url_text,
                source,
            })?;

        Ok(Response::parse(status, &body)?)
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[derive(Debug)]
pub struct CcaClientBuilder {
    api_url: String,
    api_key: String,
    insecure: bool,
    connect_timeout: Duration,
}

impl CcaClientBuilder {
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Skip TLS certificate verification. Only for self-signed endpoints.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<CcaClient, ApiError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.connect_timeout);
        if self.insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build().map_err(TransportError::Client)?;

        Ok(CcaClient {
            api_url: self.api_url,
            api_key: self.api_key,
            http,
        })
    }
}
