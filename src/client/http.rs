//! HTTP client implementation for the GoCardless API.

use std::env;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::api::{CurrencyExchangeRatesService, MandateImportsService, MandatePdfsService};
use crate::models::{ListResult, Resource};
use crate::{Environment, Error, Result};

use super::config::{ClientConfig, CLIENT_LIBRARY, CLIENT_VERSION};
use super::envelope::Envelope;
use super::options::{RequestOption, RequestOptions};
use super::query::to_query_pairs;
use super::retry::{self, RetryPolicy};

/// Environment variable holding the access token for [`GoCardlessClient::from_env`].
pub const ACCESS_TOKEN_VAR: &str = "GOCARDLESS_ACCESS_TOKEN";

/// Environment variable selecting `live` or `sandbox` for [`GoCardlessClient::from_env`].
pub const ENVIRONMENT_VAR: &str = "GOCARDLESS_ENVIRONMENT";

/// The main client for interacting with the GoCardless API.
///
/// Cloning is cheap; clones share one connection pool and configuration.
///
/// # Example
///
/// ```no_run
/// use gocardless_rs::{ClientConfig, Environment, GoCardlessClient, RequestOption};
/// use gocardless_rs::api::MandateImportCreateParams;
/// use gocardless_rs::models::Scheme;
///
/// # async fn example() -> gocardless_rs::Result<()> {
/// let client = GoCardlessClient::new(
///     "your-access-token",
///     ClientConfig::default().with_environment(Environment::Sandbox),
/// )?;
///
/// let import = client
///     .mandate_imports()
///     .create(
///         &MandateImportCreateParams { scheme: Scheme::Bacs },
///         &[RequestOption::retries(1)],
///     )
///     .await?;
/// println!("Created {} ({:?})", import.id, import.status);
/// # Ok(())
/// # }
/// ```
pub struct GoCardlessClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) token: SecretString,
    pub(crate) config: ClientConfig,
    endpoint: String,
}

impl GoCardlessClient {
    /// Create a client authenticating with `access_token`.
    pub fn new(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let token = access_token.into();
        if token.trim().is_empty() {
            return Err(Error::Config("Access token must not be empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                token: SecretString::from(token),
                endpoint: config.endpoint(),
                config,
            }),
        })
    }

    /// Create a client for the sandbox environment with default settings.
    pub fn sandbox(access_token: impl Into<String>) -> Result<Self> {
        Self::new(
            access_token,
            ClientConfig::default().with_environment(Environment::Sandbox),
        )
    }

    /// Create a client from `GOCARDLESS_ACCESS_TOKEN` and, optionally,
    /// `GOCARDLESS_ENVIRONMENT` (`live` or `sandbox`, default `live`).
    pub fn from_env() -> Result<Self> {
        let token = env::var(ACCESS_TOKEN_VAR)
            .map_err(|_| Error::Config(format!("{} must be set", ACCESS_TOKEN_VAR)))?;

        let environment = match env::var(ENVIRONMENT_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        Self::new(token, ClientConfig::default().with_environment(environment))
    }

    /// Get the currency exchange rates service.
    pub fn currency_exchange_rates(&self) -> CurrencyExchangeRatesService {
        CurrencyExchangeRatesService::new(self.inner.clone())
    }

    /// Get the mandate imports service.
    pub fn mandate_imports(&self) -> MandateImportsService {
        MandateImportsService::new(self.inner.clone())
    }

    /// Get the mandate PDFs service.
    pub fn mandate_pdfs(&self) -> MandatePdfsService {
        MandatePdfsService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Resolve per-call options on top of the configured retry count.
    pub(crate) fn resolve_options(&self, opts: &[RequestOption]) -> Result<RequestOptions> {
        RequestOptions::resolve(self.config.retry.max_retries, opts)
    }

    /// Build the URL of `path` followed by the escaped `segments`.
    fn url(&self, path: &str, segments: &[&str], query: &[(String, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.endpoint, path))?;
        if !segments.is_empty() {
            if let Some(bad) = segments.iter().find(|s| matches!(s.trim(), "" | "." | "..")) {
                return Err(Error::InvalidInput(format!("Invalid path segment {:?}", bad)));
            }
            url.path_segments_mut()
                .map_err(|_| Error::Config(format!("Invalid base URL {}", self.endpoint)))?
                .extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Build the headers sent with every attempt of a call.
    fn build_headers(&self, opts: &RequestOptions, idempotency_key: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token.expose_secret()))
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            "gocardless-version",
            HeaderValue::from_str(self.config.api_version.as_str())
                .map_err(|_| Error::InvalidInput("Invalid API version".to_string()))?,
        );
        headers.insert("gocardless-client-library", HeaderValue::from_static(CLIENT_LIBRARY));
        headers.insert("gocardless-client-version", HeaderValue::from_static(CLIENT_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent)
                .map_err(|_| Error::Config("Invalid User-Agent".to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = idempotency_key {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers.insert(
                "idempotency-key",
                HeaderValue::from_str(key)
                    .map_err(|_| Error::InvalidInput("Invalid idempotency key".to_string()))?,
            );
        }

        for (name, value) in &opts.headers {
            headers.insert(name.clone(), value.clone());
        }

        Ok(headers)
    }

    /// Fetch a single resource at `T::PATH` followed by `segments`.
    pub(crate) async fn get<T: Resource>(&self, segments: &[&str], opts: &[RequestOption]) -> Result<T> {
        let opts = self.resolve_options(opts)?;
        let url = self.url(T::PATH, segments, &[])?;
        let headers = self.build_headers(&opts, None)?;

        self.execute(Method::GET, url, headers, None, &opts, |body| {
            Envelope::<T>::decode(body, T::KEY)
        })
        .await
    }

    /// Fetch one page of a collection.
    pub(crate) async fn list<T: Resource, Q: Serialize>(
        &self,
        params: &Q,
        opts: &[RequestOption],
    ) -> Result<ListResult<T>> {
        let opts = self.resolve_options(opts)?;
        let url = self.url(T::PATH, &[], &to_query_pairs(params)?)?;
        let headers = self.build_headers(&opts, None)?;

        self.execute(Method::GET, url, headers, None, &opts, |body| {
            Envelope::<ListResult<T>>::decode_list(body, T::KEY)
        })
        .await
    }

    /// Send a mutating request to `T::PATH` followed by `segments`, with
    /// body `{body_key: params}`.
    ///
    /// An idempotency key is generated unless one was supplied, and is reused
    /// by every retry of this call.
    pub(crate) async fn post<T: Resource, B: Serialize>(
        &self,
        segments: &[&str],
        body_key: &str,
        params: &B,
        opts: &[RequestOption],
    ) -> Result<T> {
        let mut opts = self.resolve_options(opts)?;
        let url = self.url(T::PATH, segments, &[])?;

        let mut wrapper = Map::new();
        wrapper.insert(body_key.to_string(), serde_json::to_value(params)?);
        let body = serde_json::to_vec(&Value::Object(wrapper))?;

        let key = opts.ensure_idempotency_key().to_string();
        let headers = self.build_headers(&opts, Some(&key))?;

        self.execute(Method::POST, url, headers, Some(body), &opts, |body| {
            Envelope::<T>::decode(body, T::KEY)
        })
        .await
    }

    /// Run the request under the retry policy, decoding each response.
    async fn execute<T, D>(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
        opts: &RequestOptions,
        decode: D,
    ) -> Result<T>
    where
        D: Fn(&[u8]) -> Result<Envelope<T>>,
    {
        let policy = RetryPolicy::new(opts.retries)
            .with_backoff(self.config.retry.clone())
            .with_timeout(opts.timeout);
        let decode = &decode;

        retry::execute(&policy, |attempt| {
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .headers(headers.clone());
            if let Some(ref body) = body {
                request = request.body(body.clone());
            }

            let method = &method;
            let path = url.path();
            async move {
                tracing::debug!(%method, path, attempt = attempt + 1, "sending request");

                let response = request.send().await?;
                let status = response.status();
                let bytes = response.bytes().await?;

                if !status.is_success() {
                    return Err(Error::from_status_response(status.as_u16(), &bytes));
                }

                decode(&bytes)?.into_result()
            }
        })
        .await
    }
}

impl Clone for GoCardlessClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for GoCardlessClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoCardlessClient")
            .field("endpoint", &self.inner.endpoint)
            .field("config", &self.inner.config)
            .finish()
    }
}
