//! Authenticated JSON-over-HTTP plumbing
//!
//! Every backend call goes through [`ApiClient::fetch_api`], which attaches the
//! JSON content type and, when the session holds a token, the bearer
//! credential.

use reqwest::{
    Method, Response,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    error::{ClientError, ClientResult},
    session::SessionManager,
};

/// Caller-supplied request options
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method, GET when unset
    pub method: Option<Method>,
    /// Extra headers, applied over the JSON content type
    pub headers: HeaderMap,
    /// URL query pairs
    pub query: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<Value>,
}

impl RequestOptions {
    /// Plain GET
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with a JSON body
    pub fn post(body: Value) -> Self {
        Self {
            method: Some(Method::POST),
            body: Some(body),
            ..Self::default()
        }
    }

    /// PUT without a body
    pub fn put() -> Self {
        Self {
            method: Some(Method::PUT),
            ..Self::default()
        }
    }

    /// Add a query pair
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP client for the EquipTrack backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionManager,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, session: SessionManager) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, session)
    }

    /// Create a new API client on top of an existing connection pool
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: SessionManager,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    /// Session used to authenticate requests
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Backend origin requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and parse the JSON response body
    pub async fn fetch_api<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<T> {
        let result = match self.send(path, options).await {
            Ok(response) => response.json::<T>().await.map_err(ClientError::Decode),
            Err(e) => Err(e),
        };

        result.inspect_err(|e| error!("API error: {}", e))
    }

    /// Issue a request whose response carries no body
    pub async fn fetch_api_no_content(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<()> {
        self.send(path, options)
            .await
            .map(|_| ())
            .inspect_err(|e| error!("API error: {}", e))
    }

    async fn send(&self, path: &str, options: RequestOptions) -> ClientResult<Response> {
        let headers = self.headers_for(options.headers)?;
        let method = options.method.unwrap_or(Method::GET);
        let url = format!("{}{}", self.base_url, path);

        debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = options.body {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await.map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Request { status });
        }

        Ok(response)
    }

    /// Merge caller headers over the JSON content type, then attach the token
    fn headers_for(&self, extra: HeaderMap) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra.iter() {
            headers.insert(name.clone(), value.clone());
        }

        if let Some(token) = self.session.token()? {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => error!("Cached token is not a valid header value: {}", e),
            }
        }

        Ok(headers)
    }
}
