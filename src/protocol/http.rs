// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Blocking HTTP transport for the IPX800 API.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::ProtocolError;
use crate::protocol::{Protocol, Query};

/// Path of the JSON query endpoint on the controller.
const API_PATH: &str = "/api/xdevices.json";

/// Default API key of a factory-configured IPX800.
pub const DEFAULT_API_KEY: &str = "apikey";

/// Default request timeout. The controller answers on the LAN, a slow
/// answer means it is unreachable.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for an HTTP connection to an IPX800.
///
/// # Examples
///
/// ```
/// use ipx800_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.50")
///     .with_port(8080)
///     .with_api_key("s3cret")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://192.168.1.50:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    api_key: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;

    /// Creates a new HTTP configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the API key sent with every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty, includes a scheme (use
    /// [`HttpConfig::with_https`] instead), or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is empty".to_string()));
        }
        if self.host.contains("://") {
            return Err(ProtocolError::InvalidAddress(format!(
                "host must not include a scheme: {}",
                self.host
            )));
        }
        let base_url = self.base_url();
        HttpClient::with_parts(base_url, self.api_key, self.timeout)
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the IPX800 `/api/xdevices.json` endpoint.
///
/// Each call to [`Protocol::send`] is one blocking `GET`. There is no
/// connection state to manage and failed requests are not retried.
///
/// # Examples
///
/// ```no_run
/// use ipx800_lib::protocol::{HttpClient, Protocol, Query};
///
/// # fn example() -> ipx800_lib::Result<()> {
/// let client = HttpClient::new("http://192.168.1.50")?;
/// let body = client.send(&Query::new().with("Get", "R"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default API key and timeout.
    ///
    /// `host` may be a bare host (`192.168.1.50`) or a URL
    /// (`http://192.168.1.50:8080`).
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpClientBuilder::new().host(host).build()
    }

    fn with_parts(
        base_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, ProtocolError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Replaces the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Builds the request URL. `key` is always the first parameter.
    fn build_url(&self, query: &Query) -> String {
        let mut url = format!(
            "{}{API_PATH}?key={}",
            self.base_url,
            urlencoding::encode(&self.api_key)
        );
        if !query.params().is_empty() {
            url.push('&');
            url.push_str(&query.to_string());
        }
        url
    }
}

impl Protocol for HttpClient {
    fn send(&self, query: &Query) -> Result<String, ProtocolError> {
        let url = self.build_url(query);

        tracing::debug!(base_url = %self.base_url, query = %query, "Sending IPX800 request");

        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text()?;

        tracing::debug!(body = %body, "Received IPX800 response");

        Ok(body)
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    host: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host address or base URL.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if host is not set or client creation fails.
    pub fn build(self) -> Result<HttpClient, ProtocolError> {
        let host = self
            .host
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| ProtocolError::InvalidAddress("host is required".to_string()))?;

        let host = host.trim().trim_end_matches('/');
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };

        HttpClient::with_parts(
            base_url,
            self.api_key.unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )
    }
}
