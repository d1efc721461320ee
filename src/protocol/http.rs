// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for ZControl devices.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ConnectionError;
use crate::protocol::Connection;

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for an HTTP device connection.
///
/// Every request issued through the resulting connection uses the same
/// timeout.
///
/// # Examples
///
/// ```
/// use zctrl_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.60");
/// assert_eq!(config.base_url(), "http://192.168.1.60/");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.60")
///     .with_port(8080)
///     .with_https()
///     .with_credentials("admin", "password")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://192.168.1.60:8080/");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    credentials: Option<Credentials>,
    timeout: Duration,
}

/// HTTP basic authentication credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// An `http://` or `https://` prefix is accepted and selects the scheme;
    /// a trailing `/` is dropped.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let (use_https, bare) = if let Some(rest) = host.strip_prefix("https://") {
            (true, rest)
        } else {
            (false, host.strip_prefix("http://").unwrap_or(&host))
        };

        Self {
            host: bare.trim_end_matches('/').to_string(),
            port: if use_https {
                Self::DEFAULT_HTTPS_PORT
            } else {
                Self::DEFAULT_PORT
            },
            use_https,
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
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

    /// Sets basic authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
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

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    ///
    /// The URL always ends with `/` so resource paths resolve beneath it.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}/", self.host)
    }

    /// Creates an [`HttpConnection`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// created.
    pub fn into_connection(self) -> Result<HttpConnection, ConnectionError> {
        let base_url = self.base_url();
        HttpConnection::build(&base_url, self.timeout, self.credentials)
    }
}

// ============================================================================
// HttpConnection - Connection implementation
// ============================================================================

/// HTTP connection to a ZControl device.
///
/// Resource paths are joined against the base URL, so a base URL with a path
/// prefix (`http://gateway/pit/`) works as expected.
///
/// # Examples
///
/// ```no_run
/// use zctrl_lib::protocol::{Connection, HttpConnection};
///
/// # async fn example() -> zctrl_lib::Result<()> {
/// let connection = HttpConnection::new("192.168.1.60")?;
/// let body = connection.fetch_resource("status.xml").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpConnection {
    base_url: Url,
    client: Client,
    credentials: Option<Credentials>,
}

impl HttpConnection {
    /// Creates a connection with default settings.
    ///
    /// # Arguments
    ///
    /// * `host` - A hostname, IP address or full `http(s)://` URL
    ///
    /// # Errors
    ///
    /// Returns error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ConnectionError> {
        let host = host.into();
        let mut base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("http://{host}")
        };
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self::build(&base_url, HttpConfig::DEFAULT_TIMEOUT, None)
    }

    fn build(
        base_url: &str,
        timeout: Duration,
        credentials: Option<Credentials>,
    ) -> Result<Self, ConnectionError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConnectionError::InvalidAddress(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConnectionError::Failed {
                url: base_url.to_string(),
                reason: Some(e.to_string()),
            })?;

        Ok(Self {
            base_url,
            client,
            credentials,
        })
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Resolves a resource path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::InvalidAddress`] if the path cannot be
    /// joined.
    pub fn resource_url(&self, path: &str) -> Result<Url, ConnectionError> {
        self.base_url
            .join(path)
            .map_err(|e| ConnectionError::InvalidAddress(format!("{path}: {e}")))
    }
}

impl Connection for HttpConnection {
    async fn fetch_resource(&self, path: &str) -> Result<String, ConnectionError> {
        let url = self.resource_url(path)?;

        tracing::debug!(url = %url, "Fetching resource");

        let mut request = self.client.get(url.clone());
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = format!(
                "HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            tracing::error!(url = %url, %reason, "Failed to fetch resource");
            return Err(ConnectionError::Failed {
                url: url.to_string(),
                reason: Some(reason),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&url, &e))?;

        tracing::debug!(url = %url, body = %body, "Fetched resource");

        Ok(body)
    }
}

fn transport_error(url: &Url, err: &reqwest::Error) -> ConnectionError {
    if err.is_timeout() {
        tracing::error!(url = %url, "Timed out while fetching resource");
        ConnectionError::Timeout {
            url: url.to_string(),
        }
    } else {
        tracing::error!(url = %url, error = %err, "Failed to fetch resource");
        ConnectionError::Failed {
            url: url.to_string(),
            reason: Some(err.to_string()),
        }
    }
}
