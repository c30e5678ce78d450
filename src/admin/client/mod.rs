// RADOS Gateway Admin Rust Library
// Copyright 2025 rgw-admin contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Admin client and its builder
//!
//! Every operation method on [`AdminClient`] returns a builder; call
//! `.build().send().await` on it to perform the request.

use crate::admin::auth::{AdminAuth, BoxedAdminAuth, NoAuth};
use crate::admin::error::{Error, NetworkError, ServerError, ValidationErr};
use crate::admin::http::{BaseUrl, DEFAULT_ADMIN_PATH};
use crate::admin::params::ParamSet;
use http::{HeaderMap, Method};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod account;
mod bucket;
mod quota;
mod user;

/// Configuration for the HTTP connection pool.
///
/// # Example
///
/// ```
/// use rgw_admin::admin::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(4)
///     .idle_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: std::time::Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Builds an [`AdminClient`] for a gateway base URL.
#[derive(Debug)]
pub struct AdminClientBuilder {
    base_url: BaseUrl,
    /// Authenticator applied to every request. Defaults to [`NoAuth`].
    auth: Option<BoxedAdminAuth>,
    /// Path prefix of the admin API. Defaults to `/admin`.
    admin_path: String,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// (app_name, app_version) appended to the user-agent.
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
}

impl AdminClientBuilder {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            auth: None,
            admin_path: DEFAULT_ADMIN_PATH.to_string(),
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Set the authenticator. Without one, requests are sent unauthenticated.
    pub fn auth<A: AdminAuth + 'static>(mut self, auth: A) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    /// Set an already shared authenticator.
    pub fn boxed_auth(mut self, auth: BoxedAdminAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the path prefix the gateway serves the admin API under.
    pub fn admin_path(mut self, admin_path: impl Into<String>) -> Self {
        self.admin_path = admin_path.into();
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AdminClient, ValidationErr> {
        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("RGW-Admin (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") rgw-admin/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let buf = std::fs::read(v).map_err(ValidationErr::CertificateFile)?;
            let certs =
                reqwest::Certificate::from_pem_bundle(&buf).map_err(ValidationErr::HttpClient)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let auth = self.auth.unwrap_or_else(|| Arc::new(NoAuth::new()));
        log::debug!(
            "admin client for {} (prefix {:?}, auth {})",
            self.base_url,
            self.admin_path,
            auth.name()
        );

        Ok(AdminClient {
            http_client: builder.build().map_err(ValidationErr::HttpClient)?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                admin_path: self.admin_path,
                auth,
            }),
        })
    }
}

/// Client for the gateway admin operations API.
///
/// Cheap to clone; clones share the connection pool and configuration.
///
/// # Example
///
/// ```no_run
/// use rgw_admin::admin::auth::BearerAuth;
/// use rgw_admin::admin::client::AdminClient;
/// use rgw_admin::admin::types::{Account, AdminApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AdminClient::builder("http://rgw.local:7480".parse()?)
///     .auth(BearerAuth::new("token"))
///     .build()?;
///
/// let resp = client
///     .get_account(Account::with_id("RGW11111111111111111"))
///     .build()
///     .send()
///     .await?;
/// println!("{}", resp.account().name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AdminClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) admin_path: String,
    pub(crate) auth: BoxedAdminAuth,
}

impl AdminClient {
    /// Returns a client for the given base URL with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_admin::admin::client::AdminClient;
    /// use rgw_admin::admin::auth::NoAuth;
    ///
    /// let client = AdminClient::new("http://localhost:7480".parse().unwrap(), NoAuth).unwrap();
    /// assert_eq!(client.auth_name(), "NoAuth");
    /// ```
    pub fn new<A: AdminAuth + 'static>(base_url: BaseUrl, auth: A) -> Result<Self, ValidationErr> {
        AdminClientBuilder::new(base_url).auth(auth).build()
    }

    pub fn builder(base_url: BaseUrl) -> AdminClientBuilder {
        AdminClientBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn admin_path(&self) -> &str {
        &self.shared.admin_path
    }

    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    /// Name of the configured authentication provider
    pub fn auth_name(&self) -> &'static str {
        self.shared.auth.name()
    }

    /// Sends one admin request.
    ///
    /// `path` is relative to the admin prefix. Parameters always travel in the
    /// query string. A non-2xx status becomes [`ServerError::HttpError`] with
    /// the body text kept verbatim; the body of a 2xx response is left unread.
    pub(crate) async fn execute(
        &self,
        method: &Method,
        path: &str,
        headers: &mut HeaderMap,
        query_params: &ParamSet,
    ) -> Result<reqwest::Response, Error> {
        let url = self
            .shared
            .base_url
            .build_url(&self.shared.admin_path, path, query_params);

        self.shared
            .auth
            .authenticate(method, &url.path, headers, query_params)?;

        // parameter values may carry secrets; log names only
        log::debug!(
            "{method} {}{} params={:?}",
            url.host_header_value(),
            url.path,
            query_params.keys().collect::<Vec<_>>()
        );

        let response = self
            .http_client
            .request(method.clone(), url.to_string())
            .headers(headers.clone())
            .send()
            .await
            .map_err(NetworkError::ReqwestError)?;

        let status = response.status();
        log::debug!("{method} {} -> {status}", url.path);

        if !status.is_success() {
            return Err(http_error(status.as_u16(), response.text().await));
        }

        Ok(response)
    }
}

/// Error for a non-2xx response. The status is kept even when the body
/// could not be read, in which case the body is empty.
fn http_error<E>(status: u16, body: Result<String, E>) -> Error {
    ServerError::HttpError {
        status,
        body: body.unwrap_or_default(),
    }
    .into()
}
