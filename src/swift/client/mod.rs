// OpenStack Swift Rust Library for Object Storage
// Copyright 2025 MinIO, Inc.
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

//! Swift client, its builder and the authenticated request pipeline

use crate::swift::auth::{AuthEvent, AuthRequest, AuthScheme, AuthState, authenticate};
use crate::swift::creds::{Credentials, Provider, Session, StaticProvider};
use crate::swift::error::{AuthErr, AuthFailure, ConfigErr, Error, NetworkError, ValidationErr};
use crate::swift::header_constants::*;
use crate::swift::http::build_url;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::object_content::ObjectContent;
use crate::swift::swift_error_response::check_response;
use async_std::sync::Mutex;
pub use http::Method;
use reqwest::Body;
pub use reqwest::Response;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

mod copy_object;
mod create_container;
mod delete_container;
mod delete_object;
mod get_object;
mod list_containers;
mod list_objects;
mod put_object;
mod show_account_metadata;
mod show_container_metadata;
mod show_object_metadata;
mod update_account_metadata;
mod update_container_metadata;
mod update_object_metadata;

/// Configuration for the HTTP connection pool.
///
/// # Example
///
/// ```
/// use openstack::swift::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(8)
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

/// Client Builder manufactures a [`SwiftClient`] using given parameters.
///
/// A client either authenticates lazily on first use (auth URL plus credentials) or
/// starts from a pre-established session (storage URL plus token).
#[derive(Debug, Default)]
pub struct SwiftClientBuilder {
    auth_url: Option<String>,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    tenant_name: Option<String>,
    region_name: Option<String>,
    auth_scheme: Option<AuthScheme>,
    storage_url: Option<String>,
    token: Option<String>,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
}

impl SwiftClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from the `SWIFT_*` environment variables.
    ///
    /// | Variable            | Setting                          |
    /// |---------------------|----------------------------------|
    /// | `SWIFT_AUTH_URL`    | [`auth_url`](Self::auth_url)     |
    /// | `SWIFT_API_USER`    | account name                     |
    /// | `SWIFT_API_KEY`     | secret                           |
    /// | `SWIFT_TENANT_NAME` | [`tenant_name`](Self::tenant_name) |
    /// | `SWIFT_REGION_NAME` | [`region_name`](Self::region_name) |
    /// | `SWIFT_STORAGE_URL` | [`storage_url`](Self::storage_url) |
    /// | `SWIFT_USER_TOKEN`  | [`token`](Self::token)           |
    /// | `SWIFT_SKIP_SECURE` | [`ignore_cert_check`](Self::ignore_cert_check) |
    ///
    /// Empty variables are treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let mut builder = Self::new();
        builder.auth_url = var("SWIFT_AUTH_URL");
        if let (Some(user), Some(key)) = (var("SWIFT_API_USER"), var("SWIFT_API_KEY")) {
            builder = builder.credentials(&user, &key);
        }
        builder.tenant_name = var("SWIFT_TENANT_NAME");
        builder.region_name = var("SWIFT_REGION_NAME");
        builder.storage_url = var("SWIFT_STORAGE_URL");
        builder.token = var("SWIFT_USER_TOKEN");
        builder.ignore_cert_check = var("SWIFT_SKIP_SECURE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"));
        builder
    }

    /// Set the auth endpoint, e.g. `http://127.0.0.1:8080/auth/v1.0` or
    /// `https://keystone:5000/v2.0/tokens`.
    pub fn auth_url<S: Into<String>>(mut self, auth_url: S) -> Self {
        self.auth_url = Some(auth_url.into());
        self
    }

    /// Set the account name (TempAuth user or Keystone username) and its secret.
    pub fn credentials(self, account_name: &str, secret: &str) -> Self {
        self.provider(Some(StaticProvider::new(account_name, secret)))
    }

    /// Set the credential provider.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Keystone tenant (project) name.
    pub fn tenant_name<S: Into<String>>(mut self, tenant_name: S) -> Self {
        self.tenant_name = Some(tenant_name.into());
        self
    }

    /// Keystone region whose object-store endpoint is used.
    pub fn region_name<S: Into<String>>(mut self, region_name: S) -> Self {
        self.region_name = Some(region_name.into());
        self
    }

    /// Set the auth protocol explicitly instead of deriving it from the auth URL path.
    pub fn auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = Some(auth_scheme);
        self
    }

    /// Storage endpoint of a pre-established session. Used together with [`token`](Self::token).
    pub fn storage_url<S: Into<String>>(mut self, storage_url: S) -> Self {
        self.storage_url = Some(storage_url.into());
        self
    }

    /// Token of a pre-established session. Used together with [`storage_url`](Self::storage_url).
    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
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

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<SwiftClient, Error> {
        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("Swift (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") openstack-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent.clone());

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
            let buf = std::fs::read(v).map_err(ConfigErr::CertFile)?;
            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(ConfigErr::HttpClient)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let auth_url = match self.auth_url {
            Some(url) => Some(Url::parse(&url).map_err(|source| ConfigErr::InvalidUrl {
                url: url.clone(),
                source,
            })?),
            None => None,
        };

        let auth_state = match (self.storage_url, self.token) {
            (Some(storage_url), Some(token)) => match Session::try_new(token, storage_url) {
                Some(session) => AuthState::Authenticated(session),
                None => AuthState::Unauthenticated,
            },
            (None, None) => AuthState::Unauthenticated,
            _ => {
                log::warn!("storage URL and token must be given together; ignoring the one provided");
                AuthState::Unauthenticated
            }
        };

        Ok(SwiftClient {
            http_client: builder.build().map_err(ConfigErr::HttpClient)?,
            shared: Arc::new(SharedClientItems {
                auth_url,
                provider: self.provider,
                tenant_name: self.tenant_name,
                region_name: self.region_name,
                auth_scheme: self.auth_scheme,
                user_agent,
                auth_state: Mutex::new(auth_state),
            }),
        })
    }
}

/// OpenStack Swift client to perform account, container and object operations.
///
/// Cloning is cheap: clones share the transport and the authenticated session.
#[derive(Clone, Debug)]
pub struct SwiftClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    auth_url: Option<Url>,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    tenant_name: Option<String>,
    region_name: Option<String>,
    auth_scheme: Option<AuthScheme>,
    user_agent: String,
    auth_state: Mutex<AuthState>,
}

impl SwiftClient {
    /// Returns a client that authenticates against `auth_url` with the given account and secret.
    ///
    /// # Examples
    ///
    /// ```
    /// use openstack::swift::client::SwiftClient;
    ///
    /// let client = SwiftClient::new("http://127.0.0.1:8080/auth/v1.0", "test:tester", "testing").unwrap();
    /// ```
    pub fn new(auth_url: &str, account_name: &str, secret: &str) -> Result<Self, Error> {
        SwiftClientBuilder::new()
            .auth_url(auth_url)
            .credentials(account_name, secret)
            .build()
    }

    /// User agent sent with every request that does not set its own.
    pub fn user_agent(&self) -> &str {
        &self.shared.user_agent
    }

    /// Snapshot of the authentication state.
    pub async fn auth_state(&self) -> AuthState {
        self.shared.auth_state.lock().await.clone()
    }

    /// Authenticates now if no session exists yet and returns the session.
    pub async fn authenticate(&self) -> Result<Session, Error> {
        self.session().await
    }

    /// Forgets the current session (or a failed attempt); the next request
    /// authenticates again.
    pub async fn reset_session(&self) {
        let mut state = self.shared.auth_state.lock().await;
        *state = std::mem::take(&mut *state).transition(AuthEvent::Reset);
        log::debug!("swift session reset");
    }

    /// Resolves the session, running authentication at most once at a time.
    async fn session(&self) -> Result<Session, Error> {
        let mut state = self.shared.auth_state.lock().await;
        match &*state {
            AuthState::Authenticated(s) => return Ok(s.clone()),
            AuthState::Failed(f) => return Err(AuthErr::PreviouslyFailed(f.clone()).into()),
            AuthState::Unauthenticated | AuthState::Authenticating => {}
        }

        let credentials: Option<Credentials> = self
            .shared
            .provider
            .as_ref()
            .map(|p| p.fetch())
            .filter(Credentials::is_complete);
        let (auth_url, credentials) = match (&self.shared.auth_url, credentials) {
            (Some(u), Some(c)) => (u, c),
            _ => return Err(ConfigErr::MissingCredentials.into()),
        };
        let scheme = match self.shared.auth_scheme {
            Some(s) => s,
            None => AuthScheme::detect(auth_url)?,
        };

        *state = std::mem::take(&mut *state).transition(AuthEvent::Start);
        let result = authenticate(
            &self.http_client,
            AuthRequest {
                auth_url,
                scheme,
                credentials: &credentials,
                tenant_name: self.shared.tenant_name.as_deref(),
                region_name: self.shared.region_name.as_deref(),
                user_agent: &self.shared.user_agent,
            },
        )
        .await;

        match result {
            Ok(session) => {
                log::info!(
                    "authenticated as {} using {scheme}; storage URL {}",
                    credentials.account_name,
                    session.storage_url()
                );
                *state = std::mem::take(&mut *state).transition(AuthEvent::Succeeded(session.clone()));
                Ok(session)
            }
            Err(Error::Network(e)) => {
                log::warn!("authentication against {auth_url} did not complete: {e}");
                *state = std::mem::take(&mut *state).transition(AuthEvent::Reset);
                Err(Error::Network(e))
            }
            Err(e) if e.status_code().is_some_and(|code| code >= 500) => {
                log::warn!("authentication against {auth_url} hit a server error: {e}");
                *state = std::mem::take(&mut *state).transition(AuthEvent::Reset);
                Err(e)
            }
            Err(e) => {
                log::warn!("authentication against {auth_url} failed: {e}");
                let failure = AuthFailure::from(&e);
                *state = std::mem::take(&mut *state).transition(AuthEvent::Failed(failure));
                Err(e)
            }
        }
    }

    /// Sends one authenticated request and returns the response if its status is 2xx.
    ///
    /// `path` is relative to the storage URL and already percent-encoded. `format=json`
    /// is always sent. Caller headers are applied first, then `User-Agent` unless the
    /// caller set one, then the session's `X-Auth-Token`, which caller headers can
    /// never override.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        headers: &Multimap,
        query_params: &Multimap,
        body: Option<ObjectContent>,
    ) -> Result<reqwest::Response, Error> {
        let session = self.session().await?;

        let mut query = query_params.clone();
        query.remove_ignore_case(FORMAT);
        query.add(FORMAT, FORMAT_JSON);
        let url = build_url(session.storage_url(), path, &query);

        let mut headers = headers.clone();
        if !headers.remove_ignore_case(X_AUTH_TOKEN).is_empty() {
            log::warn!("ignoring caller supplied {X_AUTH_TOKEN} header");
        }
        headers.remove_ignore_case(CONTENT_LENGTH);
        if !headers.contains_key_ignore_case(USER_AGENT) {
            headers.add(USER_AGENT, self.shared.user_agent.as_str());
        }

        log::debug!("{method} {url}");
        let mut req = self.http_client.request(method.clone(), &url);
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        req = req.header(X_AUTH_TOKEN, session.token());

        match body {
            Some(content) => {
                let (stream, size) = content.to_stream().await.map_err(NetworkError::from)?;
                let length = size.value().ok_or(ValidationErr::ContentLengthUnknown)?;
                req = req
                    .header(CONTENT_LENGTH, length)
                    .body(Body::wrap_stream(stream));
            }
            None if sends_body(&method) => {
                req = req.header(CONTENT_LENGTH, 0);
            }
            None => {}
        }

        let resp = req.send().await.map_err(NetworkError::from)?;
        check_response(resp).await
    }
}

fn sends_body(method: &Method) -> bool {
    *method == Method::PUT || *method == Method::POST || method.as_str() == "COPY"
}
