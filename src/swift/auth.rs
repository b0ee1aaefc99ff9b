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

//! Authentication against Swift TempAuth (v1.0) and Keystone (v2.0)
//!
//! The protocol is chosen by [`AuthScheme`], either configured explicitly or derived
//! from the auth URL path. Progress of a client's authentication is tracked by
//! [`AuthState`], whose transitions are a pure function of the current state and an
//! [`AuthEvent`].

use crate::swift::creds::{Credentials, Session};
use crate::swift::error::{AuthErr, AuthFailure, ConfigErr, Error, NetworkError, ValidationErr};
use crate::swift::header_constants::*;
use crate::swift::swift_error_response::check_response;
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Authentication protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    /// Swift's built-in TempAuth: `GET` with `X-Auth-User`/`X-Auth-Key`.
    TempAuth,
    /// Keystone identity v2.0 password authentication.
    KeystoneV2,
}

impl AuthScheme {
    /// Derives the scheme from the auth URL path.
    ///
    /// Empty segments (from leading, trailing or doubled slashes) are ignored. A second
    /// segment of `v1.0` selects TempAuth; otherwise a first segment of `v2` or `v2.0`
    /// selects Keystone v2.
    ///
    /// ```
    /// use openstack::swift::auth::AuthScheme;
    /// use url::Url;
    ///
    /// let url = Url::parse("http://127.0.0.1:8080/auth/v1.0").unwrap();
    /// assert_eq!(AuthScheme::detect(&url).unwrap(), AuthScheme::TempAuth);
    ///
    /// let url = Url::parse("https://keystone.example.com:5000/v2.0/tokens").unwrap();
    /// assert_eq!(AuthScheme::detect(&url).unwrap(), AuthScheme::KeystoneV2);
    /// ```
    pub fn detect(auth_url: &Url) -> Result<Self, ConfigErr> {
        let segments: Vec<&str> = auth_url
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        if segments.get(1) == Some(&"v1.0") {
            return Ok(AuthScheme::TempAuth);
        }
        match segments.first() {
            Some(&"v2") | Some(&"v2.0") => Ok(AuthScheme::KeystoneV2),
            _ => Err(ConfigErr::UnsupportedAuthVersion(auth_url.path().to_string())),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::TempAuth => f.write_str("TempAuth v1.0"),
            AuthScheme::KeystoneV2 => f.write_str("Keystone v2.0"),
        }
    }
}

/// Input of [`AuthState::transition`].
#[derive(Clone, Debug)]
pub enum AuthEvent {
    Start,
    Succeeded(Session),
    Failed(AuthFailure),
    Reset,
}

/// Authentication progress of a client.
#[derive(Clone, Debug, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated(Session),
    /// Terminal until reset; remembers the failed attempt.
    Failed(AuthFailure),
}

impl AuthState {
    /// Applies `event`. Transitions not listed below leave the state unchanged.
    ///
    /// | from               | event        | to                |
    /// |--------------------|--------------|-------------------|
    /// | `Unauthenticated`  | `Start`      | `Authenticating`  |
    /// | `Authenticating`   | `Succeeded`  | `Authenticated`   |
    /// | `Authenticating`   | `Failed`     | `Failed`          |
    /// | any                | `Reset`      | `Unauthenticated` |
    pub fn transition(self, event: AuthEvent) -> AuthState {
        match (self, event) {
            (_, AuthEvent::Reset) => AuthState::Unauthenticated,
            (AuthState::Unauthenticated, AuthEvent::Start) => AuthState::Authenticating,
            (AuthState::Authenticating, AuthEvent::Succeeded(s)) => AuthState::Authenticated(s),
            (AuthState::Authenticating, AuthEvent::Failed(r)) => AuthState::Failed(r),
            (state, _) => state,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(s) => Some(s),
            _ => None,
        }
    }
}

/// Everything an authentication attempt needs besides the transport.
#[derive(Clone, Debug)]
pub(crate) struct AuthRequest<'a> {
    pub(crate) auth_url: &'a Url,
    pub(crate) scheme: AuthScheme,
    pub(crate) credentials: &'a Credentials,
    pub(crate) tenant_name: Option<&'a str>,
    pub(crate) region_name: Option<&'a str>,
    pub(crate) user_agent: &'a str,
}

/// Runs the configured protocol once and returns the resulting session.
pub(crate) async fn authenticate(
    http_client: &reqwest::Client,
    req: AuthRequest<'_>,
) -> Result<Session, Error> {
    log::debug!("authenticating against {} using {}", req.auth_url, req.scheme);
    match req.scheme {
        AuthScheme::TempAuth => temp_auth(http_client, &req).await,
        AuthScheme::KeystoneV2 => keystone_v2_auth(http_client, &req).await,
    }
}

async fn temp_auth(http_client: &reqwest::Client, req: &AuthRequest<'_>) -> Result<Session, Error> {
    let resp = http_client
        .get(req.auth_url.as_str())
        .header(X_AUTH_USER, &req.credentials.account_name)
        .header(X_AUTH_KEY, &req.credentials.secret)
        .header(USER_AGENT, req.user_agent)
        .send()
        .await
        .map_err(NetworkError::from)?;
    let resp = check_response(resp).await?;
    Ok(session_from_temp_auth_headers(resp.headers())?)
}

/// Extracts the session from the headers of a successful TempAuth response.
pub(crate) fn session_from_temp_auth_headers(headers: &HeaderMap) -> Result<Session, AuthErr> {
    let read = |name: &'static str| -> Result<String, AuthErr> {
        let value = headers
            .get(name)
            .ok_or(AuthErr::MissingResponseHeader(name))?
            .to_str()
            .map_err(AuthErr::InvalidHeaderValue)?;
        if value.is_empty() {
            return Err(AuthErr::MissingResponseHeader(name));
        }
        Ok(value.to_string())
    };
    let storage_url = read(X_STORAGE_URL)?;
    let token = read(X_AUTH_TOKEN)?;
    Session::try_new(token, storage_url).ok_or(AuthErr::MissingToken)
}

#[derive(Serialize)]
struct KeystoneV2Request<'a> {
    auth: KeystoneV2Auth<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeystoneV2Auth<'a> {
    password_credentials: PasswordCredentials<'a>,
    tenant_name: &'a str,
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct KeystoneV2Response {
    access: AccessInfo,
}

#[derive(Deserialize)]
struct AccessInfo {
    #[serde(default)]
    token: TokenInfo,
    #[serde(default, rename = "serviceCatalog")]
    service_catalog: Vec<CatalogEntry>,
}

#[derive(Deserialize, Default)]
struct TokenInfo {
    #[serde(default)]
    id: String,
}

#[derive(Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    endpoints: Vec<EndpointInfo>,
}

#[derive(Deserialize)]
struct EndpointInfo {
    #[serde(default, rename = "publicURL")]
    public_url: String,
    #[serde(default)]
    region: String,
}

/// Encodes the password-credentials body of a Keystone v2 token request.
fn keystone_v2_payload(
    credentials: &Credentials,
    tenant_name: Option<&str>,
) -> Result<Vec<u8>, ValidationErr> {
    let payload = KeystoneV2Request {
        auth: KeystoneV2Auth {
            password_credentials: PasswordCredentials {
                username: &credentials.account_name,
                password: &credentials.secret,
            },
            tenant_name: tenant_name.unwrap_or_default(),
        },
    };
    Ok(serde_json::to_vec(&payload)?)
}

async fn keystone_v2_auth(
    http_client: &reqwest::Client,
    req: &AuthRequest<'_>,
) -> Result<Session, Error> {
    let body = keystone_v2_payload(req.credentials, req.tenant_name)?;
    let resp = http_client
        .post(req.auth_url.as_str())
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .header(USER_AGENT, req.user_agent)
        .body(body)
        .send()
        .await
        .map_err(NetworkError::from)?;
    let resp = check_response(resp).await?;
    let body = resp.bytes().await.map_err(NetworkError::from)?;
    Ok(parse_keystone_v2_response(&body, req.region_name)?)
}

/// Picks the token and object-store endpoint out of a Keystone v2 token response.
///
/// Catalog entries named `swift` or typed `object-store` are considered. With a
/// region configured, the last endpoint in that region wins; without one, the first
/// endpoint is taken.
pub(crate) fn parse_keystone_v2_response(
    body: &[u8],
    region_name: Option<&str>,
) -> Result<Session, AuthErr> {
    let resp: KeystoneV2Response =
        serde_json::from_slice(body).map_err(AuthErr::InvalidAuthResponse)?;
    let token = resp.access.token.id;
    if token.is_empty() {
        return Err(AuthErr::MissingToken);
    }

    let mut endpoints = resp
        .access
        .service_catalog
        .into_iter()
        .filter(|e| e.name == "swift" || e.kind == "object-store")
        .flat_map(|e| e.endpoints);
    let public_url = match region_name {
        Some(region) => endpoints.filter(|e| e.region == region).last(),
        None => endpoints.next(),
    }
    .map(|e| e.public_url)
    .filter(|u| !u.is_empty());

    match public_url {
        Some(url) => Session::try_new(token, url).ok_or(AuthErr::MissingToken),
        None => Err(AuthErr::NoEndpointForRegion {
            region: region_name.unwrap_or_default().to_string(),
        }),
    }
}
