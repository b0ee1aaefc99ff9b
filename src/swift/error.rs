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

//! Error definitions for Swift operations

use crate::swift::swift_error_response::SwiftErrorResponse;
use std::fmt;
use thiserror::Error;

/// Client configuration problems detected before any request is sent.
#[derive(Error, Debug)]
pub enum ConfigErr {
    #[error("authentication requires an auth URL, an account name and a secret")]
    MissingCredentials,

    #[error("unsupported auth version in auth URL path: '{0}'")]
    UnsupportedAuthVersion(String),

    #[error("invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unable to read CA certificate file")]
    CertFile(#[source] std::io::Error),

    #[error("unable to build HTTP transport")]
    HttpClient(#[source] reqwest::Error),
}

/// Failures of the authentication handshake itself.
#[derive(Error, Debug)]
pub enum AuthErr {
    #[error("auth response is missing the '{0}' header")]
    MissingResponseHeader(&'static str),

    #[error("unable to decode auth response")]
    InvalidAuthResponse(#[source] serde_json::Error),

    #[error("auth response carries no token")]
    MissingToken,

    #[error("service catalog has no object-store endpoint for region '{region}'")]
    NoEndpointForRegion { region: String },

    #[error("authentication previously failed: {0}")]
    PreviouslyFailed(AuthFailure),

    #[error("auth response header is not valid ASCII")]
    InvalidHeaderValue(#[source] reqwest::header::ToStrError),
}

/// What is remembered of a failed authentication attempt.
#[derive(Clone, Debug)]
pub struct AuthFailure {
    reason: String,
    server_error: Option<Box<SwiftErrorResponse>>,
}

impl AuthFailure {
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The auth endpoint's rejection, if the attempt got that far.
    pub fn server_error(&self) -> Option<&SwiftErrorResponse> {
        self.server_error.as_deref()
    }
}

impl From<&Error> for AuthFailure {
    fn from(err: &Error) -> Self {
        AuthFailure {
            reason: err.to_string(),
            server_error: err.server_error().cloned().map(Box::new),
        }
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP transport error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Client-side argument and response-decoding errors.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid container name '{name}': {reason}")]
    InvalidContainerName { name: String, reason: String },

    #[error("invalid object name '{name}': {reason}")]
    InvalidObjectName { name: String, reason: String },

    #[error("content length is unknown")]
    ContentLengthUnknown,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("JSON error")]
    JsonError(#[from] serde_json::Error),

    #[error("header value is not valid ASCII")]
    StrError(#[from] reqwest::header::ToStrError),

    #[error("header '{header}' is not an integer")]
    IntError {
        header: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigErr),

    #[error(transparent)]
    Auth(#[from] AuthErr),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("{0}")]
    Server(Box<SwiftErrorResponse>),

    #[error(transparent)]
    Validation(#[from] ValidationErr),
}

impl From<SwiftErrorResponse> for Error {
    fn from(err: SwiftErrorResponse) -> Self {
        Error::Server(Box::new(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::ReqwestError(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Network(NetworkError::IoError(err))
    }
}

impl Error {
    /// Returns the HTTP status code when the server rejected the request, including
    /// the rejection that made authentication fail earlier.
    pub fn status_code(&self) -> Option<u16> {
        self.server_error().map(SwiftErrorResponse::http_status_code)
    }

    /// Returns the structured server error, if any.
    pub fn server_error(&self) -> Option<&SwiftErrorResponse> {
        match self {
            Error::Server(e) => Some(e),
            Error::Auth(AuthErr::PreviouslyFailed(f)) => f.server_error(),
            _ => None,
        }
    }
}
