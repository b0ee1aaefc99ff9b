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

//! Classification of non-2xx Swift responses

use crate::swift::error::{Error, NetworkError};
use crate::swift::header_constants::X_TRANS_ID;
use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use std::fmt;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorModel>,
}

#[derive(Deserialize)]
struct ErrorModel {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

/// Error response returned by a Swift (or Keystone) server.
///
/// When the body is a JSON envelope `{"error": {"code": ..., "message": ...}}` the
/// code and message are taken from it; otherwise the code is the HTTP status and the
/// raw body is kept for diagnostics.
#[derive(Clone, Debug)]
pub struct SwiftErrorResponse {
    http_status_code: u16,
    code: u16,
    message: Option<String>,
    body: String,
    headers: HeaderMap,
}

impl SwiftErrorResponse {
    /// Error without a structured envelope.
    pub fn generic(http_status_code: u16, headers: HeaderMap, body: String) -> Self {
        Self {
            http_status_code,
            code: http_status_code,
            message: None,
            body,
            headers,
        }
    }

    /// Builds the error from a failed response, parsing the JSON envelope if present.
    pub fn from_failed_response(http_status_code: u16, headers: HeaderMap, body: String) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(ErrorEnvelope { error: Some(e) }) => Self {
                http_status_code,
                code: if e.code == 0 { http_status_code } else { e.code },
                message: Some(e.message).filter(|m| !m.is_empty()),
                body,
                headers,
            },
            _ => Self::generic(http_status_code, headers, body),
        }
    }

    pub fn http_status_code(&self) -> u16 {
        self.http_status_code
    }
    /// Code from the JSON envelope, or the HTTP status when absent.
    pub fn code(&self) -> u16 {
        self.code
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn body(&self) -> &str {
        &self.body
    }
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// Take ownership of the headers as returned by the server.
    pub fn take_headers(&mut self) -> HeaderMap {
        std::mem::take(&mut self.headers)
    }
    /// Swift transaction id, useful when reporting problems to operators.
    pub fn trans_id(&self) -> Option<&str> {
        self.headers.get(X_TRANS_ID).and_then(|v| v.to_str().ok())
    }
    pub fn is_not_found(&self) -> bool {
        self.http_status_code == StatusCode::NOT_FOUND.as_u16()
    }
    pub fn is_unauthorized(&self) -> bool {
        self.http_status_code == StatusCode::UNAUTHORIZED.as_u16()
    }
}

impl fmt::Display for SwiftErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(m) => write!(f, "Swift API: Error {}: {m}", self.code),
            None => write!(
                f,
                "Swift API: got HTTP response code {} with body: {}",
                self.code, self.body
            ),
        }
    }
}

impl std::error::Error for SwiftErrorResponse {}

/// Returns `None` for 2xx statuses, the structured error otherwise.
pub fn classify(status: u16, headers: HeaderMap, body: String) -> Option<SwiftErrorResponse> {
    if (200..300).contains(&status) {
        return None;
    }
    Some(SwiftErrorResponse::from_failed_response(status, headers, body))
}

/// Passes 2xx responses through; reads the body of any other response and
/// turns it into [`Error::Server`].
pub(crate) async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let mut resp = resp;
    let status = resp.status().as_u16();
    let headers: HeaderMap = std::mem::take(resp.headers_mut());
    let body = resp.text().await.map_err(NetworkError::from)?;
    let e = SwiftErrorResponse::from_failed_response(status, headers, body);
    log::warn!("swift request failed: {e}");
    Err(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_is_none() {
        assert!(classify(200, HeaderMap::new(), String::new()).is_none());
        assert!(classify(204, HeaderMap::new(), String::new()).is_none());
    }

    #[test]
    fn test_classify_json_envelope() {
        let body = r#"{"error":{"code":401,"message":"The request you have made requires authentication.","title":"Unauthorized"}}"#;
        let e = classify(401, HeaderMap::new(), body.to_string()).unwrap();
        assert_eq!(e.code(), 401);
        assert_eq!(e.message(), Some("The request you have made requires authentication."));
        assert_eq!(e.body(), body);
        assert_eq!(
            e.to_string(),
            "Swift API: Error 401: The request you have made requires authentication."
        );
    }

    #[test]
    fn test_classify_envelope_without_code_uses_status() {
        let e = classify(400, HeaderMap::new(), r#"{"error":{"message":"bad"}}"#.into()).unwrap();
        assert_eq!(e.code(), 400);
        assert_eq!(e.message(), Some("bad"));
    }

    #[test]
    fn test_classify_html_body_is_generic() {
        let body = "<html><h1>Unauthorized</h1><p>This server could not verify that you are authorized to access the document you requested.</p></html>";
        let e = classify(401, HeaderMap::new(), body.to_string()).unwrap();
        assert_eq!(e.code(), 401);
        assert_eq!(e.http_status_code(), 401);
        assert!(e.message().is_none());
        assert!(e.is_unauthorized());
        assert_eq!(
            e.to_string(),
            format!("Swift API: got HTTP response code 401 with body: {body}")
        );
    }

    #[test]
    fn test_classify_json_without_error_object_is_generic() {
        let e = classify(500, HeaderMap::new(), r#"{"status":"down"}"#.into()).unwrap();
        assert_eq!(e.code(), 500);
        assert!(e.message().is_none());
        assert_eq!(e.body(), r#"{"status":"down"}"#);
    }

    #[test]
    fn test_trans_id() {
        let mut headers = HeaderMap::new();
        headers.insert(X_TRANS_ID, "tx123".parse().unwrap());
        let e = classify(404, headers, String::new()).unwrap();
        assert_eq!(e.trans_id(), Some("tx123"));
        assert!(e.is_not_found());
    }
}
