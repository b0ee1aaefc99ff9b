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

use crate::swift::error::{Error, NetworkError};
use crate::swift::header_constants::*;
use crate::swift::object_content::ObjectContent;
use crate::swift::types::{FromSwiftResponse, SwiftRequest};
use bytes::Bytes;
use futures_util::TryStreamExt;
use http::HeaderMap;
use std::mem;
use std::path::Path;

/// Response of the [get_object()](crate::swift::client::SwiftClient::get_object) API
///
/// The body is not buffered: it is streamed from the connection when the content is
/// consumed with [`content()`](Self::content), [`to_bytes()`](Self::to_bytes) or
/// [`to_file()`](Self::to_file).
#[derive(Debug)]
pub struct GetObjectResponse {
    request: SwiftRequest,
    headers: HeaderMap,
    content: ObjectContent,
    content_length: Option<u64>,
}

impl GetObjectResponse {
    pub fn request(&self) -> &SwiftRequest {
        &self.request
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn container(&self) -> &str {
        self.request.container.as_deref().unwrap_or_default()
    }

    pub fn object(&self) -> &str {
        self.request.object.as_deref().unwrap_or_default()
    }

    pub fn etag(&self) -> Option<&str> {
        self.headers
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim_matches('"'))
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Size announced by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Object metadata value for `name` (`X-Object-Meta-<name>`).
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.headers
            .get(crate::swift::metadata::MetaScope::Object.header_name(name))
            .and_then(|v| v.to_str().ok())
    }

    /// Takes the streamed content.
    pub fn content(self) -> ObjectContent {
        self.content
    }

    /// Reads the whole object into memory.
    pub async fn to_bytes(self) -> Result<Bytes, Error> {
        Ok(self
            .content
            .to_bytes()
            .await
            .map_err(NetworkError::from)?)
    }

    /// Streams the object to `file_path`, returning the number of bytes written.
    pub async fn to_file(self, file_path: &Path) -> Result<u64, Error> {
        Ok(self
            .content
            .to_file(file_path)
            .await
            .map_err(NetworkError::from)?)
    }
}

#[async_trait::async_trait]
impl FromSwiftResponse for GetObjectResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let content_length: Option<u64> = resp.content_length();
        let body = resp.bytes_stream().map_err(std::io::Error::other);

        Ok(Self {
            request,
            headers,
            content: ObjectContent::new_from_stream(body, content_length),
            content_length,
        })
    }
}
