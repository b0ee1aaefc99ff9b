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

use crate::impl_has_swift_fields;
use crate::swift::error::{Error, NetworkError};
use crate::swift::response_traits::{HasContainer, HasTransId, parse_listing};
use crate::swift::types::{FromSwiftResponse, ObjectInfo, SwiftRequest};
use bytes::Bytes;
use http::HeaderMap;
use std::mem;

/// Response of the [list_objects()](crate::swift::client::SwiftClient::list_objects) API
#[derive(Debug)]
pub struct ListObjectsResponse {
    request: SwiftRequest,
    headers: HeaderMap,
    body: Bytes,
    objects: Vec<ObjectInfo>,
}

impl_has_swift_fields!(ListObjectsResponse);

impl HasContainer for ListObjectsResponse {}
impl HasTransId for ListObjectsResponse {}

impl ListObjectsResponse {
    /// Objects (and pseudo-directories, when listing with a delimiter) of this page.
    pub fn objects(&self) -> &[ObjectInfo] {
        &self.objects
    }

    pub fn into_objects(self) -> Vec<ObjectInfo> {
        self.objects
    }
}

#[async_trait::async_trait]
impl FromSwiftResponse for ListObjectsResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::from)?;
        let objects = parse_listing::<ObjectInfo>(&body)?;

        Ok(Self {
            request,
            headers,
            body,
            objects,
        })
    }
}
