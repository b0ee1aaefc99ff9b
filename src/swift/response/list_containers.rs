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
use crate::swift::response_traits::{HasTransId, parse_listing};
use crate::swift::types::{ContainerInfo, FromSwiftResponse, SwiftRequest};
use bytes::Bytes;
use http::HeaderMap;
use std::mem;

/// Response of the [list_containers()](crate::swift::client::SwiftClient::list_containers) API
#[derive(Debug)]
pub struct ListContainersResponse {
    request: SwiftRequest,
    headers: HeaderMap,
    body: Bytes,
    containers: Vec<ContainerInfo>,
}

impl_has_swift_fields!(ListContainersResponse);

impl HasTransId for ListContainersResponse {}

impl ListContainersResponse {
    /// Containers of this page, in the order returned by the server.
    pub fn containers(&self) -> &[ContainerInfo] {
        &self.containers
    }

    pub fn into_containers(self) -> Vec<ContainerInfo> {
        self.containers
    }
}

#[async_trait::async_trait]
impl FromSwiftResponse for ListContainersResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::from)?;
        let containers = parse_listing::<ContainerInfo>(&body)?;

        Ok(Self {
            request,
            headers,
            body,
            containers,
        })
    }
}
