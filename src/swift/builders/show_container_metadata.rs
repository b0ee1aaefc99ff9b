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

use crate::swift::builders::{ContainerCommon, ContainerCommonBldr};
use crate::swift::error::ValidationErr;
use crate::swift::response::ShowContainerMetadataResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_container_name;
use http::Method;

/// Argument builder for the [`show_container_metadata()`](crate::swift::client::SwiftClient::show_container_metadata) API.
pub type ShowContainerMetadata = ContainerCommon<ShowContainerMetadataPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct ShowContainerMetadataPhantomData;

pub type ShowContainerMetadataBldr = ContainerCommonBldr<ShowContainerMetadataPhantomData>;

impl SwiftApi for ShowContainerMetadata {
    type SwiftResponse = ShowContainerMetadataResponse;
}

impl ToSwiftRequest for ShowContainerMetadata {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::HEAD)
            .container(self.container)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
