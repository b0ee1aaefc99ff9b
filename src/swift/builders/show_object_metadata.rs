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

use crate::swift::builders::{ObjectCommon, ObjectCommonBldr};
use crate::swift::error::ValidationErr;
use crate::swift::response::ShowObjectMetadataResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name};
use http::Method;

/// Argument builder for the [`show_object_metadata()`](crate::swift::client::SwiftClient::show_object_metadata) API.
pub type ShowObjectMetadata = ObjectCommon<ShowObjectMetadataPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct ShowObjectMetadataPhantomData;

pub type ShowObjectMetadataBldr = ObjectCommonBldr<ShowObjectMetadataPhantomData>;

impl SwiftApi for ShowObjectMetadata {
    type SwiftResponse = ShowObjectMetadataResponse;
}

impl ToSwiftRequest for ShowObjectMetadata {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::HEAD)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
