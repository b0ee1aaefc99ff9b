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

use crate::swift::client::SwiftClient;
use crate::swift::error::ValidationErr;
use crate::swift::metadata::Metadata;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::UpdateObjectMetadataResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`update_object_metadata()`](crate::swift::client::SwiftClient::update_object_metadata) API.
///
/// Swift replaces the whole set of object metadata on `POST`; keys not included are dropped.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateObjectMetadata {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(!default)]
    metadata: Metadata,
}

pub type UpdateObjectMetadataBldr =
    UpdateObjectMetadataBuilder<((SwiftClient,), (), (), (String,), (String,), (Metadata,))>;

impl SwiftApi for UpdateObjectMetadata {
    type SwiftResponse = UpdateObjectMetadataResponse;
}

impl ToSwiftRequest for UpdateObjectMetadata {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add_multimap(self.metadata.to_headers());

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
