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
use crate::swift::header_constants::*;
use crate::swift::metadata::Metadata;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::CopyObjectResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`copy_object()`](crate::swift::client::SwiftClient::copy_object) API.
///
/// Issues a server-side `COPY` of the source object to `Destination`. Metadata given
/// here is merged into the metadata copied from the source.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CopyObject {
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
    #[builder(!default, setter(into))]
    dst_container: String,
    #[builder(!default, setter(into))]
    dst_object: String,
    #[builder(default, setter(into))]
    metadata: Option<Metadata>,
}

pub type CopyObjectBldr =
    CopyObjectBuilder<((SwiftClient,), (), (), (String,), (String,), (String,), (String,), ())>;

impl SwiftApi for CopyObject {
    type SwiftResponse = CopyObjectResponse;
}

impl CopyObject {
    /// `Destination` header value, `<container>/<object>` without the account prefix.
    fn destination(&self) -> String {
        format!("{}/{}", self.dst_container, self.dst_object)
    }
}

impl ToSwiftRequest for CopyObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;
        check_container_name(&self.dst_container)?;
        check_object_name(&self.dst_object)?;

        let method = Method::from_bytes(b"COPY")
            .map_err(|e| ValidationErr::InvalidHeader(e.to_string()))?;

        let destination = self.destination();
        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.remove_ignore_case(DESTINATION);
        headers.add(DESTINATION, destination);
        if let Some(metadata) = &self.metadata {
            headers.add_multimap(metadata.to_headers());
        }

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(method)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
