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
use crate::swift::multimap_ext::Multimap;
use crate::swift::response::ListObjectsResponse;
use crate::swift::types::{ListParams, SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_container_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`list_objects()`](crate::swift::client::SwiftClient::list_objects) API.
///
/// Paging and filtering are configured with [`ListParams`]; with a `delimiter` the
/// listing also reports pseudo-directories.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListObjects {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(default)]
    params: ListParams,
}

pub type ListObjectsBldr = ListObjectsBuilder<((SwiftClient,), (), (), (String,), ())>;

impl SwiftApi for ListObjects {
    type SwiftResponse = ListObjectsResponse;
}

impl ToSwiftRequest for ListObjects {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        self.params.apply_to(&mut query_params);

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .container(self.container)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
