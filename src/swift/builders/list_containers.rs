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
use crate::swift::response::ListContainersResponse;
use crate::swift::types::{ListParams, SwiftApi, SwiftRequest, ToSwiftRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`list_containers()`](crate::swift::client::SwiftClient::list_containers) API.
///
/// Paging and filtering are configured with [`ListParams`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListContainers {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default)]
    params: ListParams,
}

pub type ListContainersBldr = ListContainersBuilder<((SwiftClient,), (), (), ())>;

impl SwiftApi for ListContainers {
    type SwiftResponse = ListContainersResponse;
}

impl ToSwiftRequest for ListContainers {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        self.params.apply_to(&mut query_params);

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
