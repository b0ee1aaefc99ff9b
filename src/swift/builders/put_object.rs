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
use crate::swift::object_content::ObjectContent;
use crate::swift::response::PutObjectResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`put_object()`](crate::swift::client::SwiftClient::put_object) API.
///
/// Uploads the whole object in one request. When the content is held in memory its
/// MD5 is sent as `ETag` so that the server verifies the upload.
#[derive(Debug, TypedBuilder)]
pub struct PutObject {
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
    content: ObjectContent,
    #[builder(default, setter(into))]
    metadata: Option<Metadata>,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
}

pub type PutObjectBldr =
    PutObjectBuilder<((SwiftClient,), (), (), (String,), (String,), (ObjectContent,), (), ())>;

impl SwiftApi for PutObject {
    type SwiftResponse = PutObjectResponse;
}

impl ToSwiftRequest for PutObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if let Some(metadata) = &self.metadata {
            headers.add_multimap(metadata.to_headers());
        }
        if let Some(content_type) = self.content_type {
            headers.remove_ignore_case(CONTENT_TYPE);
            headers.add(CONTENT_TYPE, content_type);
        }
        let caller_etag = headers.contains_key_ignore_case(ETAG);
        if let Some(md5) = self.content.md5_hex().filter(|_| !caller_etag) {
            headers.add(ETAG, md5);
        }

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(self.content)
            .build())
    }
}
