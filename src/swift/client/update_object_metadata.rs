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

use super::SwiftClient;
use crate::swift::builders::{UpdateObjectMetadata, UpdateObjectMetadataBldr};
use crate::swift::metadata::Metadata;

impl SwiftClient {
    /// Creates an [`UpdateObjectMetadata`] request builder.
    ///
    /// Replaces object metadata with `POST`.
    ///
    /// To execute the request, call [`UpdateObjectMetadata::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`UpdateObjectMetadataResponse`](crate::swift::response::UpdateObjectMetadataResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::metadata::{MetaScope, Metadata};
    /// use openstack::swift::response::UpdateObjectMetadataResponse;
    /// use openstack::swift::response_traits::HasObject;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let mut metadata = Metadata::new();
    ///     metadata.set_meta(MetaScope::Object, "Author", "saka01");
    ///     let resp: UpdateObjectMetadataResponse = client
    ///         .update_object_metadata("photos", "cat.jpg", metadata)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("updated {}", resp.object());
    /// }
    /// ```
    pub fn update_object_metadata<S1: Into<String>, S2: Into<String>>(
        &self,
        container: S1,
        object: S2,
        metadata: Metadata,
    ) -> UpdateObjectMetadataBldr {
        UpdateObjectMetadata::builder()
            .client(self.clone())
            .container(container)
            .object(object)
            .metadata(metadata)
    }
}
