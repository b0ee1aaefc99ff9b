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
use crate::swift::builders::{UpdateContainerMetadata, UpdateContainerMetadataBldr};
use crate::swift::metadata::Metadata;

impl SwiftClient {
    /// Creates an [`UpdateContainerMetadata`] request builder.
    ///
    /// Sets and removes container metadata with `POST`.
    ///
    /// To execute the request, call [`UpdateContainerMetadata::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`UpdateContainerMetadataResponse`](crate::swift::response::UpdateContainerMetadataResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::metadata::{MetaScope, Metadata};
    /// use openstack::swift::response::UpdateContainerMetadataResponse;
    /// use openstack::swift::response_traits::HasContainer;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let mut metadata = Metadata::new();
    ///     metadata.set_meta(MetaScope::Container, "Author", "saka01");
    ///     let resp: UpdateContainerMetadataResponse = client
    ///         .update_container_metadata("photos", metadata)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("updated {}", resp.container());
    /// }
    /// ```
    pub fn update_container_metadata<S: Into<String>>(
        &self,
        container: S,
        metadata: Metadata,
    ) -> UpdateContainerMetadataBldr {
        UpdateContainerMetadata::builder()
            .client(self.clone())
            .container(container)
            .metadata(metadata)
    }
}
