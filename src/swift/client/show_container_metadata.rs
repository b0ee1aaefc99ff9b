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
use crate::swift::builders::{ShowContainerMetadata, ShowContainerMetadataBldr};

impl SwiftClient {
    /// Creates a [`ShowContainerMetadata`] request builder.
    ///
    /// Reads container statistics and metadata with `HEAD`.
    ///
    /// To execute the request, call [`ShowContainerMetadata::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`ShowContainerMetadataResponse`](crate::swift::response::ShowContainerMetadataResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::ShowContainerMetadataResponse;
    /// use openstack::swift::response_traits::HasMetadata;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: ShowContainerMetadataResponse = client.show_container_metadata("photos")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("author: {:?}", resp.meta("Author"));
    /// }
    /// ```
    pub fn show_container_metadata<S: Into<String>>(
        &self,
        container: S,
    ) -> ShowContainerMetadataBldr {
        ShowContainerMetadata::builder().client(self.clone()).container(container)
    }
}
