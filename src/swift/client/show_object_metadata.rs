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
use crate::swift::builders::{ShowObjectMetadata, ShowObjectMetadataBldr};

impl SwiftClient {
    /// Creates a [`ShowObjectMetadata`] request builder.
    ///
    /// Reads object size, `ETag` and metadata with `HEAD`.
    ///
    /// To execute the request, call [`ShowObjectMetadata::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`ShowObjectMetadataResponse`](crate::swift::response::ShowObjectMetadataResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::ShowObjectMetadataResponse;
    /// use openstack::swift::response_traits::HasEtag;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: ShowObjectMetadataResponse = client.show_object_metadata("photos", "cat.jpg")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{} bytes, etag {:?}", resp.content_length().unwrap(), resp.etag());
    /// }
    /// ```
    pub fn show_object_metadata<S1: Into<String>, S2: Into<String>>(
        &self,
        container: S1,
        object: S2,
    ) -> ShowObjectMetadataBldr {
        ShowObjectMetadata::builder().client(self.clone()).container(container).object(object)
    }
}
