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
use crate::swift::builders::{ListObjects, ListObjectsBldr};

impl SwiftClient {
    /// Creates a [`ListObjects`] request builder.
    ///
    /// Lists the objects of a container; paging and filtering are configured with [`ListParams`](crate::swift::types::ListParams).
    ///
    /// To execute the request, call [`ListObjects::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`ListObjectsResponse`](crate::swift::response::ListObjectsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::ListObjectsResponse;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: ListObjectsResponse = client.list_objects("photos")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     for o in resp.objects() {
    ///         println!("{} ({} bytes)", o.name, o.bytes);
    ///     }
    /// }
    /// ```
    pub fn list_objects<S: Into<String>>(&self, container: S) -> ListObjectsBldr {
        ListObjects::builder().client(self.clone()).container(container)
    }
}
