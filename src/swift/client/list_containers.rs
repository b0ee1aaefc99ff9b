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
use crate::swift::builders::{ListContainers, ListContainersBldr};

impl SwiftClient {
    /// Creates a [`ListContainers`] request builder.
    ///
    /// Lists the containers of the account; paging is configured with [`ListParams`](crate::swift::types::ListParams).
    ///
    /// To execute the request, call [`ListContainers::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`ListContainersResponse`](crate::swift::response::ListContainersResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::ListContainersResponse;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: ListContainersResponse = client.list_containers()
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     for c in resp.containers() {
    ///         println!("{}: {} objects", c.name, c.count);
    ///     }
    /// }
    /// ```
    pub fn list_containers(&self) -> ListContainersBldr {
        ListContainers::builder().client(self.clone())
    }
}
