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
use crate::swift::builders::{GetObject, GetObjectBldr};

impl SwiftClient {
    /// Creates a [`GetObject`] request builder.
    ///
    /// Downloads an object; the body is streamed.
    ///
    /// To execute the request, call [`GetObject::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`GetObjectResponse`](crate::swift::response::GetObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::GetObjectResponse;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: GetObjectResponse = client.get_object("photos", "cat.jpg")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     let data = resp.to_bytes().await.unwrap();
    ///     println!("{} bytes", data.len());
    /// }
    /// ```
    pub fn get_object<S1: Into<String>, S2: Into<String>>(
        &self,
        container: S1,
        object: S2,
    ) -> GetObjectBldr {
        GetObject::builder().client(self.clone()).container(container).object(object)
    }
}
