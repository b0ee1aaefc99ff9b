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
use crate::swift::builders::{CopyObject, CopyObjectBldr};

impl SwiftClient {
    /// Creates a [`CopyObject`] request builder.
    ///
    /// Copies an object on the server side with `COPY` and a `Destination` header.
    ///
    /// To execute the request, call [`CopyObject::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`CopyObjectResponse`](crate::swift::response::CopyObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::CopyObjectResponse;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: CopyObjectResponse = client
    ///         .copy_object("photos", "cat.jpg", "backup", "cat.jpg")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("copied to {:?}", resp.destination());
    /// }
    /// ```
    pub fn copy_object<S1: Into<String>, S2: Into<String>, S3: Into<String>, S4: Into<String>>(
        &self,
        src_container: S1,
        src_object: S2,
        dst_container: S3,
        dst_object: S4,
    ) -> CopyObjectBldr {
        CopyObject::builder()
            .client(self.clone())
            .container(src_container)
            .object(src_object)
            .dst_container(dst_container)
            .dst_object(dst_object)
    }
}
