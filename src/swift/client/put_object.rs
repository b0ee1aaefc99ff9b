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
use crate::swift::builders::{PutObject, PutObjectBldr};
use crate::swift::object_content::ObjectContent;

impl SwiftClient {
    /// Creates a [`PutObject`] request builder.
    ///
    /// Uploads an object in a single request.
    ///
    /// To execute the request, call [`PutObject::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`PutObjectResponse`](crate::swift::response::PutObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::PutObjectResponse;
    /// use openstack::swift::response_traits::HasEtag;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: PutObjectResponse = client.put_object("photos", "hello.txt", "hello world")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("etag {:?}", resp.etag());
    /// }
    /// ```
    pub fn put_object<S1: Into<String>, S2: Into<String>, C: Into<ObjectContent>>(
        &self,
        container: S1,
        object: S2,
        content: C,
    ) -> PutObjectBldr {
        PutObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
            .content(content)
    }
}
