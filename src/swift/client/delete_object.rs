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
use crate::swift::builders::{DeleteObject, DeleteObjectBldr};

impl SwiftClient {
    /// Creates a [`DeleteObject`] request builder.
    ///
    /// Deletes an object.
    ///
    /// To execute the request, call [`DeleteObject::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`DeleteObjectResponse`](crate::swift::response::DeleteObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::DeleteObjectResponse;
    /// use openstack::swift::response_traits::HasObject;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: DeleteObjectResponse = client.delete_object("photos", "cat.jpg")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("deleted {}", resp.object());
    /// }
    /// ```
    pub fn delete_object<S1: Into<String>, S2: Into<String>>(
        &self,
        container: S1,
        object: S2,
    ) -> DeleteObjectBldr {
        DeleteObject::builder().client(self.clone()).container(container).object(object)
    }
}
