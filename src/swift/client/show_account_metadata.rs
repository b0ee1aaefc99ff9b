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
use crate::swift::builders::{ShowAccountMetadata, ShowAccountMetadataBldr};

impl SwiftClient {
    /// Creates a [`ShowAccountMetadata`] request builder.
    ///
    /// Reads account statistics and metadata with `HEAD` on the storage URL.
    ///
    /// To execute the request, call [`ShowAccountMetadata::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`ShowAccountMetadataResponse`](crate::swift::response::ShowAccountMetadataResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::response::ShowAccountMetadataResponse;
    /// use openstack::swift::response_traits::HasTransId;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let resp: ShowAccountMetadataResponse = client.show_account_metadata()
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{} containers, {} bytes", resp.container_count().unwrap(), resp.bytes_used().unwrap());
    /// }
    /// ```
    pub fn show_account_metadata(&self) -> ShowAccountMetadataBldr {
        ShowAccountMetadata::builder().client(self.clone())
    }
}
