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
use crate::swift::builders::{UpdateAccountMetadata, UpdateAccountMetadataBldr};
use crate::swift::metadata::Metadata;

impl SwiftClient {
    /// Creates an [`UpdateAccountMetadata`] request builder.
    ///
    /// Sets and removes account metadata with `POST` on the storage URL.
    ///
    /// To execute the request, call [`UpdateAccountMetadata::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`UpdateAccountMetadataResponse`](crate::swift::response::UpdateAccountMetadataResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::swift::SwiftClient;
    /// use openstack::swift::metadata::{MetaScope, Metadata};
    /// use openstack::swift::response::UpdateAccountMetadataResponse;
    /// use openstack::swift::response_traits::HasTransId;
    /// use openstack::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client =
    ///         SwiftClient::new("https://swift.example.com/auth/v1.0", "test:tester", "testing")
    ///             .unwrap();
    ///     let mut metadata = Metadata::new();
    ///     metadata.set_meta(MetaScope::Account, "Author", "saka01");
    ///     let resp: UpdateAccountMetadataResponse = client.update_account_metadata(metadata)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("updated, trans id {:?}", resp.trans_id());
    /// }
    /// ```
    pub fn update_account_metadata(&self, metadata: Metadata) -> UpdateAccountMetadataBldr {
        UpdateAccountMetadata::builder().client(self.clone()).metadata(metadata)
    }
}
