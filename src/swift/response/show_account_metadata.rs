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

use crate::swift::error::ValidationErr;
use crate::swift::header_constants::*;
use crate::swift::metadata::MetaScope;
use crate::swift::response_traits::{HasMetadata, HasSwiftFields, HasTransId, parse_u64_header};
use crate::swift::types::SwiftRequest;
use crate::{impl_from_swift_response, impl_has_swift_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of the [show_account_metadata()](crate::swift::client::SwiftClient::show_account_metadata) API
#[derive(Debug)]
pub struct ShowAccountMetadataResponse {
    request: SwiftRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_swift_response!(ShowAccountMetadataResponse);
impl_has_swift_fields!(ShowAccountMetadataResponse);

impl HasTransId for ShowAccountMetadataResponse {}

impl HasMetadata for ShowAccountMetadataResponse {
    const SCOPE: MetaScope = MetaScope::Account;
}

impl ShowAccountMetadataResponse {
    /// Number of containers in the account (`X-Account-Container-Count`).
    pub fn container_count(&self) -> Result<u64, ValidationErr> {
        parse_u64_header(self.headers(), X_ACCOUNT_CONTAINER_COUNT)
    }

    /// Number of objects in the account (`X-Account-Object-Count`).
    pub fn object_count(&self) -> Result<u64, ValidationErr> {
        parse_u64_header(self.headers(), X_ACCOUNT_OBJECT_COUNT)
    }

    /// Bytes stored in the account (`X-Account-Bytes-Used`).
    pub fn bytes_used(&self) -> Result<u64, ValidationErr> {
        parse_u64_header(self.headers(), X_ACCOUNT_BYTES_USED)
    }
}
