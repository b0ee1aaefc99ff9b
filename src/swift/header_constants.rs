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

pub const X_AUTH_TOKEN: &str = "X-Auth-Token";
pub const X_AUTH_USER: &str = "X-Auth-User";
pub const X_AUTH_KEY: &str = "X-Auth-Key";
pub const X_STORAGE_URL: &str = "X-Storage-Url";
pub const USER_AGENT: &str = "User-Agent";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const DESTINATION: &str = "Destination";
pub const ETAG: &str = "ETag";
pub const LAST_MODIFIED: &str = "Last-Modified";

pub const X_TRANS_ID: &str = "x-trans-id";
pub const X_TIMESTAMP: &str = "x-timestamp";

pub const X_ACCOUNT_CONTAINER_COUNT: &str = "x-account-container-count";
pub const X_ACCOUNT_OBJECT_COUNT: &str = "x-account-object-count";
pub const X_ACCOUNT_BYTES_USED: &str = "x-account-bytes-used";

pub const X_CONTAINER_OBJECT_COUNT: &str = "x-container-object-count";
pub const X_CONTAINER_BYTES_USED: &str = "x-container-bytes-used";

/// Leading segment substituted for `X` when a metadata key is turned into its removal form.
pub const X_REMOVE_PREFIX: &str = "X-Remove";
/// Value sent with every removal header; Swift ignores it.
pub const REMOVE_SENTINEL: &str = "x";

pub const FORMAT: &str = "format";
pub const FORMAT_JSON: &str = "json";
pub const APPLICATION_JSON: &str = "application/json";
