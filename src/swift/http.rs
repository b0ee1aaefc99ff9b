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

//! URL assembly for Swift requests

use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::utils::url_encode_path;

/// Joins a storage URL and a relative path with exactly one `/` between them.
///
/// An empty path yields the base without a trailing slash, which is how the
/// account resource is addressed.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    let mut url = String::with_capacity(base.len() + 1 + path.len());
    url.push_str(base);
    url.push('/');
    url.push_str(path);
    url
}

/// Builds the encoded relative path of an account, container or object resource.
pub fn resource_path(container: Option<&str>, object: Option<&str>) -> String {
    match (container, object) {
        (Some(c), Some(o)) => format!("{}/{}", url_encode_path(c), url_encode_path(o)),
        (Some(c), None) => url_encode_path(c),
        _ => String::new(),
    }
}

/// Full request URL: storage URL, relative path and query string.
pub fn build_url(storage_url: &str, path: &str, query_params: &Multimap) -> String {
    let mut url = join_url(storage_url, path);
    let query = query_params.to_query_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}
