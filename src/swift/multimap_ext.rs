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

use crate::swift::utils::url_encode;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Returns true if a key equal to `key` ignoring ASCII case is present
    fn contains_key_ignore_case(&self, key: &str) -> bool;

    /// Removes every key equal to `key` ignoring ASCII case, returning the removed values
    fn remove_ignore_case(&mut self, key: &str) -> Vec<String>;

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn contains_key_ignore_case(&self, key: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    fn remove_ignore_case(&mut self, key: &str) -> Vec<String> {
        let matching: Vec<String> = self
            .keys()
            .filter(|k| k.eq_ignore_ascii_case(key))
            .cloned()
            .collect();
        let mut removed = Vec::new();
        for k in matching {
            if let Some(values) = self.remove(&k) {
                removed.extend(values);
            }
        }
        removed
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }
}
