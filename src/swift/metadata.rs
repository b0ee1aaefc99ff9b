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

//! Metadata headers for accounts, containers and objects
//!
//! Swift stores user metadata as `X-<Scope>-Meta-<Name>` request headers. Removing a
//! key is expressed with a dedicated header, `X-Remove-<Scope>-Meta-<Name>`, whose
//! value is ignored by the server. [`Metadata`] collects both kinds of entries and
//! [`Metadata::to_headers`] encodes them for the request pipeline.

use crate::swift::header_constants::{REMOVE_SENTINEL, X_REMOVE_PREFIX};
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::utils::title_case;
use std::fmt;

/// Value of a metadata entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaValue {
    /// Sets the header to the given value.
    Set(String),
    /// Removes the key on the server.
    Remove,
}

/// Resource kind a metadata header applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaScope {
    Account,
    Container,
    Object,
}

impl MetaScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaScope::Account => "Account",
            MetaScope::Container => "Container",
            MetaScope::Object => "Object",
        }
    }

    /// Header prefix of user metadata in this scope, e.g. `X-Container-Meta-`.
    pub fn prefix(&self) -> String {
        format!("X-{}-Meta-", self.as_str())
    }

    /// Full header name for the metadata key `name`.
    pub fn header_name(&self, name: &str) -> String {
        format!("{}{name}", self.prefix())
    }
}

impl fmt::Display for MetaScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, case-insensitive set of metadata headers.
///
/// Setting or removing a key that is already present replaces the earlier entry in
/// place, so applying the same change twice produces identical headers.
///
/// # Examples
///
/// ```
/// use openstack::swift::metadata::{Metadata, MetaScope};
///
/// let mut metadata = Metadata::new();
/// metadata.set_meta(MetaScope::Account, "Book", "MobyDick");
/// metadata.remove_meta(MetaScope::Account, "Color");
///
/// let headers = metadata.to_headers();
/// assert_eq!(headers.get("X-Account-Meta-Book").unwrap(), "MobyDick");
/// assert_eq!(headers.get("X-Remove-Account-Meta-Color").unwrap(), "x");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, MetaValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    fn upsert(&mut self, key: String, value: MetaValue) {
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(entry) => *entry = (key, value),
            None => self.entries.push((key, value)),
        }
    }

    /// Sets the full header `key` to `value`.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.upsert(key.into(), MetaValue::Set(value.into()));
        self
    }

    /// Marks the full header `key` for removal.
    pub fn remove<K: Into<String>>(&mut self, key: K) -> &mut Self {
        self.upsert(key.into(), MetaValue::Remove);
        self
    }

    /// Sets `X-<Scope>-Meta-<name>` to `value`.
    pub fn set_meta<V: Into<String>>(&mut self, scope: MetaScope, name: &str, value: V) -> &mut Self {
        self.set(scope.header_name(name), value)
    }

    /// Marks `X-<Scope>-Meta-<name>` for removal.
    pub fn remove_meta(&mut self, scope: MetaScope, name: &str) -> &mut Self {
        self.remove(scope.header_name(name))
    }

    /// Consuming variant of [`Metadata::set`].
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Consuming variant of [`Metadata::remove`].
    pub fn without<K: Into<String>>(mut self, key: K) -> Self {
        self.remove(key);
        self
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encodes the entries as request headers.
    ///
    /// `Set` entries are sent verbatim; `Remove` entries are sent as
    /// [`remove_header_name`]`(key): x`.
    pub fn to_headers(&self) -> Multimap {
        let mut headers = Multimap::new();
        for (key, value) in &self.entries {
            match value {
                MetaValue::Set(v) => headers.add(key.as_str(), v.as_str()),
                MetaValue::Remove => headers.add(remove_header_name(key), REMOVE_SENTINEL),
            }
        }
        headers
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (k, v) in iter {
            metadata.set(k, v);
        }
        metadata
    }
}

/// Converts a metadata header name into its removal form.
///
/// The key is lower-cased and split on `-`; a leading `x` segment becomes `X-Remove`
/// and every other segment is title-cased. Keys without a leading `x` segment are
/// only title-cased.
///
/// ```
/// use openstack::swift::metadata::remove_header_name;
///
/// assert_eq!(remove_header_name("X-Account-Meta-Book"), "X-Remove-Account-Meta-Book");
/// assert_eq!(remove_header_name("x-object-meta-color"), "X-Remove-Object-Meta-Color");
/// ```
pub fn remove_header_name(key: &str) -> String {
    let lower = key.to_lowercase();
    lower
        .split('-')
        .enumerate()
        .map(|(i, segment)| {
            if i == 0 && segment == "x" {
                X_REMOVE_PREFIX.to_string()
            } else {
                title_case(segment)
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    #[test]
    fn test_remove_header_name_per_scope() {
        assert_eq!(remove_header_name("X-Account-Meta-Book"), "X-Remove-Account-Meta-Book");
        assert_eq!(remove_header_name("X-Container-Meta-Author"), "X-Remove-Container-Meta-Author");
        assert_eq!(remove_header_name("X-OBJECT-META-COLOR"), "X-Remove-Object-Meta-Color");
    }

    #[test]
    fn test_remove_header_name_without_leading_x() {
        assert_eq!(remove_header_name("object-meta-color"), "Object-Meta-Color");
        assert_eq!(remove_header_name("X-Object-Meta-X"), "X-Remove-Object-Meta-X");
    }

    #[test]
    fn test_set_replaces_case_insensitively() {
        let mut m = Metadata::new();
        m.set("X-Container-Meta-Author", "bb94ba2");
        m.set("x-container-meta-author", "saka01");
        assert_eq!(m.len(), 1);
        assert_eq!(
            m.get("X-CONTAINER-META-AUTHOR"),
            Some(&MetaValue::Set("saka01".into()))
        );
    }

    #[test]
    fn test_remove_overrides_set() {
        let mut m = Metadata::new();
        m.set_meta(MetaScope::Object, "Color", "blue");
        m.remove_meta(MetaScope::Object, "Color");
        assert_eq!(m.len(), 1);

        let headers = m.to_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-Remove-Object-Meta-Color").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let m = Metadata::new()
            .with("X-Account-Meta-B", "2")
            .with("X-Account-Meta-A", "1")
            .without("X-Account-Meta-C");
        let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["X-Account-Meta-B", "X-Account-Meta-A", "X-Account-Meta-C"]);
    }

    #[test]
    fn test_to_headers_idempotent() {
        let mut m = Metadata::new();
        m.set_meta(MetaScope::Account, "Book", "MobyDick");
        let once = m.to_headers();
        m.set_meta(MetaScope::Account, "Book", "MobyDick");
        assert_eq!(m.to_headers(), once);
    }

    #[test]
    fn test_from_iterator() {
        let m: Metadata = [("X-Object-Meta-A", "1"), ("X-Object-Meta-B", "2")]
            .into_iter()
            .collect();
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
        assert_eq!(MetaScope::Object.header_name("A"), "X-Object-Meta-A");
    }

    quickcheck! {
        fn prop_remove_name_ignores_case(key: String) -> bool {
            let key: String = key.chars().filter(char::is_ascii).collect();
            remove_header_name(&key.to_uppercase()) == remove_header_name(&key.to_lowercase())
        }

        fn prop_remove_name_adds_one_segment_for_x_keys(rest: String) -> bool {
            let rest: String = rest.chars().filter(char::is_ascii).collect();
            let key = format!("X-{rest}");
            let out = remove_header_name(&key);
            out.starts_with("X-Remove-") && out.split('-').count() == key.split('-').count() + 1
        }

        fn prop_scoped_keys_keep_scope(name: String) -> TestResult {
            let name: String = name.chars().filter(char::is_ascii_alphanumeric).collect();
            if name.is_empty() {
                return TestResult::discard();
            }
            let out = remove_header_name(&MetaScope::Container.header_name(&name));
            TestResult::from_bool(out == format!("X-Remove-Container-Meta-{}", title_case(&name)))
        }
    }
}
