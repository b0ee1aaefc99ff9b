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

//! Core request type and the traits connecting builders, pipeline and responses

use crate::swift::client::SwiftClient;
use crate::swift::error::{Error, ValidationErr};
use crate::swift::http::resource_path;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::object_content::ObjectContent;
use crate::swift::utils::{UtcTime, swift_date_format};
use async_trait::async_trait;
use http::Method;
use serde::Deserialize;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
/// Generic Swift request
pub struct SwiftRequest {
    #[builder(!default)] // force required
    pub(crate) client: SwiftClient,

    #[builder(!default)] // force required
    method: Method,

    #[builder(default, setter(into))]
    pub(crate) container: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<ObjectContent>,
}

impl SwiftRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Encoded path relative to the storage URL.
    pub fn path(&self) -> String {
        resource_path(self.container.as_deref(), self.object.as_deref())
    }

    /// Execute the request, returning the response. Only used in [`SwiftApi::send()`].
    ///
    /// The body, if any, is consumed by the first call.
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                self.method.clone(),
                &self.path(),
                &self.headers,
                &self.query_params,
                self.body.take(),
            )
            .await
    }
}

/// Converts a request builder into a [`SwiftRequest`].
pub trait ToSwiftRequest: Sized {
    /// Consumes this request builder and returns a [`SwiftRequest`], validating
    /// container and object names on the way.
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr>;
}

/// Converts an HTTP response into a strongly typed Swift response.
#[async_trait]
pub trait FromSwiftResponse: Sized {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all Swift API request builders.
///
/// `send()` converts the builder with [`ToSwiftRequest`], executes it through the
/// authenticated pipeline and decodes the result with [`FromSwiftResponse`].
#[async_trait]
pub trait SwiftApi: ToSwiftRequest {
    type SwiftResponse: FromSwiftResponse;

    async fn send(self) -> Result<Self::SwiftResponse, Error> {
        let mut req: SwiftRequest = self.to_swift_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::SwiftResponse::from_swift_response(req, resp).await
    }
}

/// Optional listing parameters for account and container listings.
///
/// Only non-default values are sent: a `limit` of 0 and empty strings are left out.
#[derive(Clone, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct ListParams {
    #[builder(default, setter(strip_option))]
    pub limit: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    pub marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub end_marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub prefix: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub delimiter: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub path: Option<String>,
}

impl ListParams {
    /// Adds the non-default values to `query`.
    pub fn apply_to(&self, query: &mut Multimap) {
        if let Some(v) = self.limit.filter(|&v| v != 0) {
            query.add("limit", v.to_string());
        }
        let pairs = [
            ("marker", &self.marker),
            ("end_marker", &self.end_marker),
            ("prefix", &self.prefix),
            ("delimiter", &self.delimiter),
            ("path", &self.path),
        ];
        for (key, value) in pairs {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                query.add(key, v);
            }
        }
    }

    pub fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        self.apply_to(&mut query);
        query
    }
}

/// Container entry of an account listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContainerInfo {
    pub name: String,
    /// Number of objects in the container.
    #[serde(default)]
    pub count: u64,
    /// Bytes stored in the container.
    #[serde(default)]
    pub bytes: u64,
}

/// Object entry of a container listing.
///
/// Listings made with a `delimiter` also return pseudo-directories; those entries
/// only carry [`subdir`](ObjectInfo::subdir).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectInfo {
    #[serde(default)]
    pub name: String,
    /// MD5 of the object content.
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub content_type: String,
    #[serde(default, with = "swift_date_format")]
    pub last_modified: Option<UtcTime>,
    #[serde(default)]
    pub subdir: Option<String>,
}

impl ObjectInfo {
    pub fn is_subdir(&self) -> bool {
        self.subdir.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_only_set_values() {
        assert!(ListParams::default().to_query().is_empty());

        let q = ListParams::builder().limit(10).prefix("2024/").build().to_query();
        assert_eq!(q.len(), 2);
        assert_eq!(q.get("limit").map(String::as_str), Some("10"));
        assert_eq!(q.get("prefix").map(String::as_str), Some("2024/"));
    }

    #[test]
    fn test_list_params_skip_zero_and_empty() {
        let q = ListParams::builder()
            .limit(0)
            .marker("")
            .end_marker("")
            .prefix("")
            .delimiter("")
            .path("")
            .build()
            .to_query();
        assert!(q.is_empty());

        let q = ListParams::builder().limit(0).marker("m").build().to_query();
        assert_eq!(q.len(), 1);
        assert_eq!(q.get("marker").map(String::as_str), Some("m"));
    }

    #[test]
    fn test_list_params_path_keyed_on_path() {
        let q = ListParams::builder().path("photos").build().to_query();
        assert_eq!(q.get("path").map(String::as_str), Some("photos"));
        assert!(q.get("end_marker").is_none());

        let q = ListParams::builder().end_marker("m").build().to_query();
        assert_eq!(q.get("end_marker").map(String::as_str), Some("m"));
        assert!(q.get("path").is_none());
    }

    #[test]
    fn test_list_params_all_values() {
        let q = ListParams::builder()
            .limit(1)
            .marker("a")
            .end_marker("z")
            .prefix("p")
            .delimiter("/")
            .path("d")
            .build()
            .to_query();
        assert_eq!(q.len(), 6);
        assert_eq!(q.get("delimiter").map(String::as_str), Some("/"));
    }

    #[test]
    fn test_decode_container_listing() {
        let body = r#"[{"count": 3, "bytes": 1024, "name": "photos"}, {"count": 0, "bytes": 0, "name": "empty"}]"#;
        let list: Vec<ContainerInfo> = serde_json::from_str(body).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], ContainerInfo { name: "photos".into(), count: 3, bytes: 1024 });
    }

    #[test]
    fn test_decode_object_listing_with_subdir() {
        let body = r#"[
            {"hash": "d41d8cd98f00b204e9800998ecf8427e", "last_modified": "2024-05-01T10:20:30.123456",
             "bytes": 0, "name": "a.txt", "content_type": "text/plain"},
            {"subdir": "photos/"}
        ]"#;
        let list: Vec<ObjectInfo> = serde_json::from_str(body).unwrap();
        assert_eq!(list[0].name, "a.txt");
        assert_eq!(list[0].content_type, "text/plain");
        assert!(list[0].last_modified.is_some());
        assert!(!list[0].is_subdir());
        assert!(list[1].is_subdir());
        assert_eq!(list[1].subdir.as_deref(), Some("photos/"));
        assert!(list[1].last_modified.is_none());
    }
}
