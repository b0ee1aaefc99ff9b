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

//! Response traits for accessing Swift metadata from HTTP response headers.
//!
//! Account, container and object metadata travel in response headers, so most of the
//! accessors here read from [`HasSwiftFields::headers`]. Listing responses decode the
//! JSON body instead.
//!
//! ```rust,ignore
//! let resp = client.show_container_metadata("photos").build().send().await?;
//! let count = resp.object_count()?;
//! let author = resp.meta("Author");            // From HasMetadata
//! let trans_id = resp.trans_id();              // From HasTransId
//! ```

use crate::swift::error::ValidationErr;
use crate::swift::header_constants::*;
use crate::swift::metadata::MetaScope;
use crate::swift::types::SwiftRequest;
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromSwiftResponse` trait for the specified types.
macro_rules! impl_from_swift_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::swift::types::FromSwiftResponse for $ty {
                async fn from_swift_response(
                    request: $crate::swift::types::SwiftRequest,
                    response: Result<reqwest::Response, $crate::swift::error::Error>,
                ) -> Result<Self, $crate::swift::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp.bytes().await.map_err($crate::swift::error::NetworkError::from)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasSwiftFields` trait for the specified types.
macro_rules! impl_has_swift_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::swift::response_traits::HasSwiftFields for $ty {
                /// The request that was sent to the Swift API.
                #[inline]
                fn request(&self) -> &$crate::swift::types::SwiftRequest {
                    &self.request
                }

                /// The headers returned by the Swift API.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The body returned by the Swift API.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasSwiftFields {
    /// The request that was sent to the Swift API.
    fn request(&self) -> &SwiftRequest;
    /// HTTP headers returned by the server, carrying metadata such as `X-Container-Object-Count`, `ETag`, etc.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server.
    fn body(&self) -> &Bytes;
}

/// Returns the name of the container.
pub trait HasContainer: HasSwiftFields {
    #[inline]
    fn container(&self) -> &str {
        self.request().container.as_deref().unwrap_or_default()
    }
}

/// Returns the name of the object.
pub trait HasObject: HasSwiftFields {
    #[inline]
    fn object(&self) -> &str {
        self.request().object.as_deref().unwrap_or_default()
    }
}

/// Returns the Swift transaction id (`X-Trans-Id`).
pub trait HasTransId: HasSwiftFields {
    #[inline]
    fn trans_id(&self) -> Option<&str> {
        self.headers().get(X_TRANS_ID).and_then(|v| v.to_str().ok())
    }
}

/// Returns the value of the `ETag` header.
pub trait HasEtag: HasSwiftFields {
    #[inline]
    fn etag(&self) -> Option<&str> {
        self.headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim_matches('"'))
    }
}

/// User metadata carried in `X-<Scope>-Meta-*` response headers.
pub trait HasMetadata: HasSwiftFields {
    const SCOPE: MetaScope;

    /// Returns the user metadata as `(name, value)` pairs in header order, with the
    /// `X-<Scope>-Meta-` prefix stripped. Names are lower-case as delivered by HTTP.
    fn metadata(&self) -> Vec<(String, String)> {
        let prefix = Self::SCOPE.prefix().to_lowercase();
        self.headers()
            .iter()
            .filter_map(|(name, value)| {
                let name = name.as_str();
                let key = name.strip_prefix(prefix.as_str())?;
                Some((key.to_string(), value.to_str().ok()?.to_string()))
            })
            .collect()
    }

    /// Returns a single metadata value; `name` is matched case-insensitively.
    fn meta(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(Self::SCOPE.header_name(name))
            .and_then(|v| v.to_str().ok())
    }
}

pub(crate) fn parse_u64_header(headers: &HeaderMap, header: &'static str) -> Result<u64, ValidationErr> {
    let value = headers
        .get(header)
        .ok_or_else(|| ValidationErr::InvalidHeader(format!("missing '{header}' header")))?
        .to_str()?;
    value
        .parse::<u64>()
        .map_err(|source| ValidationErr::IntError { header, source })
}

/// Decodes a JSON listing body; an empty body (`204 No Content`) is an empty listing.
pub(crate) fn parse_listing<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<Vec<T>, ValidationErr> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swift::types::{ContainerInfo, ObjectInfo};
    use http::HeaderValue;

    #[test]
    fn test_parse_u64_header() {
        let mut headers = HeaderMap::new();
        headers.insert(X_CONTAINER_OBJECT_COUNT, HeaderValue::from_static("42"));
        headers.insert(X_CONTAINER_BYTES_USED, HeaderValue::from_static("lots"));

        assert_eq!(parse_u64_header(&headers, X_CONTAINER_OBJECT_COUNT).unwrap(), 42);
        assert!(matches!(
            parse_u64_header(&headers, X_CONTAINER_BYTES_USED),
            Err(ValidationErr::IntError { header: X_CONTAINER_BYTES_USED, .. })
        ));
        assert!(matches!(
            parse_u64_header(&headers, X_ACCOUNT_BYTES_USED),
            Err(ValidationErr::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_parse_listing_empty_body() {
        let containers: Vec<ContainerInfo> = parse_listing(&Bytes::new()).unwrap();
        assert!(containers.is_empty());
        let objects: Vec<ObjectInfo> = parse_listing(&Bytes::from_static(b"\n")).unwrap();
        assert!(objects.is_empty());
    }

    #[test]
    fn test_parse_listing_rejects_garbage() {
        let r: Result<Vec<ContainerInfo>, _> = parse_listing(&Bytes::from_static(b"<html>"));
        assert!(matches!(r, Err(ValidationErr::JsonError(_))));
    }

    #[test]
    fn test_parse_listing_containers() {
        let body = Bytes::from_static(br#"[{"name":"photos","count":3,"bytes":1024},{"name":"docs","count":0,"bytes":0}]"#);
        let containers: Vec<ContainerInfo> = parse_listing(&body).unwrap();
        assert_eq!(containers.len(), 2);
        assert_eq!(containers[0].name, "photos");
        assert_eq!(containers[0].count, 3);
        assert_eq!(containers[1].bytes, 0);
    }
}
