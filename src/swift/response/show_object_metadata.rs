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
use crate::swift::response_traits::{
    HasContainer, HasEtag, HasMetadata, HasObject, HasSwiftFields, HasTransId, parse_u64_header,
};
use crate::swift::types::SwiftRequest;
use crate::swift::utils::UtcTime;
use crate::{impl_from_swift_response, impl_has_swift_fields};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::HeaderMap;

/// Response of the [show_object_metadata()](crate::swift::client::SwiftClient::show_object_metadata) API
#[derive(Debug)]
pub struct ShowObjectMetadataResponse {
    request: SwiftRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_swift_response!(ShowObjectMetadataResponse);
impl_has_swift_fields!(ShowObjectMetadataResponse);

impl HasContainer for ShowObjectMetadataResponse {}
impl HasObject for ShowObjectMetadataResponse {}
impl HasEtag for ShowObjectMetadataResponse {}
impl HasTransId for ShowObjectMetadataResponse {}

impl HasMetadata for ShowObjectMetadataResponse {
    const SCOPE: MetaScope = MetaScope::Object;
}

impl ShowObjectMetadataResponse {
    /// Size of the object in bytes.
    pub fn content_length(&self) -> Result<u64, ValidationErr> {
        parse_u64_header(self.headers(), CONTENT_LENGTH)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// `Last-Modified` as sent by the server (HTTP date); `None` when absent or malformed.
    pub fn last_modified(&self) -> Option<UtcTime> {
        let value = self.headers().get(LAST_MODIFIED)?.to_str().ok()?;
        DateTime::parse_from_rfc2822(value)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swift::client::SwiftClient;
    use chrono::Datelike;
    use http::{HeaderValue, Method};

    fn response(headers: HeaderMap) -> ShowObjectMetadataResponse {
        let client =
            SwiftClient::new("http://127.0.0.1:8080/auth/v1.0", "test:tester", "testing").unwrap();
        ShowObjectMetadataResponse {
            request: SwiftRequest::builder()
                .client(client)
                .method(Method::HEAD)
                .container("photos".to_string())
                .object("cat.jpg".to_string())
                .build(),
            headers,
            body: Bytes::new(),
        }
    }

    #[test]
    fn test_object_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("2048"));
        headers.insert("content-type", HeaderValue::from_static("image/jpeg"));
        headers.insert("etag", HeaderValue::from_static("\"0f343b0931126a20f133d67c2b018a3b\""));
        headers.insert("last-modified", HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
        headers.insert("x-object-meta-camera", HeaderValue::from_static("x100"));
        let resp = response(headers);

        assert_eq!(resp.container(), "photos");
        assert_eq!(resp.object(), "cat.jpg");
        assert_eq!(resp.content_length().unwrap(), 2048);
        assert_eq!(resp.content_type(), Some("image/jpeg"));
        assert_eq!(resp.etag(), Some("0f343b0931126a20f133d67c2b018a3b"));
        assert_eq!(resp.last_modified().map(|t| t.year()), Some(2015));
        assert_eq!(resp.meta("Camera"), Some("x100"));
        assert_eq!(
            resp.metadata(),
            vec![("camera".to_string(), "x100".to_string())]
        );
    }

    #[test]
    fn test_missing_headers() {
        let resp = response(HeaderMap::new());
        assert!(matches!(
            resp.content_length(),
            Err(ValidationErr::InvalidHeader(_))
        ));
        assert!(resp.etag().is_none());
        assert!(resp.last_modified().is_none());
        assert!(resp.metadata().is_empty());
    }
}
