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

//! Various utility and helper functions

use crate::swift::error::ValidationErr;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Longest container name Swift accepts by default, in bytes.
pub const MAX_CONTAINER_NAME_LENGTH: usize = 256;

/// Longest object name Swift accepts by default, in bytes.
pub const MAX_OBJECT_NAME_LENGTH: usize = 1024;

const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Encodes a query parameter key or value.
pub fn url_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Percent-encodes a URL path, keeping `/` separators intact.
pub fn url_encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_ENCODE_SET).collect()
}

/// Hex encoded MD5 digest, the format Swift uses for `ETag`.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// Parses the timestamp format of Swift listings, e.g. `2024-05-01T10:20:30.123456`.
pub fn from_swift_timestamp(s: &str) -> Result<UtcTime, ParseError> {
    let naive = NaiveDateTime::parse_from_str(s.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f")?;
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

pub mod swift_date_format {
    use super::{UtcTime, from_swift_timestamp};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<UtcTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(v) => from_swift_timestamp(&v)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Validates a container name: non-empty, at most 256 bytes, no `/`.
pub fn check_container_name(name: &str) -> Result<(), ValidationErr> {
    let err = |reason: &str| ValidationErr::InvalidContainerName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(err("container name cannot be empty"));
    }
    if name.len() > MAX_CONTAINER_NAME_LENGTH {
        return Err(err("container name cannot be longer than 256 bytes"));
    }
    if name.contains('/') {
        return Err(err("container name cannot contain '/'"));
    }
    Ok(())
}

/// Validates an object name: non-empty, at most 1024 bytes.
pub fn check_object_name(name: &str) -> Result<(), ValidationErr> {
    let err = |reason: &str| ValidationErr::InvalidObjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(err("object name cannot be empty"));
    }
    if name.len() > MAX_OBJECT_NAME_LENGTH {
        return Err(err("object name cannot be longer than 1024 bytes"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_url_encode_path_keeps_slashes() {
        assert_eq!(url_encode_path("photos/2024 summer/a+b.jpg"), "photos/2024%20summer/a%2Bb.jpg");
        assert_eq!(url_encode_path("héllo"), "h%C3%A9llo");
    }

    #[test]
    fn test_md5_hex() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(b"hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_from_swift_timestamp() {
        let t = from_swift_timestamp("2024-05-01T10:20:30.123456").unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2024, 5, 1));
        assert_eq!((t.hour(), t.minute(), t.second()), (10, 20, 30));
        assert_eq!(t.nanosecond(), 123_456_000);

        assert!(from_swift_timestamp("2024-05-01T10:20:30").is_ok());
        assert!(from_swift_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("meta"), "Meta");
        assert_eq!(title_case("CONTAINER"), "Container");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_check_container_name() {
        assert!(check_container_name("photos").is_ok());
        assert!(check_container_name(&"c".repeat(256)).is_ok());
        assert!(check_container_name("").is_err());
        assert!(check_container_name(&"c".repeat(257)).is_err());
        assert!(check_container_name("a/b").is_err());
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("dir/file.txt").is_ok());
        assert!(check_object_name(&"o".repeat(1024)).is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name(&"o".repeat(1025)).is_err());
    }
}
