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

//! Upload sources and download sinks for object bodies

use crate::swift::utils::md5_hex;
use async_std::io::{ReadExt, WriteExt};
use bytes::{Bytes, BytesMut};
use futures_util::stream::{self, Stream, StreamExt};
use std::fmt;
use std::path::PathBuf;
use std::{fs, path::Path, pin::Pin};
use uuid::Uuid;

#[cfg(test)]
use quickcheck::Arbitrary;

type IoResult<T> = core::result::Result<T, std::io::Error>;

/// Boxed stream of body chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = IoResult<Bytes>> + Send>>;

// region: Size

#[derive(Debug, Clone, PartialEq, Eq, Copy, Default)]
pub enum Size {
    Known(u64),
    #[default]
    Unknown,
}

impl Size {
    /// Returns `true` if the size is known and `false` otherwise.
    pub fn is_known(&self) -> bool {
        matches!(self, Size::Known(_))
    }

    /// Returns the size if known, otherwise returns `None`.
    pub fn value(&self) -> Option<u64> {
        match self {
            Size::Known(v) => Some(*v),
            Size::Unknown => None,
        }
    }
}

impl From<Option<u64>> for Size {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(v) => Size::Known(v),
            None => Size::Unknown,
        }
    }
}

impl From<u64> for Size {
    fn from(value: u64) -> Self {
        Size::Known(value)
    }
}

#[cfg(test)]
impl Arbitrary for Size {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            Size::Known(u64::arbitrary(g))
        } else {
            Size::Unknown
        }
    }
}
// endregion: Size

/// Object content that can be uploaded or downloaded.
///
/// Can be constructed from a stream of `Bytes`, a file path, or a `Bytes` object.
/// Swift needs an explicit `Content-Length`, so streams must be created with a
/// known size to be uploaded.
pub struct ObjectContent(ObjectContentInner);

enum ObjectContentInner {
    Stream(ByteStream, Size),
    FilePath(PathBuf),
    Bytes(Bytes),
}

impl From<Bytes> for ObjectContent {
    fn from(value: Bytes) -> Self {
        ObjectContent(ObjectContentInner::Bytes(value))
    }
}

impl From<String> for ObjectContent {
    fn from(value: String) -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::from(value)))
    }
}

impl From<Vec<u8>> for ObjectContent {
    fn from(value: Vec<u8>) -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::from(value)))
    }
}

impl From<&'static [u8]> for ObjectContent {
    fn from(value: &'static [u8]) -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::from_static(value)))
    }
}

impl From<&'static str> for ObjectContent {
    fn from(value: &'static str) -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::from_static(value.as_bytes())))
    }
}

impl From<&Path> for ObjectContent {
    fn from(value: &Path) -> Self {
        ObjectContent(ObjectContentInner::FilePath(value.to_path_buf()))
    }
}

impl Default for ObjectContent {
    fn default() -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::new()))
    }
}

impl fmt::Debug for ObjectContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ObjectContentInner::Stream(_, size) => f.debug_tuple("Stream").field(size).finish(),
            ObjectContentInner::FilePath(p) => f.debug_tuple("FilePath").field(p).finish(),
            ObjectContentInner::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
        }
    }
}

impl ObjectContent {
    /// Create a new `ObjectContent` from a stream of `Bytes`.
    pub fn new_from_stream(
        r: impl Stream<Item = IoResult<Bytes>> + Send + 'static,
        size: impl Into<Size>,
    ) -> Self {
        let r = Box::pin(r);
        ObjectContent(ObjectContentInner::Stream(r, size.into()))
    }

    /// Hex MD5 of in-memory content; `None` for streams and files.
    pub fn md5_hex(&self) -> Option<String> {
        match &self.0 {
            ObjectContentInner::Bytes(b) => Some(md5_hex(b)),
            _ => None,
        }
    }

    pub async fn to_stream(self) -> IoResult<(ByteStream, Size)> {
        match self.0 {
            ObjectContentInner::Stream(r, size) => Ok((r, size)),

            ObjectContentInner::FilePath(path) => {
                let mut file = async_std::fs::File::open(&path).await?;
                let size = file.metadata().await?.len();

                let stream = async_stream::try_stream! {
                    let mut buf = vec![0u8; 8192];
                    loop {
                        let n = file.read(&mut buf).await?;
                        if n == 0 {
                            break;
                        }
                        yield Bytes::copy_from_slice(&buf[..n]);
                    }
                };

                Ok((Box::pin(stream), Some(size).into()))
            }

            ObjectContentInner::Bytes(b) => {
                let k = b.len();
                let r = Box::pin(stream::iter(std::iter::once(Ok(b))));
                Ok((r, Some(k as u64).into()))
            }
        }
    }

    /// Load the content into memory.
    pub async fn to_bytes(self) -> IoResult<Bytes> {
        if let ObjectContentInner::Bytes(b) = self.0 {
            return Ok(b);
        }
        let mut buf = BytesMut::new();
        let (mut r, _) = self.to_stream().await?;
        while let Some(bytes) = r.next().await {
            buf.extend_from_slice(&bytes?);
        }
        Ok(buf.freeze())
    }

    /// Write the content to a file. This function will return the total number
    /// of bytes written to the file. It first writes the content to a temporary
    /// file and then renames the temporary file to the final file path. The
    /// temporary file will be located in the same directory as the final file
    /// path.
    ///
    /// If the file already exists, it will be replaced. If the parent directory
    /// does not exist, an attempt to create it will be made.
    pub async fn to_file(self, file_path: &Path) -> IoResult<u64> {
        if file_path.is_dir() {
            return Err(std::io::Error::other("path is a directory"));
        }
        let parent_dir = file_path.parent().ok_or(std::io::Error::other(format!(
            "path {file_path:?} does not have a parent directory"
        )))?;
        if !parent_dir.as_os_str().is_empty() && !parent_dir.is_dir() {
            async_std::fs::create_dir_all(parent_dir).await?;
        }
        let file_name = file_path.file_name().ok_or(std::io::Error::other(
            "could not get filename-component of path",
        ))?;
        let mut tmp_file_name = file_name.to_os_string();
        tmp_file_name.push(format!("_{}", Uuid::new_v4().to_string().replace('-', "_")));
        let tmp_file_path = parent_dir.join(tmp_file_name);

        let mut total_bytes_written = 0;
        let mut fp = async_std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_file_path)
            .await?;
        let (mut r, _) = self.to_stream().await?;
        while let Some(bytes) = r.next().await {
            let bytes = bytes?;
            total_bytes_written += bytes.len() as u64;
            fp.write_all(&bytes).await?;
        }
        fp.flush().await?;
        drop(fp);
        fs::rename(&tmp_file_path, file_path)?;
        Ok(total_bytes_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    quickcheck! {
        fn prop_size_value_roundtrips_option(size: Size) -> bool {
            Size::from(size.value()) == size && size.is_known() == size.value().is_some()
        }
    }

    #[tokio::test]
    async fn test_bytes_content_has_known_size() {
        let content = ObjectContent::from("hello swift");
        assert_eq!(content.md5_hex().as_deref(), Some(md5_hex(b"hello swift").as_str()));
        let (_, size) = content.to_stream().await.unwrap();
        assert_eq!(size, Size::Known(11));
    }

    #[tokio::test]
    async fn test_stream_content_to_bytes() {
        let chunks = vec![Ok(Bytes::from_static(b"abc")), Ok(Bytes::from_static(b"def"))];
        let content = ObjectContent::new_from_stream(stream::iter(chunks), Some(6));
        assert!(content.md5_hex().is_none());
        assert_eq!(content.to_bytes().await.unwrap(), Bytes::from_static(b"abcdef"));
    }

    #[tokio::test]
    async fn test_to_file_and_back() {
        let dir = std::env::temp_dir().join(format!("openstack-rs-{}", Uuid::new_v4()));
        let path = dir.join("nested").join("object.bin");

        let written = ObjectContent::from(vec![7u8; 20_000]).to_file(&path).await.unwrap();
        assert_eq!(written, 20_000);

        let content = ObjectContent::from(path.as_path());
        let (_, size) = content.to_stream().await.unwrap();
        assert_eq!(size, Size::Known(20_000));

        let back = ObjectContent::from(path.as_path()).to_bytes().await.unwrap();
        assert_eq!(back.len(), 20_000);
        assert!(back.iter().all(|b| *b == 7));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
