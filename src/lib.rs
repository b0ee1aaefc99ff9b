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

//! # OpenStack Swift client (`openstack`)
//!
//! This crate provides a strongly-typed, async-first interface to the OpenStack Swift
//! object storage API: accounts, containers and objects, each carrying key/value
//! metadata in HTTP headers.
//!
//! Each supported Swift operation has a corresponding request builder (e.g.
//! [`swift::builders::ListContainers`], [`swift::builders::PutObject`],
//! [`swift::builders::UpdateContainerMetadata`]), which allows users to configure
//! request parameters using a fluent builder pattern.
//!
//! All request builders implement the [`swift::types::SwiftApi`] trait, which provides the
//! async [`send`](crate::swift::types::SwiftApi::send) method to execute the request and
//! return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use openstack::swift::SwiftClientBuilder;
//! use openstack::swift::metadata::{Metadata, MetaScope};
//! use openstack::swift::types::SwiftApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = SwiftClientBuilder::new()
//!         .auth_url("https://swift.example.com/auth/v1.0")
//!         .credentials("test:tester", "testing")
//!         .build()
//!         .unwrap();
//!
//!     let mut metadata = Metadata::new();
//!     metadata.set_meta(MetaScope::Container, "Author", "saka01");
//!
//!     client
//!         .update_container_metadata("photos", metadata)
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//! }
//! ```
//!
//! ## Design
//! - Each API method on the [`swift::client::SwiftClient`] returns a builder struct
//! - Builders implement [`swift::types::ToSwiftRequest`] for request conversion and [`swift::types::SwiftApi`] for execution
//! - Every request funnels through one authenticated pipeline that resolves the session
//!   lazily (TempAuth v1.0 or Keystone v2.0) exactly once per credential lifetime
//! - Responses implement [`swift::types::FromSwiftResponse`] for consistent deserialization

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod swift;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
