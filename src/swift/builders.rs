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

//! Argument builders for [SwiftClient](crate::swift::client::SwiftClient) APIs

mod container_common;
mod copy_object;
mod create_container;
mod delete_container;
mod delete_object;
mod get_object;
mod list_containers;
mod list_objects;
mod object_common;
mod put_object;
mod show_account_metadata;
mod show_container_metadata;
mod show_object_metadata;
mod update_account_metadata;
mod update_container_metadata;
mod update_object_metadata;

pub use crate::swift::object_content::*;
pub use container_common::*;
pub use copy_object::*;
pub use create_container::*;
pub use delete_container::*;
pub use delete_object::*;
pub use get_object::*;
pub use list_containers::*;
pub use list_objects::*;
pub use object_common::*;
pub use put_object::*;
pub use show_account_metadata::*;
pub use show_container_metadata::*;
pub use show_object_metadata::*;
pub use update_account_metadata::*;
pub use update_container_metadata::*;
pub use update_object_metadata::*;
