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

//! Walks through the container and object life cycle against a real Swift cluster.
//!
//! Configure the connection with `SWIFT_AUTH_URL`, `SWIFT_API_USER` and `SWIFT_API_KEY`
//! (plus `SWIFT_TENANT_NAME` / `SWIFT_REGION_NAME` for Keystone), or with
//! `SWIFT_STORAGE_URL` and `SWIFT_USER_TOKEN` to skip authentication.

use openstack::swift::SwiftClientBuilder;
use openstack::swift::metadata::{MetaScope, Metadata};
use openstack::swift::response_traits::{HasEtag, HasMetadata};
use openstack::swift::types::SwiftApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let client = SwiftClientBuilder::from_env()
        .app_info(Some(("swift-quickstart".into(), "0.1.0".into())))
        .build()?;

    let container: &str = "quickstart-rust-container";
    client.create_container(container).build().send().await?;

    let mut metadata = Metadata::new();
    metadata.set_meta(MetaScope::Container, "Author", "saka01");
    client
        .update_container_metadata(container, metadata)
        .build()
        .send()
        .await?;
    let resp = client.show_container_metadata(container).build().send().await?;
    log::info!(
        "container '{container}' holds {} objects, author {:?}",
        resp.object_count()?,
        resp.meta("Author")
    );

    let resp = client
        .put_object(container, "hello.txt", "Hello from Rust!")
        .content_type("text/plain")
        .build()
        .send()
        .await?;
    log::info!("uploaded 'hello.txt', etag {:?}", resp.etag());

    let data = client
        .get_object(container, "hello.txt")
        .build()
        .send()
        .await?
        .to_bytes()
        .await?;
    log::info!("downloaded {} bytes: {}", data.len(), String::from_utf8_lossy(&data));

    for object in client.list_objects(container).build().send().await?.objects() {
        log::info!("{} ({} bytes, {})", object.name, object.bytes, object.content_type);
    }

    client.delete_object(container, "hello.txt").build().send().await?;
    client.delete_container(container).build().send().await?;
    log::info!("removed container '{container}'");
    Ok(())
}
