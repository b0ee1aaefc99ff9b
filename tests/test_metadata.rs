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

use openstack::swift::metadata::{MetaScope, Metadata};
use openstack::swift::response::{
    ShowAccountMetadataResponse, ShowContainerMetadataResponse, ShowObjectMetadataResponse,
    UpdateContainerMetadataResponse,
};
use openstack::swift::response_traits::{HasContainer, HasEtag, HasMetadata};
use openstack::swift::types::SwiftApi;
use openstack_common::test_context::TestContext;

async fn show_container(ctx: &TestContext, container: &str) -> ShowContainerMetadataResponse {
    ctx.client
        .show_container_metadata(container)
        .build()
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn container_metadata_set_show_remove() {
    let ctx = TestContext::new().await;
    let container = "bb94ba2";
    ctx.client
        .create_container(container)
        .build()
        .send()
        .await
        .unwrap();

    let mut metadata = Metadata::new();
    metadata.set("X-Container-Meta-Author", "saka01");
    let resp: UpdateContainerMetadataResponse = ctx
        .client
        .update_container_metadata(container, metadata)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.container(), container);

    let resp = show_container(&ctx, container).await;
    assert_eq!(resp.meta("Author"), Some("saka01"));
    assert_eq!(
        resp.metadata(),
        vec![("author".to_string(), "saka01".to_string())]
    );

    let metadata = Metadata::new().without("X-Container-Meta-Author");
    ctx.client
        .update_container_metadata(container, metadata)
        .build()
        .send()
        .await
        .unwrap();

    let resp = show_container(&ctx, container).await;
    assert_eq!(resp.meta("Author"), None);
    assert!(resp.metadata().is_empty());
}

#[tokio::test]
async fn container_metadata_set_is_idempotent() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;

    let metadata = Metadata::new()
        .with("X-Container-Meta-Author", "saka01")
        .with("X-Container-Meta-Color", "blue");
    for _ in 0..2 {
        ctx.client
            .update_container_metadata(&container, metadata.clone())
            .build()
            .send()
            .await
            .unwrap();
    }

    let resp = show_container(&ctx, &container).await;
    let mut pairs = resp.metadata();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("author".to_string(), "saka01".to_string()),
            ("color".to_string(), "blue".to_string()),
        ]
    );
}

#[tokio::test]
async fn container_metadata_latest_write_wins() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;

    let mut metadata = Metadata::new();
    metadata
        .set_meta(MetaScope::Container, "Author", "bb94ba2")
        .set_meta(MetaScope::Container, "Color", "red");
    ctx.client
        .update_container_metadata(&container, metadata)
        .build()
        .send()
        .await
        .unwrap();

    let mut metadata = Metadata::new();
    metadata
        .set_meta(MetaScope::Container, "Author", "saka01")
        .remove_meta(MetaScope::Container, "Color");
    ctx.client
        .update_container_metadata(&container, metadata)
        .build()
        .send()
        .await
        .unwrap();

    let resp = show_container(&ctx, &container).await;
    assert_eq!(resp.meta("author"), Some("saka01"));
    assert_eq!(resp.meta("Color"), None);
}

#[tokio::test]
async fn container_created_with_metadata() {
    let ctx = TestContext::new().await;
    let metadata = Metadata::new().with("X-Container-Meta-Owner", "ops");
    ctx.client
        .create_container("with-meta")
        .metadata(metadata)
        .build()
        .send()
        .await
        .unwrap();

    let resp = show_container(&ctx, "with-meta").await;
    assert_eq!(resp.meta("Owner"), Some("ops"));
}

#[tokio::test]
async fn account_metadata_set_and_remove() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;
    ctx.client
        .put_object(&container, "a.txt", "hello")
        .build()
        .send()
        .await
        .unwrap();

    let mut metadata = Metadata::new();
    metadata.set_meta(MetaScope::Account, "Book", "MobyDick");
    ctx.client
        .update_account_metadata(metadata)
        .build()
        .send()
        .await
        .unwrap();

    let resp: ShowAccountMetadataResponse = ctx
        .client
        .show_account_metadata()
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.meta("Book"), Some("MobyDick"));
    assert_eq!(resp.container_count().unwrap(), 1);
    assert_eq!(resp.object_count().unwrap(), 1);
    assert_eq!(resp.bytes_used().unwrap(), 5);

    let metadata = Metadata::new().without("X-Account-Meta-Book");
    ctx.client
        .update_account_metadata(metadata)
        .build()
        .send()
        .await
        .unwrap();
    let resp: ShowAccountMetadataResponse = ctx
        .client
        .show_account_metadata()
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.meta("Book"), None);
    assert!(ctx.swift.account_meta().is_empty());
}

#[tokio::test]
async fn object_metadata_replaced_on_update() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;
    let metadata = Metadata::new()
        .with("X-Object-Meta-Camera", "x100")
        .with("X-Object-Meta-Place", "Kyoto");
    ctx.client
        .put_object(&container, "photo.jpg", "jpeg bytes")
        .metadata(metadata)
        .content_type("image/jpeg")
        .build()
        .send()
        .await
        .unwrap();

    let resp: ShowObjectMetadataResponse = ctx
        .client
        .show_object_metadata(&container, "photo.jpg")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.meta("Camera"), Some("x100"));
    assert_eq!(resp.meta("Place"), Some("Kyoto"));
    assert_eq!(resp.content_type(), Some("image/jpeg"));
    assert_eq!(resp.etag(), Some(format!("{:x}", md5::compute(b"jpeg bytes")).as_str()));
    assert!(resp.last_modified().is_some());

    let mut metadata = Metadata::new();
    metadata.set_meta(MetaScope::Object, "Camera", "x200");
    ctx.client
        .update_object_metadata(&container, "photo.jpg", metadata)
        .build()
        .send()
        .await
        .unwrap();

    let resp: ShowObjectMetadataResponse = ctx
        .client
        .show_object_metadata(&container, "photo.jpg")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.meta("Camera"), Some("x200"));
    assert_eq!(resp.meta("Place"), None);
}
