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

use openstack::swift::response::{ListContainersResponse, ListObjectsResponse};
use openstack::swift::response_traits::HasContainer;
use openstack::swift::types::{ListParams, SwiftApi};
use openstack_common::test_context::{STORAGE_PATH, TestContext};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn put_objects(ctx: &TestContext, container: &str, names: &[&str]) {
    for name in names {
        ctx.client
            .put_object(container, *name, format!("content of {name}"))
            .build()
            .send()
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn list_containers() {
    let ctx = TestContext::new().await;
    for name in ["alpha", "beta", "gamma"] {
        ctx.client.create_container(name).build().send().await.unwrap();
    }
    put_objects(&ctx, "beta", &["one", "two"]).await;

    let resp: ListContainersResponse = ctx
        .client
        .list_containers()
        .build()
        .send()
        .await
        .unwrap();
    let names: Vec<&str> = resp.containers().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    let beta = &resp.containers()[1];
    assert_eq!(beta.count, 2);
    assert_eq!(beta.bytes, ("content of one".len() + "content of two".len()) as u64);
}

#[tokio::test]
async fn list_containers_paged() {
    let ctx = TestContext::new().await;
    for name in ["a1", "a2", "a3", "b1"] {
        ctx.client.create_container(name).build().send().await.unwrap();
    }

    let params = ListParams::builder().limit(2).marker("a1").build();
    let resp: ListContainersResponse = ctx
        .client
        .list_containers()
        .params(params)
        .build()
        .send()
        .await
        .unwrap();
    let names: Vec<String> = resp.into_containers().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["a2", "a3"]);

    let params = ListParams::builder().prefix("b").build();
    let resp: ListContainersResponse = ctx
        .client
        .list_containers()
        .params(params)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.containers().len(), 1);
    assert_eq!(resp.containers()[0].name, "b1");

    let request = ctx
        .storage_requests()
        .await
        .into_iter()
        .find(|r| r.url.query().is_some_and(|q| q.contains("limit=2")))
        .unwrap();
    let query: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
    assert!(query.contains(&("marker".to_string(), "a1".to_string())));
    assert!(query.contains(&("format".to_string(), "json".to_string())));
    assert!(!query.iter().any(|(k, _)| k == "prefix" || k == "end_marker"));
}

#[tokio::test]
async fn list_containers_empty_account() {
    let ctx = TestContext::new().await;
    // older clusters answer an empty listing with 204 and no body
    Mock::given(method("GET"))
        .and(path(STORAGE_PATH))
        .respond_with(ResponseTemplate::new(204))
        .with_priority(1)
        .mount(&ctx.server)
        .await;

    let resp: ListContainersResponse = ctx
        .client
        .list_containers()
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.containers().is_empty());
}

#[tokio::test]
async fn list_objects() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;
    put_objects(&ctx, &container, &["b.txt", "a.txt", "c.txt"]).await;

    let resp: ListObjectsResponse = ctx
        .client
        .list_objects(&container)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.container(), container);
    let objects = resp.objects();
    let names: Vec<&str> = objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);

    let a = &objects[0];
    assert_eq!(a.bytes, "content of a.txt".len() as u64);
    assert_eq!(a.hash, format!("{:x}", md5::compute("content of a.txt")));
    assert_eq!(a.content_type, "application/octet-stream");
    assert!(a.last_modified.is_some());
    assert!(!a.is_subdir());
}

#[tokio::test]
async fn list_objects_with_delimiter() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;
    put_objects(
        &ctx,
        &container,
        &["photos/2023/a.jpg", "photos/2024/b.jpg", "photos/cover.jpg", "readme"],
    )
    .await;

    let params = ListParams::builder().delimiter("/").build();
    let resp: ListObjectsResponse = ctx
        .client
        .list_objects(&container)
        .params(params)
        .build()
        .send()
        .await
        .unwrap();
    let objects = resp.into_objects();
    assert_eq!(objects.len(), 2);
    assert!(objects[0].is_subdir());
    assert_eq!(objects[0].subdir.as_deref(), Some("photos/"));
    assert_eq!(objects[1].name, "readme");

    let params = ListParams::builder()
        .prefix("photos/")
        .delimiter("/")
        .build();
    let resp: ListObjectsResponse = ctx
        .client
        .list_objects(&container)
        .params(params)
        .build()
        .send()
        .await
        .unwrap();
    let entries: Vec<String> = resp
        .objects()
        .iter()
        .map(|o| o.subdir.clone().unwrap_or_else(|| o.name.clone()))
        .collect();
    assert_eq!(
        entries,
        vec!["photos/2023/", "photos/2024/", "photos/cover.jpg"]
    );
}

#[tokio::test]
async fn list_objects_end_marker() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;
    put_objects(&ctx, &container, &["1", "2", "3", "4"]).await;

    let params = ListParams::builder().marker("1").end_marker("4").build();
    let resp: ListObjectsResponse = ctx
        .client
        .list_objects(&container)
        .params(params)
        .build()
        .send()
        .await
        .unwrap();
    let names: Vec<&str> = resp.objects().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["2", "3"]);
}
