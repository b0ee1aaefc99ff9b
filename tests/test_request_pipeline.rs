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

use openstack::swift::error::Error;
use openstack::swift::metadata::Metadata;
use openstack::swift::multimap_ext::{Multimap, MultimapExt};
use openstack::swift::response::ListContainersResponse;
use openstack::swift::types::SwiftApi;
use openstack_common::test_context::{STORAGE_PATH, TEMP_AUTH_PATH, TOKEN, TestContext};

fn header_values(request: &wiremock::Request, name: &str) -> Vec<String> {
    request
        .headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok().map(String::from))
        .collect()
}

#[tokio::test]
async fn bypass_lists_without_authenticating() {
    let ctx = TestContext::new().await;
    ctx.swift.seed_container("pre-existing");
    let client = ctx.bypass_client(TOKEN);

    let resp: ListContainersResponse = client.list_containers().build().send().await.unwrap();
    assert_eq!(resp.containers().len(), 1);
    assert_eq!(resp.containers()[0].name, "pre-existing");
    assert_eq!(ctx.requests_to(TEMP_AUTH_PATH).await, 0);
}

#[tokio::test]
async fn invalid_token_is_a_server_error() {
    let ctx = TestContext::new().await;
    let client = ctx.bypass_client("AUTH_tk_not_valid");

    let err = client.list_containers().build().send().await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    match &err {
        Error::Server(e) => {
            assert!(e.is_unauthorized());
            assert!(e.body().contains("Unauthorized"));
        }
        e => panic!("unexpected error: {e:?}"),
    }
    assert_eq!(ctx.requests_to(TEMP_AUTH_PATH).await, 0);
}

#[tokio::test]
async fn format_json_cannot_be_overridden() {
    let ctx = TestContext::new().await;
    let mut query = Multimap::new();
    query.add("Format", "xml");
    query.add("format", "plain");

    ctx.client
        .list_containers()
        .extra_query_params(query)
        .build()
        .send()
        .await
        .unwrap();

    let request = ctx.storage_requests().await.pop().unwrap();
    let formats: Vec<String> = request
        .url
        .query_pairs()
        .filter(|(k, _)| k.eq_ignore_ascii_case("format"))
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(formats, vec!["json"]);
}

#[tokio::test]
async fn format_json_sent_on_every_operation() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;
    ctx.client
        .put_object(&container, "obj", "data")
        .build()
        .send()
        .await
        .unwrap();
    ctx.client
        .show_object_metadata(&container, "obj")
        .build()
        .send()
        .await
        .unwrap();
    ctx.client
        .delete_object(&container, "obj")
        .build()
        .send()
        .await
        .unwrap();

    let requests = ctx.storage_requests().await;
    assert_eq!(requests.len(), 4);
    for request in requests {
        assert_eq!(request.url.query(), Some("format=json"), "{}", request.url);
    }
}

#[tokio::test]
async fn caller_cannot_override_token() {
    let ctx = TestContext::new().await;
    let mut headers = Multimap::new();
    headers.add("X-Auth-Token", "forged");
    headers.add("x-auth-token", "forged-again");

    ctx.client
        .list_containers()
        .extra_headers(headers)
        .build()
        .send()
        .await
        .unwrap();

    let request = ctx.storage_requests().await.pop().unwrap();
    assert_eq!(header_values(&request, "x-auth-token"), vec![TOKEN]);
}

#[tokio::test]
async fn caller_headers_are_forwarded() {
    let ctx = TestContext::new().await;
    let mut headers = Multimap::new();
    headers.add("X-Container-Read", ".r:*");
    headers.add("User-Agent", "backup-tool/2.1");

    ctx.client
        .create_container("public")
        .extra_headers(headers)
        .build()
        .send()
        .await
        .unwrap();

    let request = ctx.storage_requests().await.pop().unwrap();
    assert_eq!(header_values(&request, "x-container-read"), vec![".r:*"]);
    assert_eq!(header_values(&request, "user-agent"), vec!["backup-tool/2.1"]);
    assert_eq!(request.url.path(), format!("{STORAGE_PATH}/public"));
}

#[tokio::test]
async fn default_user_agent() {
    let ctx = TestContext::new().await;
    ctx.client.list_containers().build().send().await.unwrap();

    let request = ctx.storage_requests().await.pop().unwrap();
    let agents = header_values(&request, "user-agent");
    assert_eq!(agents.len(), 1);
    assert!(agents[0].starts_with("Swift ("), "{}", agents[0]);
    assert!(agents[0].contains("openstack-rs/"));
    assert_eq!(agents[0], ctx.client.user_agent());
}

#[tokio::test]
async fn metadata_update_sends_empty_body() {
    let ctx = TestContext::new().await;
    let container = ctx.create_container_helper().await;
    let mut metadata = Metadata::new();
    metadata
        .set("X-Container-Meta-Author", "saka01")
        .remove("X-Container-Meta-Old");

    ctx.client
        .update_container_metadata(&container, metadata)
        .build()
        .send()
        .await
        .unwrap();

    let request = ctx.storage_requests().await.pop().unwrap();
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(header_values(&request, "content-length"), vec!["0"]);
    assert!(request.body.is_empty());
    assert_eq!(
        header_values(&request, "x-container-meta-author"),
        vec!["saka01"]
    );
    assert_eq!(
        header_values(&request, "x-remove-container-meta-old"),
        vec!["x"]
    );
}

#[tokio::test]
async fn shared_session_across_clones() {
    let ctx = TestContext::new().await;
    let clone = ctx.client.clone();
    clone.authenticate().await.unwrap();

    ctx.client.list_containers().build().send().await.unwrap();
    assert_eq!(ctx.requests_to(TEMP_AUTH_PATH).await, 1);

    ctx.client.reset_session().await;
    clone.list_containers().build().send().await.unwrap();
    assert_eq!(ctx.requests_to(TEMP_AUTH_PATH).await, 2);
}
