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

use openstack::swift::SwiftClientBuilder;
use openstack::swift::auth::{AuthScheme, AuthState};
use openstack::swift::error::{AuthErr, ConfigErr, Error};
use openstack::swift::response::ListContainersResponse;
use openstack::swift::types::SwiftApi;
use openstack_common::test_context::{ACCOUNT, SECRET, TEMP_AUTH_PATH, TOKEN, TestContext};
use openstack_common::utils::init_logger;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn temp_auth_runs_once() {
    let ctx = TestContext::new().await;
    assert!(matches!(
        ctx.client.auth_state().await,
        AuthState::Unauthenticated
    ));

    for _ in 0..3 {
        ctx.client.list_containers().build().send().await.unwrap();
    }
    let (a, b, c) = tokio::join!(
        ctx.client.list_containers().build().send(),
        ctx.client.show_account_metadata().build().send(),
        ctx.client.clone().list_containers().build().send(),
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();

    assert_eq!(ctx.requests_to(TEMP_AUTH_PATH).await, 1);
    match ctx.client.auth_state().await {
        AuthState::Authenticated(session) => {
            assert_eq!(session.token(), TOKEN);
            assert_eq!(session.storage_url(), ctx.storage_url());
        }
        state => panic!("unexpected state: {state:?}"),
    }
}

#[tokio::test]
async fn temp_auth_sends_credentials() {
    let ctx = TestContext::new().await;
    ctx.client.authenticate().await.unwrap();

    let requests = ctx.server.received_requests().await.unwrap();
    let auth = requests
        .iter()
        .find(|r| r.url.path() == TEMP_AUTH_PATH)
        .unwrap();
    assert_eq!(auth.method.as_str(), "GET");
    assert_eq!(
        auth.headers.get("x-auth-user").and_then(|v| v.to_str().ok()),
        Some(ACCOUNT)
    );
    assert_eq!(
        auth.headers.get("x-auth-key").and_then(|v| v.to_str().ok()),
        Some(SECRET)
    );
    assert!(auth.headers.get("x-auth-token").is_none());
}

#[tokio::test]
async fn temp_auth_rejected_credentials() {
    let ctx = TestContext::new().await;
    let client = ctx.client_with_credentials(ACCOUNT, "wrong");

    let err = client.list_containers().build().send().await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert!(matches!(client.auth_state().await, AuthState::Failed(_)));

    // the failure is remembered until the session is reset
    let err = client.list_containers().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Auth(AuthErr::PreviouslyFailed(_))));
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.server_error().map(|e| e.body()), Some("Unauthorized"));
    assert_eq!(ctx.requests_to(TEMP_AUTH_PATH).await, 1);

    client.reset_session().await;
    let err = client.authenticate().await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(ctx.requests_to(TEMP_AUTH_PATH).await, 2);
}

#[tokio::test]
async fn temp_auth_server_error_is_retried_by_next_call() {
    init_logger();
    let server = MockServer::start().await;
    let storage_url = format!("{}/v1/AUTH_test", server.uri());
    Mock::given(method("GET"))
        .and(path(TEMP_AUTH_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TEMP_AUTH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-storage-url", storage_url.as_str())
                .insert_header("x-auth-token", TOKEN),
        )
        .mount(&server)
        .await;

    let client = SwiftClientBuilder::new()
        .auth_url(format!("{}{TEMP_AUTH_PATH}", server.uri()))
        .credentials(ACCOUNT, SECRET)
        .build()
        .unwrap();

    let err = client.authenticate().await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert!(matches!(client.auth_state().await, AuthState::Unauthenticated));

    let session = client.authenticate().await.unwrap();
    assert_eq!(session.token(), TOKEN);
    assert_eq!(session.storage_url(), storage_url);
}

#[tokio::test]
async fn temp_auth_missing_token_header() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEMP_AUTH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-storage-url", format!("{}/v1/AUTH_test", server.uri())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = SwiftClientBuilder::new()
        .auth_url(format!("{}{TEMP_AUTH_PATH}", server.uri()))
        .credentials(ACCOUNT, SECRET)
        .build()
        .unwrap();
    let err = client.authenticate().await.unwrap_err();
    assert!(
        matches!(err, Error::Auth(AuthErr::MissingResponseHeader(name)) if name == "X-Auth-Token"),
        "unexpected error: {err:?}"
    );
    assert!(matches!(client.auth_state().await, AuthState::Failed(_)));
}

fn keystone_catalog(base: &str) -> serde_json::Value {
    json!({
        "access": {
            "token": {"id": "ks-token", "expires": "2030-01-01T00:00:00Z"},
            "serviceCatalog": [
                {
                    "name": "nova",
                    "type": "compute",
                    "endpoints": [{"publicURL": format!("{base}/compute"), "region": "RegionTwo"}]
                },
                {
                    "name": "swift",
                    "type": "object-store",
                    "endpoints": [
                        {"publicURL": format!("{base}/v1/AUTH_one"), "region": "RegionOne"},
                        {"publicURL": format!("{base}/v1/AUTH_two"), "region": "RegionTwo"}
                    ]
                }
            ]
        }
    })
}

async fn keystone_server() -> MockServer {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2.0/tokens"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "auth": {
                "passwordCredentials": {"username": "demo", "password": "secret"},
                "tenantName": "demo-project"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(keystone_catalog(&server.uri())))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn keystone_selects_region_endpoint() {
    let server = keystone_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/AUTH_two"))
        .and(header("x-auth-token", "ks-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "regional", "count": 1, "bytes": 10}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = SwiftClientBuilder::new()
        .auth_url(format!("{}/v2.0/tokens", server.uri()))
        .credentials("demo", "secret")
        .tenant_name("demo-project")
        .region_name("RegionTwo")
        .build()
        .unwrap();

    let resp: ListContainersResponse = client.list_containers().build().send().await.unwrap();
    assert_eq!(resp.containers()[0].name, "regional");
    let session = client.authenticate().await.unwrap();
    assert_eq!(session.storage_url(), format!("{}/v1/AUTH_two", server.uri()));
}

#[tokio::test]
async fn keystone_without_region_takes_first_endpoint() {
    let server = keystone_server().await;
    let client = SwiftClientBuilder::new()
        .auth_url(format!("{}/v2.0/tokens", server.uri()))
        .credentials("demo", "secret")
        .tenant_name("demo-project")
        .auth_scheme(AuthScheme::KeystoneV2)
        .build()
        .unwrap();

    let session = client.authenticate().await.unwrap();
    assert_eq!(session.token(), "ks-token");
    assert_eq!(session.storage_url(), format!("{}/v1/AUTH_one", server.uri()));
}

#[tokio::test]
async fn keystone_unknown_region() {
    let server = keystone_server().await;
    let client = SwiftClientBuilder::new()
        .auth_url(format!("{}/v2.0/tokens", server.uri()))
        .credentials("demo", "secret")
        .tenant_name("demo-project")
        .region_name("RegionNine")
        .build()
        .unwrap();

    let err = client.list_containers().build().send().await.unwrap_err();
    assert!(
        matches!(&err, Error::Auth(AuthErr::NoEndpointForRegion { region }) if region == "RegionNine"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn unsupported_auth_version() {
    init_logger();
    let server = MockServer::start().await;
    let client = SwiftClientBuilder::new()
        .auth_url(format!("{}/v3/auth/tokens", server.uri()))
        .credentials("demo", "secret")
        .build()
        .unwrap();

    let err = client.list_containers().build().send().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigErr::UnsupportedAuthVersion(_))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_credentials() {
    let client = SwiftClientBuilder::new()
        .auth_url("http://127.0.0.1:1/auth/v1.0")
        .build()
        .unwrap();
    let err = client.list_containers().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Config(ConfigErr::MissingCredentials)));
}

#[tokio::test]
async fn unreachable_auth_endpoint_can_be_retried() {
    // nothing listens on port 1
    let client = SwiftClientBuilder::new()
        .auth_url("http://127.0.0.1:1/auth/v1.0")
        .credentials(ACCOUNT, SECRET)
        .build()
        .unwrap();
    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(matches!(
        client.auth_state().await,
        AuthState::Unauthenticated
    ));
}
