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

use crate::fake_swift::FakeSwift;
use crate::utils::{init_logger, rand_container_name};
use openstack::swift::types::SwiftApi;
use openstack::swift::{SwiftClient, SwiftClientBuilder};
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCOUNT: &str = "test:tester";
pub const SECRET: &str = "testing";
pub const TOKEN: &str = "AUTH_tk5e1f3b5a04d04c40a3c1e4b8a2c0d6f2";
pub const STORAGE_PATH: &str = "/v1/AUTH_test";
pub const TEMP_AUTH_PATH: &str = "/auth/v1.0";

/// A mock Swift cluster with TempAuth in front of it, and a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub swift: FakeSwift,
    pub client: SwiftClient,
}

impl TestContext {
    pub async fn new() -> Self {
        init_logger();
        let server = MockServer::start().await;
        let swift = FakeSwift::new(STORAGE_PATH, TOKEN);
        let storage_url = format!("{}{STORAGE_PATH}", server.uri());

        Mock::given(method("GET"))
            .and(path(TEMP_AUTH_PATH))
            .and(header("x-auth-user", ACCOUNT))
            .and(header("x-auth-key", SECRET))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-storage-url", storage_url.as_str())
                    .insert_header("x-auth-token", TOKEN)
                    .insert_header("x-storage-token", TOKEN),
            )
            .named("tempauth")
            .mount(&server)
            .await;
        Mock::given(path(TEMP_AUTH_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .with_priority(10)
            .named("tempauth rejected")
            .mount(&server)
            .await;
        Mock::given(path_regex(format!("^{STORAGE_PATH}(/.*)?$")))
            .respond_with(swift.clone())
            .named("swift")
            .mount(&server)
            .await;

        let client = SwiftClientBuilder::new()
            .auth_url(format!("{}{TEMP_AUTH_PATH}", server.uri()))
            .credentials(ACCOUNT, SECRET)
            .build()
            .unwrap();

        Self {
            server,
            swift,
            client,
        }
    }

    pub fn auth_url(&self) -> String {
        format!("{}{TEMP_AUTH_PATH}", self.server.uri())
    }

    pub fn storage_url(&self) -> String {
        format!("{}{STORAGE_PATH}", self.server.uri())
    }

    /// Client that skips authentication by using a known storage URL and token.
    pub fn bypass_client(&self, token: &str) -> SwiftClient {
        SwiftClientBuilder::new()
            .storage_url(self.storage_url())
            .token(token)
            .build()
            .unwrap()
    }

    /// Client authenticating with the given credentials against the mock TempAuth.
    pub fn client_with_credentials(&self, account: &str, secret: &str) -> SwiftClient {
        SwiftClientBuilder::new()
            .auth_url(self.auth_url())
            .credentials(account, secret)
            .build()
            .unwrap()
    }

    /// Number of requests the server received on `path`.
    pub async fn requests_to(&self, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == request_path)
            .count()
    }

    /// All requests received on the storage URL, in arrival order.
    pub async fn storage_requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path().starts_with(STORAGE_PATH))
            .collect()
    }

    /// Creates a container with a random name through the client.
    pub async fn create_container_helper(&self) -> String {
        let container = rand_container_name();
        self.client
            .create_container(&container)
            .build()
            .send()
            .await
            .unwrap();
        container
    }
}
