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

//! Credential providers and the authenticated session

use std::fmt;

#[derive(Clone)]
/// Credentials contain the account name (user) and its secret (API key or password)
pub struct Credentials {
    pub account_name: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(account_name: &str, secret: &str) -> Self {
        Credentials {
            account_name: account_name.to_string(),
            secret: secret.to_string(),
        }
    }

    /// Returns true if both the account name and the secret are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.account_name.is_empty() && !self.secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_name", &self.account_name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: std::fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given account name and secret
    ///
    /// # Examples
    ///
    /// ```
    /// use openstack::swift::creds::StaticProvider;
    /// let provider = StaticProvider::new("test:tester", "testing");
    /// ```
    pub fn new(account_name: &str, secret: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials::new(account_name, secret),
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

/// Token and storage endpoint obtained from authentication.
///
/// Both fields are always set together and are never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    storage_url: String,
}

impl Session {
    /// Returns `None` if either the token or the storage URL is empty.
    pub fn try_new<T: Into<String>, U: Into<String>>(token: T, storage_url: U) -> Option<Self> {
        let token = token.into();
        let storage_url = storage_url.into();
        if token.is_empty() || storage_url.is_empty() {
            return None;
        }
        Some(Session { token, storage_url })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn storage_url(&self) -> &str {
        &self.storage_url
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("storage_url", &self.storage_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_requires_both_fields() {
        assert!(Session::try_new("", "http://127.0.0.1/v1/AUTH_test").is_none());
        assert!(Session::try_new("AUTH_tk1", "").is_none());
        let s = Session::try_new("AUTH_tk1", "http://127.0.0.1/v1/AUTH_test").unwrap();
        assert_eq!(s.token(), "AUTH_tk1");
        assert_eq!(s.storage_url(), "http://127.0.0.1/v1/AUTH_test");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = StaticProvider::new("test:tester", "testing").fetch();
        let out = format!("{creds:?}");
        assert!(out.contains("test:tester"));
        assert!(!out.contains("testing"));

        let session = Session::try_new("AUTH_tk1", "http://127.0.0.1/v1/AUTH_test").unwrap();
        assert!(!format!("{session:?}").contains("AUTH_tk1"));
    }

    #[test]
    fn test_credentials_complete() {
        assert!(Credentials::new("a", "b").is_complete());
        assert!(!Credentials::new("", "b").is_complete());
        assert!(!Credentials::new("a", "").is_complete());
    }
}
