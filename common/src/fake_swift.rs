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

//! In-memory Swift object store answering wiremock requests.
//!
//! Implements enough of the Swift API for the client tests: token checks, account,
//! container and object CRUD, metadata set/remove headers, JSON listings with paging
//! and pseudo-directories, and server-side `COPY`.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::HeaderMap;
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use wiremock::{Request, Respond, ResponseTemplate};

const UNAUTHORIZED_BODY: &str = "<html><h1>Unauthorized</h1><p>This server could not verify that you are authorized to access the document you requested.</p></html>";
const NOT_FOUND_BODY: &str =
    "<html><h1>Not Found</h1><p>The resource could not be found.</p></html>";
const CONFLICT_BODY: &str = "<html><h1>Conflict</h1><p>There was a conflict when trying to complete your request.</p></html>";

type Meta = BTreeMap<String, String>;

#[derive(Clone, Debug)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: String,
    pub etag: String,
    pub meta: Meta,
    pub last_modified: DateTime<Utc>,
}

#[derive(Default, Debug)]
struct Container {
    meta: Meta,
    objects: BTreeMap<String, StoredObject>,
}

#[derive(Default, Debug)]
struct Account {
    meta: Meta,
    containers: BTreeMap<String, Container>,
}

/// Shared handle to the fake store; clones see the same state.
#[derive(Clone, Debug)]
pub struct FakeSwift {
    storage_path: String,
    token: String,
    account: Arc<Mutex<Account>>,
}

impl FakeSwift {
    /// `storage_path` is the URL path of the account, e.g. `/v1/AUTH_test`.
    pub fn new(storage_path: &str, token: &str) -> Self {
        Self {
            storage_path: storage_path.trim_end_matches('/').to_string(),
            token: token.to_string(),
            account: Arc::new(Mutex::new(Account::default())),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn has_container(&self, container: &str) -> bool {
        self.account.lock().unwrap().containers.contains_key(container)
    }

    /// Lower-case metadata header names and values of the account.
    pub fn account_meta(&self) -> Meta {
        self.account.lock().unwrap().meta.clone()
    }

    pub fn container_meta(&self, container: &str) -> Option<Meta> {
        let account = self.account.lock().unwrap();
        account.containers.get(container).map(|c| c.meta.clone())
    }

    pub fn object(&self, container: &str, object: &str) -> Option<StoredObject> {
        let account = self.account.lock().unwrap();
        account
            .containers
            .get(container)
            .and_then(|c| c.objects.get(object))
            .cloned()
    }

    /// Creates a container directly in the store, bypassing the API.
    pub fn seed_container(&self, container: &str) {
        let mut account = self.account.lock().unwrap();
        account.containers.entry(container.to_string()).or_default();
    }

    fn split_path(&self, path: &str) -> Option<(Option<String>, Option<String>)> {
        let rest = path.strip_prefix(&self.storage_path)?;
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        if rest.is_empty() {
            return Some((None, None));
        }
        let decode = |s: &str| urlencoding::decode(s).map(|c| c.into_owned()).ok();
        match rest.split_once('/') {
            None => Some((decode(rest), None)),
            Some((c, "")) => Some((decode(c), None)),
            Some((c, o)) => Some((decode(c), decode(o))),
        }
    }
}

impl Respond for FakeSwift {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let token = request
            .headers
            .get("x-auth-token")
            .and_then(|v| v.to_str().ok());
        if token != Some(self.token.as_str()) {
            return ResponseTemplate::new(401)
                .set_body_raw(UNAUTHORIZED_BODY, "text/html; charset=UTF-8");
        }

        let query: HashMap<String, String> = request.url.query_pairs().into_owned().collect();
        let method = request.method.as_str().to_string();
        let mut account = self.account.lock().unwrap();

        let resp = match self.split_path(request.url.path()) {
            Some((None, _)) => account_request(&mut account, &method, &request.headers, &query),
            Some((Some(c), None)) => {
                container_request(&mut account, &c, &method, &request.headers, &query)
            }
            Some((Some(c), Some(o))) => object_request(&mut account, &c, &o, &method, request),
            None => not_found(),
        };
        resp.insert_header("x-trans-id", format!("tx{}", uuid::Uuid::new_v4().simple()))
            .insert_header("x-timestamp", format!("{}.00000", Utc::now().timestamp()))
    }
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_raw(NOT_FOUND_BODY, "text/html; charset=UTF-8")
}

fn meta_headers(mut resp: ResponseTemplate, meta: &Meta) -> ResponseTemplate {
    for (k, v) in meta {
        resp = resp.insert_header(k.as_str(), v.as_str());
    }
    resp
}

/// Applies `X-<Scope>-Meta-*` and `X-Remove-<Scope>-Meta-*` request headers.
fn apply_meta(meta: &mut Meta, headers: &HeaderMap, scope: &str) {
    let set_prefix = format!("x-{scope}-meta-");
    let remove_prefix = format!("x-remove-{scope}-meta-");
    for (name, value) in headers {
        let name = name.as_str();
        let value = value.to_str().unwrap_or_default();
        if let Some(key) = name.strip_prefix(&remove_prefix) {
            meta.remove(&format!("{set_prefix}{key}"));
        } else if name.starts_with(&set_prefix) {
            if value.is_empty() {
                meta.remove(name);
            } else {
                meta.insert(name.to_string(), value.to_string());
            }
        }
    }
}

fn query_u64(query: &HashMap<String, String>, key: &str) -> Option<usize> {
    query.get(key).and_then(|v| v.parse().ok())
}

/// Names after paging and prefix filtering, with `delimiter` roll-up into subdirs.
fn list_names<'a>(
    names: impl Iterator<Item = &'a String>,
    query: &HashMap<String, String>,
) -> Vec<(String, bool)> {
    let prefix = query
        .get("path")
        .map(|p| format!("{}/", p.trim_end_matches('/')))
        .or_else(|| query.get("prefix").cloned())
        .unwrap_or_default();
    let delimiter = query
        .get("delimiter")
        .cloned()
        .or_else(|| query.get("path").map(|_| "/".to_string()));
    let marker = query.get("marker");
    let end_marker = query.get("end_marker");
    let limit = query_u64(query, "limit").unwrap_or(10_000);

    let mut out: Vec<(String, bool)> = Vec::new();
    for name in names {
        if !name.starts_with(&prefix) {
            continue;
        }
        if marker.is_some_and(|m| name <= m) || end_marker.is_some_and(|m| name >= m) {
            continue;
        }
        let entry = match &delimiter {
            Some(d) => match name[prefix.len()..].find(d.as_str()) {
                Some(idx) => (name[..prefix.len() + idx + d.len()].to_string(), true),
                None => (name.clone(), false),
            },
            None => (name.clone(), false),
        };
        if out.last() != Some(&entry) {
            out.push(entry);
        }
        if out.len() == limit {
            break;
        }
    }
    out
}

fn json_or_plain(query: &HashMap<String, String>, entries: Vec<Value>) -> ResponseTemplate {
    if query.get("format").map(String::as_str) == Some("json") {
        return ResponseTemplate::new(200).set_body_json(Value::Array(entries));
    }
    let names: Vec<String> = entries
        .iter()
        .filter_map(|e| e.get("name").or_else(|| e.get("subdir")))
        .filter_map(|v| v.as_str().map(String::from))
        .collect();
    ResponseTemplate::new(200).set_body_raw(names.join("\n"), "text/plain; charset=utf-8")
}

fn account_request(
    account: &mut Account,
    method: &str,
    headers: &HeaderMap,
    query: &HashMap<String, String>,
) -> ResponseTemplate {
    match method {
        "HEAD" => {
            let objects: usize = account.containers.values().map(|c| c.objects.len()).sum();
            let bytes: usize = account
                .containers
                .values()
                .flat_map(|c| c.objects.values())
                .map(|o| o.data.len())
                .sum();
            let resp = ResponseTemplate::new(204)
                .insert_header("x-account-container-count", account.containers.len().to_string())
                .insert_header("x-account-object-count", objects.to_string())
                .insert_header("x-account-bytes-used", bytes.to_string());
            meta_headers(resp, &account.meta)
        }
        "GET" => {
            let entries = list_names(account.containers.keys(), query)
                .into_iter()
                .filter_map(|(name, _)| {
                    let c = account.containers.get(&name)?;
                    let bytes: usize = c.objects.values().map(|o| o.data.len()).sum();
                    Some(json!({"name": name, "count": c.objects.len(), "bytes": bytes}))
                })
                .collect();
            json_or_plain(query, entries)
        }
        "POST" => {
            apply_meta(&mut account.meta, headers, "account");
            ResponseTemplate::new(204)
        }
        _ => ResponseTemplate::new(405),
    }
}

fn container_request(
    account: &mut Account,
    name: &str,
    method: &str,
    headers: &HeaderMap,
    query: &HashMap<String, String>,
) -> ResponseTemplate {
    if method == "PUT" {
        let existed = account.containers.contains_key(name);
        let container = account.containers.entry(name.to_string()).or_default();
        apply_meta(&mut container.meta, headers, "container");
        return ResponseTemplate::new(if existed { 202u16 } else { 201 });
    }
    let Some(container) = account.containers.get_mut(name) else {
        return not_found();
    };
    match method {
        "HEAD" => {
            let bytes: usize = container.objects.values().map(|o| o.data.len()).sum();
            let resp = ResponseTemplate::new(204)
                .insert_header("x-container-object-count", container.objects.len().to_string())
                .insert_header("x-container-bytes-used", bytes.to_string());
            meta_headers(resp, &container.meta)
        }
        "GET" => {
            let entries = list_names(container.objects.keys(), query)
                .into_iter()
                .filter_map(|(name, is_subdir)| {
                    if is_subdir {
                        return Some(json!({"subdir": name}));
                    }
                    let o = container.objects.get(&name)?;
                    Some(json!({
                        "name": name,
                        "hash": o.etag,
                        "bytes": o.data.len(),
                        "content_type": o.content_type,
                        "last_modified": o.last_modified.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
                    }))
                })
                .collect();
            json_or_plain(query, entries)
        }
        "POST" => {
            apply_meta(&mut container.meta, headers, "container");
            ResponseTemplate::new(204)
        }
        "DELETE" => {
            if !container.objects.is_empty() {
                return ResponseTemplate::new(409)
                    .set_body_raw(CONFLICT_BODY, "text/html; charset=UTF-8");
            }
            account.containers.remove(name);
            ResponseTemplate::new(204)
        }
        _ => ResponseTemplate::new(405),
    }
}

fn object_request(
    account: &mut Account,
    container: &str,
    object: &str,
    method: &str,
    request: &Request,
) -> ResponseTemplate {
    if method == "COPY" {
        return copy_object(account, container, object, &request.headers);
    }
    let Some(c) = account.containers.get_mut(container) else {
        return not_found();
    };
    match method {
        "PUT" => {
            let etag = format!("{:x}", md5::compute(&request.body));
            let sent_etag = request.headers.get("etag").and_then(|v| v.to_str().ok());
            if sent_etag.is_some_and(|e| e.trim_matches('"') != etag) {
                return ResponseTemplate::new(422).set_body_string("Unprocessable Entity");
            }
            let content_type = request
                .headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("application/octet-stream")
                .to_string();
            let mut meta = Meta::new();
            apply_meta(&mut meta, &request.headers, "object");
            c.objects.insert(
                object.to_string(),
                StoredObject {
                    data: Bytes::from(request.body.clone()),
                    content_type,
                    etag: etag.clone(),
                    meta,
                    last_modified: Utc::now(),
                },
            );
            ResponseTemplate::new(201).insert_header("etag", etag)
        }
        "GET" | "HEAD" => {
            let Some(o) = c.objects.get(object) else {
                return not_found();
            };
            let resp = ResponseTemplate::new(200)
                .set_body_raw(o.data.to_vec(), &o.content_type)
                .insert_header("etag", o.etag.as_str())
                .insert_header(
                    "last-modified",
                    o.last_modified.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
                );
            meta_headers(resp, &o.meta)
        }
        "POST" => {
            let Some(o) = c.objects.get_mut(object) else {
                return not_found();
            };
            let mut meta = Meta::new();
            apply_meta(&mut meta, &request.headers, "object");
            o.meta = meta;
            ResponseTemplate::new(202)
        }
        "DELETE" => match c.objects.remove(object) {
            Some(_) => ResponseTemplate::new(204),
            None => not_found(),
        },
        _ => ResponseTemplate::new(405),
    }
}

fn copy_object(
    account: &mut Account,
    container: &str,
    object: &str,
    headers: &HeaderMap,
) -> ResponseTemplate {
    let Some(destination) = headers.get("destination").and_then(|v| v.to_str().ok()) else {
        return ResponseTemplate::new(412).set_body_string("You must provide a Destination header");
    };
    let Some((dst_container, dst_object)) = destination.trim_start_matches('/').split_once('/')
    else {
        return ResponseTemplate::new(412).set_body_string("Bad Destination header");
    };
    let Some(mut copy) = account
        .containers
        .get(container)
        .and_then(|c| c.objects.get(object))
        .cloned()
    else {
        return not_found();
    };
    let Some(dst) = account.containers.get_mut(dst_container) else {
        return not_found();
    };
    apply_meta(&mut copy.meta, headers, "object");
    copy.last_modified = Utc::now();
    let etag = copy.etag.clone();
    dst.objects.insert(dst_object.to_string(), copy);
    ResponseTemplate::new(201)
        .insert_header("etag", etag)
        .insert_header("x-copied-from", format!("{container}/{object}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_list_names_delimiter_rolls_up() {
        let names: Vec<String> = ["a.txt", "dir/one", "dir/two", "z.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let listed = list_names(names.iter(), &q(&[("delimiter", "/")]));
        assert_eq!(
            listed,
            vec![
                ("a.txt".to_string(), false),
                ("dir/".to_string(), true),
                ("z.txt".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_list_names_paging() {
        let names: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let listed = list_names(names.iter(), &q(&[("marker", "a"), ("limit", "2")]));
        assert_eq!(
            listed,
            vec![("b".to_string(), false), ("c".to_string(), false)]
        );
    }

    #[test]
    fn test_split_path() {
        let swift = FakeSwift::new("/v1/AUTH_test", "tk");
        assert_eq!(swift.split_path("/v1/AUTH_test"), Some((None, None)));
        assert_eq!(
            swift.split_path("/v1/AUTH_test/photos/a%20b/c"),
            Some((Some("photos".to_string()), Some("a b/c".to_string())))
        );
        assert_eq!(swift.split_path("/other"), None);
    }
}
