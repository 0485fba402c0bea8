//! Shared helpers for the wiremock-driven integration tests.

#![allow(dead_code)] // not every test file needs every helper

use filestation::Session;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LOGIN_PATH: &str = "/cgi-bin/filemanager/wfm2Login.cgi";
pub const LOGOUT_PATH: &str = "/cgi-bin/filemanager/wfm2Logout.cgi";
pub const UTIL_PATH: &str = "/cgi-bin/filemanager/utilRequest.cgi";

pub const SID: &str = "test-sid";

pub fn json_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Accept any login and hand out [`SID`].
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(json_response(json!({
            "status": 1,
            "sid": SID,
            "version": "5.1.0",
            "build": "20240101",
            "admingroup": 1
        })))
        .mount(server)
        .await;
}

/// Log into the mock server.
pub async fn connected_session(server: &MockServer) -> Session {
    mount_login(server).await;
    Session::connect(&server.uri(), "admin", "secret", None)
        .await
        .expect("login against mock server")
}

/// Number of requests the mock server received for a `func`.
pub async fn requests_for(server: &MockServer, func: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| {
            r.url
                .query_pairs()
                .any(|(k, v)| k == "func" && v == func)
        })
        .count()
}
