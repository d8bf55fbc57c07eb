//! Shared test helpers for Drive API integration tests
//!
//! Provides wiremock-based mock server setup for Drive v3 endpoints.
//! Both the metadata and the media-upload base URLs of the client point
//! at the same mock server; tests tell them apart by path and query.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use backmeup_drive::client::DriveClient;

/// Starts a mock server and returns it with a client pointed at it
pub async fn setup_drive_mock() -> (MockServer, DriveClient) {
    let server = MockServer::start().await;
    let client = DriveClient::with_base_urls("test-access-token", server.uri(), server.uri());
    (server, client)
}

/// Mounts a files.list endpoint returning a single page with given files
pub async fn mount_list_single_page(server: &MockServer, files: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": files
        })))
        .mount(server)
        .await;
}

/// Mounts a download endpoint serving raw bytes for a specific file id
#[allow(dead_code)]
pub async fn mount_download(server: &MockServer, file_id: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/files/{file_id}")))
        .and(query_param("alt", "media"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(content.to_vec())
                .append_header("Content-Type", "application/octet-stream"),
        )
        .mount(server)
        .await;
}
