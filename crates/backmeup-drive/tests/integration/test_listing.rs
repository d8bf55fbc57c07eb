//! Listing behavior: pagination and the non-deleted view

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use backmeup_core::domain::FOLDER_MIME_TYPE;
use backmeup_core::ports::IRemoteStore;
use backmeup_drive::store::DriveStore;

use crate::common::{mount_list_single_page, setup_drive_mock};

#[tokio::test]
async fn test_list_files_returns_all_resources() {
    let (server, client) = setup_drive_mock().await;
    mount_list_single_page(
        &server,
        serde_json::json!([
            {"id": "folder-1", "name": "backMeUp", "mimeType": FOLDER_MIME_TYPE, "trashed": false},
            {"id": "file-1", "name": "photos.zip.gpg", "mimeType": "application/octet-stream",
             "parents": ["folder-1"], "trashed": false}
        ]),
    )
    .await;

    let files = client.list_files().await.unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].id, "folder-1");
    assert_eq!(files[1].name, "photos.zip.gpg");
}

#[tokio::test]
async fn test_list_files_follows_pagination() {
    let (server, client) = setup_drive_mock().await;

    // Page 1: returns a nextPageToken, consumed exactly once
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [{"id": "file-1", "name": "a.zip.gpg"}],
            "nextPageToken": "page-2"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // Page 2: matched by the pageToken query parameter
    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [{"id": "file-2", "name": "b.zip.gpg"}]
        })))
        .mount(&server)
        .await;

    let files = client.list_files().await.unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].id, "file-1");
    assert_eq!(files[1].id, "file-2");
}

#[tokio::test]
async fn test_store_filters_trashed_items() {
    let (server, client) = setup_drive_mock().await;
    mount_list_single_page(
        &server,
        serde_json::json!([
            {"id": "live", "name": "a.zip.gpg", "trashed": false},
            {"id": "gone", "name": "b.zip.gpg", "trashed": true}
        ]),
    )
    .await;

    let store = DriveStore::new(client);
    let items = store.list_non_deleted().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "live");
}

#[tokio::test]
async fn test_list_error_status_is_reported() {
    let (server, client) = setup_drive_mock().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.list_files().await.unwrap_err();

    assert!(format!("{err:#}").contains("error status"));
}
