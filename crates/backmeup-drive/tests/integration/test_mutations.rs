//! Folder creation, multipart file creation, and media updates

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use backmeup_core::domain::FOLDER_MIME_TYPE;

use crate::common::setup_drive_mock;

#[tokio::test]
async fn test_create_folder_posts_metadata() {
    let (server, client) = setup_drive_mock().await;
    Mock::given(method("POST"))
        .and(path("/files"))
        .and(body_json(serde_json::json!({
            "name": "backMeUp",
            "mimeType": FOLDER_MIME_TYPE
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "folder-1",
            "name": "backMeUp",
            "mimeType": FOLDER_MIME_TYPE
        })))
        .expect(1)
        .mount(&server)
        .await;

    let folder = client.create_folder("backMeUp").await.unwrap();

    assert_eq!(folder.id, "folder-1");
    assert_eq!(folder.mime_type.as_deref(), Some(FOLDER_MIME_TYPE));
}

#[tokio::test]
async fn test_create_file_uses_multipart_upload() {
    let (server, client) = setup_drive_mock().await;
    let content_dir = tempfile::tempdir().unwrap();
    let content = content_dir.path().join("photos.zip.gpg");
    std::fs::write(&content, b"ciphertext bytes").unwrap();

    Mock::given(method("POST"))
        .and(path("/files"))
        .and(query_param("uploadType", "multipart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "file-1",
            "name": "photos.zip.gpg",
            "parents": ["folder-1"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = client
        .create_file("photos.zip.gpg", "folder-1", &content)
        .await
        .unwrap();

    assert_eq!(file.id, "file-1");
    assert_eq!(file.parents.unwrap(), vec!["folder-1".to_string()]);
}

#[tokio::test]
async fn test_update_file_patches_media() {
    let (server, client) = setup_drive_mock().await;
    let content_dir = tempfile::tempdir().unwrap();
    let content = content_dir.path().join("photos.zip.gpg");
    std::fs::write(&content, b"fresh ciphertext").unwrap();

    Mock::given(method("PATCH"))
        .and(path("/files/file-1"))
        .and(query_param("uploadType", "media"))
        .and(header("Content-Type", "application/octet-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "file-1",
            "name": "photos.zip.gpg"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = client.update_file("file-1", &content).await.unwrap();

    assert_eq!(file.id, "file-1");
}

#[tokio::test]
async fn test_create_file_with_missing_content_fails_locally() {
    let (server, client) = setup_drive_mock().await;
    let content_dir = tempfile::tempdir().unwrap();

    let err = client
        .create_file(
            "photos.zip.gpg",
            "folder-1",
            &content_dir.path().join("absent.zip.gpg"),
        )
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("absent.zip.gpg"));
    // Nothing was sent to the server
    assert!(server.received_requests().await.unwrap().is_empty());
}
