//! Download-to-disk behavior

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use backmeup_core::ports::IRemoteStore;
use backmeup_drive::store::DriveStore;

use crate::common::{mount_download, setup_drive_mock};

#[tokio::test]
async fn test_download_writes_body_to_dest() {
    let (server, client) = setup_drive_mock().await;
    mount_download(&server, "file-1", b"encrypted archive bytes").await;
    let dest_dir = tempfile::tempdir().unwrap();
    let dest = dest_dir.path().join("photos.zip.gpg");

    client.download("file-1", &dest).await.unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), b"encrypted archive bytes");
}

#[tokio::test]
async fn test_download_through_store_port() {
    let (server, client) = setup_drive_mock().await;
    mount_download(&server, "file-2", b"via the port").await;
    let dest_dir = tempfile::tempdir().unwrap();
    let dest = dest_dir.path().join("notes.zip.gpg");

    let store = DriveStore::new(client);
    store.download("file-2", &dest).await.unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), b"via the port");
}

#[tokio::test]
async fn test_download_of_unknown_file_is_an_error() {
    let (server, client) = setup_drive_mock().await;
    Mock::given(method("GET"))
        .and(path("/files/missing"))
        .and(query_param("alt", "media"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let dest_dir = tempfile::tempdir().unwrap();

    let err = client
        .download("missing", &dest_dir.path().join("x.zip.gpg"))
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("error status"));
}
