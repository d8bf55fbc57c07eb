//! Google Drive API client
//!
//! Provides a typed HTTP client for the Drive v3 REST API. Handles bearer
//! authentication, JSON deserialization, multipart uploads, and streaming
//! downloads to disk.
//!
//! Content uploads and downloads deliberately run through separate base
//! URLs: Drive serves metadata from `/drive/v3` and media from
//! `/upload/drive/v3`. Both are overridable for tests.

use std::path::Path;

use anyhow::{Context, Result};
use futures_util::StreamExt;
use reqwest::{multipart, Client, Method, RequestBuilder};
use serde::Deserialize;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use backmeup_core::domain::FOLDER_MIME_TYPE;

/// Base URL for Drive v3 metadata requests
const DRIVE_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

/// Base URL for Drive v3 media upload requests
const DRIVE_UPLOAD_BASE_URL: &str = "https://www.googleapis.com/upload/drive/v3";

/// Fields requested from the files listing
const LIST_FIELDS: &str = "nextPageToken, files(id, name, mimeType, parents, trashed)";

// ============================================================================
// Drive API response types
// ============================================================================

/// A file resource as returned by the Drive API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Drive-assigned file id
    pub id: String,
    /// File name
    pub name: String,
    /// Mime type; folders carry the reserved folder mime type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Parent folder ids
    #[serde(default)]
    pub parents: Option<Vec<String>>,
    /// Whether the file sits in the trash
    #[serde(default)]
    pub trashed: Option<bool>,
}

/// One page of the files listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListResponse {
    #[serde(default)]
    files: Vec<DriveFile>,
    #[serde(default)]
    next_page_token: Option<String>,
}

// ============================================================================
// DriveClient
// ============================================================================

/// HTTP client for Google Drive API calls
///
/// Wraps `reqwest::Client` with bearer authentication and base URL
/// construction for the Drive v3 API.
pub struct DriveClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for metadata requests
    base_url: String,
    /// Base URL for media upload requests
    upload_base_url: String,
    /// Current OAuth2 access token
    access_token: String,
}

impl DriveClient {
    /// Creates a new DriveClient with the given access token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DRIVE_BASE_URL.to_string(),
            upload_base_url: DRIVE_UPLOAD_BASE_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Creates a new DriveClient with custom base URLs (useful for testing)
    ///
    /// # Arguments
    /// * `access_token` - A valid OAuth2 access token
    /// * `base_url` - Custom metadata base URL
    /// * `upload_base_url` - Custom media upload base URL
    pub fn with_base_urls(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
        upload_base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            upload_base_url: upload_base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Returns a reference to the current access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Creates an authenticated request builder against the metadata base URL
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
    }

    /// Creates an authenticated request builder against the upload base URL
    pub fn upload_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.upload_base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
    }

    /// Lists every file the account can see, following pagination
    ///
    /// Each returned resource carries the id, name, mime type, parent ids
    /// and trashed flag; filtering of trashed items is left to the caller.
    pub async fn list_files(&self) -> Result<Vec<DriveFile>> {
        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .request(Method::GET, "/files")
                .query(&[("fields", LIST_FIELDS), ("pageSize", "1000")]);
            if let Some(ref token) = page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: FileListResponse = request
                .send()
                .await
                .context("Failed to send files.list request")?
                .error_for_status()
                .context("files.list returned error status")?
                .json()
                .await
                .context("Failed to parse files.list response")?;

            files.extend(page.files);
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(count = files.len(), "listed drive files");
        Ok(files)
    }

    /// Creates a folder with the given name at the Drive root
    pub async fn create_folder(&self, name: &str) -> Result<DriveFile> {
        let metadata = serde_json::json!({
            "name": name,
            "mimeType": FOLDER_MIME_TYPE,
        });

        let folder: DriveFile = self
            .request(Method::POST, "/files")
            .json(&metadata)
            .send()
            .await
            .context("Failed to send folder create request")?
            .error_for_status()
            .context("Folder create returned error status")?
            .json()
            .await
            .context("Failed to parse folder create response")?;

        debug!(id = %folder.id, name, "created drive folder");
        Ok(folder)
    }

    /// Creates a file under `parent_id` with content read from `content`
    ///
    /// Uses a multipart upload: one part for the metadata JSON, one for
    /// the media bytes.
    pub async fn create_file(
        &self,
        name: &str,
        parent_id: &str,
        content: &Path,
    ) -> Result<DriveFile> {
        let bytes = tokio::fs::read(content)
            .await
            .with_context(|| format!("Failed to read upload content '{}'", content.display()))?;

        let metadata = serde_json::json!({
            "name": name,
            "parents": [parent_id],
        });
        let form = multipart::Form::new()
            .part(
                "metadata",
                multipart::Part::text(metadata.to_string()).mime_str("application/json")?,
            )
            .part(
                "media",
                multipart::Part::bytes(bytes).mime_str("application/octet-stream")?,
            );

        let file: DriveFile = self
            .upload_request(Method::POST, "/files")
            .query(&[("uploadType", "multipart")])
            .multipart(form)
            .send()
            .await
            .context("Failed to send file create request")?
            .error_for_status()
            .context("File create returned error status")?
            .json()
            .await
            .context("Failed to parse file create response")?;

        debug!(id = %file.id, name, "created drive file");
        Ok(file)
    }

    /// Replaces the content of file `id` with the bytes read from `content`
    ///
    /// Drive keeps the replaced content as a revision of the same file.
    pub async fn update_file(&self, id: &str, content: &Path) -> Result<DriveFile> {
        let bytes = tokio::fs::read(content)
            .await
            .with_context(|| format!("Failed to read upload content '{}'", content.display()))?;

        let file: DriveFile = self
            .upload_request(Method::PATCH, &format!("/files/{id}"))
            .query(&[("uploadType", "media")])
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .context("Failed to send file update request")?
            .error_for_status()
            .context("File update returned error status")?
            .json()
            .await
            .context("Failed to parse file update response")?;

        debug!(id = %file.id, "updated drive file");
        Ok(file)
    }

    /// Streams the latest content of file `id` to the local path `dest`
    pub async fn download(&self, id: &str, dest: &Path) -> Result<()> {
        let response = self
            .request(Method::GET, &format!("/files/{id}"))
            .query(&[("alt", "media")])
            .send()
            .await
            .context("Failed to send download request")?
            .error_for_status()
            .context("Download request returned error status")?;

        let mut file = tokio::fs::File::create(dest)
            .await
            .with_context(|| format!("Failed to create download target '{}'", dest.display()))?;
        let mut stream = response.bytes_stream();
        let mut written = 0usize;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Failed to read download response body")?;
            file.write_all(&chunk)
                .await
                .context("Failed to write downloaded chunk")?;
            written += chunk.len();
        }
        file.flush().await.context("Failed to flush download target")?;

        debug!(id, bytes = written, dest = %dest.display(), "downloaded drive file");
        Ok(())
    }
}
