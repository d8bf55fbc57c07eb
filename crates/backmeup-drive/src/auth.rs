//! Stored-token loading
//!
//! The interactive OAuth consent flow lives outside this system; what the
//! pipelines need is the access token it left behind on the mandatory
//! volume. The token file is the JSON the consent tooling writes, of which
//! only the `access_token` field matters here.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// The subset of the stored token file this system reads
#[derive(Debug, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// Reads the OAuth access token from the stored token file
///
/// # Errors
///
/// Fails when the file is missing, not JSON, or carries an empty token.
pub async fn access_token_from_file(path: &Path) -> Result<String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read token file '{}'", path.display()))?;
    let token: StoredToken = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse token file '{}'", path.display()))?;
    if token.access_token.is_empty() {
        bail!("Token file '{}' carries an empty access token", path.display());
    }
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_is_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(
            &path,
            r#"{"access_token": "ya29.test", "refresh_token": "1//abc", "expiry": "2026-08-04T00:00:00Z"}"#,
        )
        .unwrap();

        let token = access_token_from_file(&path).await.unwrap();
        assert_eq!(token, "ya29.test");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = access_token_from_file(&dir.path().join("token.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("token.json"));
    }

    #[tokio::test]
    async fn test_empty_token_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, r#"{"access_token": ""}"#).unwrap();

        assert!(access_token_from_file(&path).await.is_err());
    }
}
