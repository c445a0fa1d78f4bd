//! Session snapshot handed over by the external authentication provider.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use webblog_api_types::User;

use super::error::InfraError;

/// Bearer token plus the user it was issued for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Read the session file. A missing file means the client runs anonymously.
pub async fn load(path: Option<&Path>) -> Result<Option<Session>, InfraError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "session file absent; continuing anonymously");
            return Ok(None);
        }
        Err(source) => {
            return Err(InfraError::SessionRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let session: Session =
        serde_json::from_slice(&bytes).map_err(|source| InfraError::SessionFormat {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(user_id = session.user.id, "session loaded");
    Ok(Some(session))
}

/// Forget the session on disk. An already missing file is not an error.
pub async fn clear(path: Option<&Path>) -> Result<(), InfraError> {
    let Some(path) = path else {
        return Ok(());
    };

    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(InfraError::SessionRemove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn tmp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("tmp file");
        file.write_all(contents.as_bytes()).expect("write tmp");
        file
    }

    #[tokio::test]
    async fn no_path_means_anonymous() {
        let session = load(None).await.expect("load");
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn missing_file_means_anonymous() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("absent.json");
        let session = load(Some(&path)).await.expect("load");
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn reads_token_and_user() {
        let file = tmp_file(
            r#"{"token":"abc","user":{"id":4,"name":"Ada","email":"ada@example.com","role":"ROLE_USER"}}"#,
        );
        let session = load(Some(file.path()))
            .await
            .expect("load")
            .expect("session present");
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.id, 4);
    }

    #[tokio::test]
    async fn clear_removes_file_and_tolerates_absence() {
        let file = tmp_file("{}");
        let path = file.path().to_path_buf();
        clear(Some(&path)).await.expect("first clear");
        assert!(!path.exists());
        clear(Some(&path)).await.expect("second clear");
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let file = tmp_file("not json");
        let err = load(Some(file.path())).await.expect_err("malformed");
        assert!(matches!(err, InfraError::SessionFormat { .. }));
    }
}
