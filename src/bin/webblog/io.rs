#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use webblog::application::error::AppError;

/// File contents win over the inline value.
pub async fn read_opt_value(
    val: Option<String>,
    file: Option<PathBuf>,
) -> Result<Option<String>, AppError> {
    if let Some(path) = file {
        let data = tokio::fs::read_to_string(&path).await.map_err(|err| {
            AppError::InvalidInput(format!("failed to read {}: {err}", path.display()))
        })?;
        return Ok(Some(data));
    }
    Ok(val)
}

pub async fn read_value(val: Option<String>, file: Option<PathBuf>) -> Result<String, AppError> {
    read_opt_value(val, file)
        .await?
        .ok_or_else(|| AppError::InvalidInput("--content or --content-file is required".into()))
}
