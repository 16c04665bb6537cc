// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Ensure directory exists
pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        info!("Created directory: {}", path.display());
    }
    Ok(())
}

/// Read file content as string with proper error context
pub async fn read_file_safe(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write file content, creating parent directories as needed
pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent).await?;
    }

    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    info!("Written file: {}", path.display());
    Ok(())
}
