// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stored post images on the local filesystem.

use std::path::{Component, Path, PathBuf};

/// Removes post images stored below a root directory.
#[derive(Clone, Debug)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a stored image URL to a path under the root.
    ///
    /// Only plain relative paths are accepted.
    pub fn resolve(&self, image_url: &str) -> Result<PathBuf, ImageError> {
        let relative = Path::new(image_url.trim_start_matches("./"));
        let is_plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if image_url.is_empty() || !is_plain {
            return Err(ImageError::InvalidPath(image_url.to_string()));
        }

        Ok(self.root.join(relative))
    }

    /// Delete the file behind `image_url`.
    pub async fn remove(&self, image_url: &str) -> Result<(), ImageError> {
        let path = self.resolve(image_url)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| ImageError::Io(path.display().to_string(), e))?;
        tracing::debug!(path = %path.display(), "Image removed");
        Ok(())
    }

    /// Fire-and-forget removal. Failures are logged, never returned.
    pub fn clear_image(&self, image_url: &str) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        let image_url = image_url.to_string();
        tokio::spawn(async move {
            if let Err(e) = store.remove(&image_url).await {
                tracing::warn!(error = %e, image_url = %image_url, "Failed to clear image");
            }
        })
    }
}

/// Errors from image file operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Image path is not a relative path under the image root: {0}")]
    InvalidPath(String),

    #[error("Failed to remove {0}: {1}")]
    Io(String, #[source] std::io::Error),
}
