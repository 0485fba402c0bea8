//! Folder creation and deletion.

use tracing::debug;

use super::utils::{path_segments, split_path};
use crate::api::{ApiRequest, StatusCode};
use crate::error::{FileStationError, Result};
use crate::fs::StatusOnlyResponse;
use crate::session::Session;

impl Session {
    /// Create a new folder. The parent directory must exist.
    ///
    /// # Returns
    /// `true` if the folder was created, `false` if it already existed
    pub async fn create_folder(&self, path: &str) -> Result<bool> {
        let (parent, name) = split_path(path);
        if name == "/" || parent == "." {
            return Err(FileStationError::InvalidPath(path.to_string()));
        }

        let request = ApiRequest::util("createdir")
            .param("dest_path", &parent)
            .param("dest_folder", &name);

        let response: StatusOnlyResponse = self.api().request(&request).await?;
        let status = StatusCode::from(response.status);

        if status.is_success() {
            debug!(path = %path, "created folder");
            Ok(true)
        } else if status.is_already_exists() {
            Ok(false)
        } else {
            Err(FileStationError::status(response.status))
        }
    }

    /// Create a folder and any missing parent directories.
    ///
    /// `path` must be absolute and lie inside a share (`/share/folder` or
    /// deeper). Ancestors created before a failure are left in place.
    ///
    /// # Returns
    /// Number of folders actually created
    pub async fn ensure_folder(&self, path: &str) -> Result<usize> {
        if !path.replace('\\', "/").starts_with('/') {
            return Err(FileStationError::InvalidPath(format!(
                "path does not begin with a slash: {}",
                path
            )));
        }

        let segments = path_segments(path);
        if segments.len() < 2 {
            return Err(FileStationError::InvalidPath(format!(
                "path is not a subfolder of a share: {}",
                path
            )));
        }

        if self.stat(path).await?.is_some() {
            return Ok(0);
        }

        let mut created = 0;
        for depth in 2..=segments.len() {
            let sub_path = format!("/{}", segments[..depth].join("/"));

            match self.create_folder(&sub_path).await {
                Ok(true) => created += 1,
                Ok(false) => {}
                Err(source) => {
                    return Err(FileStationError::FolderCreation {
                        path: sub_path,
                        created,
                        source: Box::new(source),
                    });
                }
            }
        }

        Ok(created)
    }

    /// Delete a file or folder, moving it to the recycle bin if enabled.
    ///
    /// # Returns
    /// `true` if deleted, `false` if there was nothing to delete
    pub async fn delete_file(&self, path: &str) -> Result<bool> {
        self.delete_file_internal(path, false).await
    }

    /// Delete a file or folder permanently, bypassing the recycle bin.
    pub async fn delete_file_no_recycle_bin(&self, path: &str) -> Result<bool> {
        self.delete_file_internal(path, true).await
    }

    async fn delete_file_internal(&self, path: &str, force: bool) -> Result<bool> {
        let (dir, name) = split_path(path);
        if name == "/" || dir == "." {
            return Err(FileStationError::InvalidPath(path.to_string()));
        }

        let request = ApiRequest::util("delete")
            .param("path", &dir)
            .param("file_name", &name)
            .param("file_total", 1)
            .param("force", u8::from(force));

        let response: StatusOnlyResponse = self.api().request(&request).await?;

        match StatusCode::from(response.status) {
            StatusCode::Success => {
                debug!(path = %path, force, "deleted");
                Ok(true)
            }
            // 0 is what the server answers for a missing file
            StatusCode::Fail | StatusCode::FileNotExist => Ok(false),
            _ => Err(FileStationError::status(response.status)),
        }
    }
}
