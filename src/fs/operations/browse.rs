//! Share and directory listing.

use tracing::debug;

use super::utils::{join_path, normalize_path, split_path};
use crate::api::{ApiRequest, StatusCode};
use crate::error::{FileStationError, Result};
use crate::fs::entry::{FileEntry, FileList, ShareEntry};
use crate::session::Session;

/// Number of entries requested per `get_list` page.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Surface a failure status embedded in a listing body.
fn check_list_status(list: &FileList) -> Result<()> {
    match list.status {
        Some(code) if !StatusCode::from(code).is_success() => Err(FileStationError::status(code)),
        _ => Ok(()),
    }
}

impl Session {
    /// List the top-level shares.
    pub async fn list_shares(&self) -> Result<Vec<ShareEntry>> {
        let request = ApiRequest::util("get_tree").param("node", "share_root");
        self.api().request(&request).await
    }

    /// List all files and folders of a directory.
    ///
    /// Pages of [`DEFAULT_PAGE_SIZE`] entries are fetched until the listing is
    /// exhausted. Every entry's [`FileEntry::path`] is `path` joined with its name.
    pub async fn list_files(&self, path: &str) -> Result<Vec<FileEntry>> {
        self.list_files_with_page_size(path, DEFAULT_PAGE_SIZE)
            .await
    }

    /// Same as [`Session::list_files`] with a custom page size.
    ///
    /// Pages are requested one after another. If any page fails, the entries
    /// collected so far are dropped and the error is returned.
    pub async fn list_files_with_page_size(
        &self,
        path: &str,
        page_size: usize,
    ) -> Result<Vec<FileEntry>> {
        if page_size == 0 {
            return Err(FileStationError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        let mut entries: Vec<FileEntry> = Vec::new();
        loop {
            let page = self.list_page(path, entries.len(), page_size).await?;
            let received = page.entries.len();
            let total = usize::try_from(page.real_total).unwrap_or(0);
            entries.extend(page.entries);

            // short page, or the server says we have everything
            if received < page_size || (total > 0 && entries.len() >= total) {
                break;
            }
        }

        debug!(path = %path, count = entries.len(), "listed directory");
        Ok(entries)
    }

    /// Fetch a single page of a directory listing.
    ///
    /// # Arguments
    /// * `path` - Directory to list
    /// * `start` - Offset of the first entry
    /// * `limit` - Maximum number of entries
    pub async fn list_page(&self, path: &str, start: usize, limit: usize) -> Result<FileList> {
        let dir = normalize_path(path);
        let request = ApiRequest::util("get_list")
            .param("path", &dir)
            .param("list_mode", "all")
            .param("dir", "ASC")
            .param("limit", limit)
            .param("start", start);

        let mut page: FileList = self.api().request(&request).await?;
        check_list_status(&page)?;

        for entry in &mut page.entries {
            entry.full_path = join_path(&dir, &entry.name);
        }

        Ok(page)
    }

    /// Get information about a file or folder.
    ///
    /// # Returns
    /// `None` if the entry does not exist. Otherwise the entry, with its path
    /// set to `path` as given (slashes normalized only).
    pub async fn stat(&self, path: &str) -> Result<Option<FileEntry>> {
        let (dir, name) = split_path(path);
        let request = ApiRequest::util("stat")
            .param("path", &dir)
            .param("file_name", &name)
            .param("file_total", 1);

        let page: FileList = self.api().request(&request).await?;
        check_list_status(&page)?;

        let Some(mut entry) = page.entries.into_iter().next() else {
            return Ok(None);
        };
        if !entry.exists {
            return Ok(None);
        }

        entry.full_path = path.replace('\\', "/");
        Ok(Some(entry))
    }
}
