//! Filesystem types and operations.

mod entry;
mod operations;
mod privilege;

pub(crate) use entry::StatusOnlyResponse;
pub use entry::{FileEntry, FileList, ShareEntry};
pub use operations::DEFAULT_PAGE_SIZE;
pub use privilege::{Access, Privilege, PrivilegeBits};
