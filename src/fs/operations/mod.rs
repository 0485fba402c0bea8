//! Filesystem operations split into focused modules.

mod browse;
mod dir_ops;
mod utils;

pub use browse::DEFAULT_PAGE_SIZE;
