//! # filestation
//!
//! Rust client library for the QNAP File Station HTTP API.
//!
//! ## Features
//!
//! - **Authentication**: login/logout against `wfm2Login.cgi`, session id
//!   handling, automatic logout of a previous session on re-login.
//! - **Filesystem Operations**:
//!   - List shares and directories (paginated transparently).
//!   - Get file attributes (`stat`).
//!   - Create folders, including missing parents (`ensure_folder`).
//!   - Delete files/folders, with or without the recycle bin.
//! - **Status codes**: the full File Station status table, mapped to typed errors.
//! - **Privileges**: parsing of the octal permission strings found in listings.
//!
//! All paths use forward slashes regardless of the host OS.
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use filestation::{ConfigOptions, Session};
//! use std::time::Duration;
//!
//! # async fn example() -> filestation::Result<()> {
//! let options = ConfigOptions::default()
//!     .with_timeout(Duration::from_secs(30))
//!     .with_accept_invalid_certs(true);
//!
//! let mut session = Session::connect("nas.local:8443", "admin", "secret", Some(options)).await?;
//!
//! for file in session.list_files("/Public").await? {
//!     println!("{} ({} bytes, {})", file.path(), file.size, file.privilege());
//! }
//!
//! let created = session.ensure_folder("/Public/backups/2024/06").await?;
//! println!("created {} folders", created);
//!
//! if session.stat("/Public/old.log").await?.is_some() {
//!     session.delete_file_no_recycle_bin("/Public/old.log").await?;
//! }
//!
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod base64;
pub mod config;
pub mod error;
pub mod fs;
pub mod http;
pub mod session;

// Re-export commonly used types
pub use api::StatusCode;
pub use crate::config::ConfigOptions;
pub use error::{FileStationError, Result};
pub use fs::{Access, FileEntry, FileList, Privilege, PrivilegeBits, ShareEntry};
pub use session::{ServerInfo, Session};
