//! Session lifecycle: connect, login, logout.

mod auth;
mod session;

pub use session::{ServerInfo, Session};
