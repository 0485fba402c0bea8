//! File Station API client and status codes.

pub mod client;
pub mod status;

pub use client::{ApiClient, ApiRequest, QueryParams, LOGIN_SCRIPT, LOGOUT_SCRIPT, UTIL_SCRIPT};
pub use status::{STATUS_TABLE, StatusCode, StatusInfo, check_status, status_name};
