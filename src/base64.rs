//! Password encoding for the login script.
//!
//! File Station expects the password as standard base64 (with padding) in
//! the `pwd` query parameter. This is an encoding the API requires, not a
//! protection of the secret.

use base64::{Engine, engine::general_purpose};

/// Encode a password the way `wfm2Login.cgi` expects it.
///
/// # Example
/// ```
/// use filestation::base64::encode_password;
/// assert_eq!(encode_password("admin"), "YWRtaW4=");
/// ```
pub fn encode_password(password: &str) -> String {
    general_purpose::STANDARD.encode(password.as_bytes())
}
