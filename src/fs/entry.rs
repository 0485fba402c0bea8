//! Listing entries returned by File Station.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Deserializer};

use super::privilege::Privilege;

/// A file or folder as returned by `get_list` and `stat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    /// Entry name (no directory part)
    #[serde(rename = "filename", default)]
    pub name: String,
    /// Whether the entry exists (only meaningful for `stat`)
    #[serde(rename = "exist", default, deserialize_with = "lenient_bool")]
    pub exists: bool,
    #[serde(rename = "isfolder", default, deserialize_with = "lenient_bool")]
    pub is_folder: bool,
    /// File size in bytes (0 for folders)
    #[serde(rename = "filesize", default, deserialize_with = "lenient_u64")]
    pub size: u64,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub group: String,
    // the vendor really spells it with two m's
    #[serde(rename = "iscommpressed", default, deserialize_with = "lenient_bool")]
    pub is_compressed: bool,
    /// Octal privilege string, e.g. "755"
    #[serde(rename = "privilege", default, deserialize_with = "lenient_string")]
    pub privilege_str: String,
    #[serde(rename = "privilege_ex", default, deserialize_with = "lenient_i64")]
    pub privilege_ex: i64,
    #[serde(rename = "filetype", default, deserialize_with = "lenient_i64")]
    pub file_type: i64,
    /// Modification time (Unix epoch seconds)
    #[serde(rename = "epochmt", default, deserialize_with = "lenient_i64")]
    pub modified_epoch: i64,
    #[serde(rename = "sticky_bit", default, deserialize_with = "lenient_bool")]
    pub has_sticky_bit: bool,
    #[serde(rename = "encrypt_folder", default, deserialize_with = "lenient_bool")]
    pub is_folder_encrypted: bool,
    #[serde(rename = "projection_type", default, deserialize_with = "lenient_i64")]
    pub projection_type: i64,
    /// Full path (computed from the query, never sent by the server)
    #[serde(skip)]
    pub(crate) full_path: String,
}

impl FileEntry {
    /// Get the full path of this entry.
    pub fn path(&self) -> &str {
        &self.full_path
    }

    pub fn is_file(&self) -> bool {
        !self.is_folder
    }

    /// Parsed privilege, [`Privilege::INVALID`] when the listing has none.
    pub fn privilege(&self) -> Privilege {
        Privilege::from_octal(&self.privilege_str)
    }

    /// Modification time.
    pub fn modified(&self) -> SystemTime {
        if self.modified_epoch >= 0 {
            UNIX_EPOCH + Duration::from_secs(self.modified_epoch as u64)
        } else {
            UNIX_EPOCH - Duration::from_secs(self.modified_epoch.unsigned_abs())
        }
    }
}

/// A top-level share as returned by `get_tree`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShareEntry {
    /// Share path, e.g. "/Public"
    #[serde(rename = "id", default)]
    pub path: String,
    #[serde(default)]
    pub cls: String,
    /// Display name
    #[serde(default)]
    pub text: String,
    #[serde(rename = "iconCls", default)]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recycle_bin: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recycle_folder: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub max_item_limit: i64,
    #[serde(rename = "real_total", default, deserialize_with = "lenient_i64")]
    pub item_count: i64,
}

/// One page of a directory listing (body of `get_list` and `stat`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileList {
    /// Only present on failures
    #[serde(default)]
    pub status: Option<i64>,
    /// Number of entries in the directory, across all pages
    #[serde(default, deserialize_with = "lenient_i64")]
    pub real_total: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub acl: i64,
    #[serde(rename = "is_acl_enable", default, deserialize_with = "lenient_bool")]
    pub is_acl_enabled: bool,
    #[serde(rename = "is_winacl_enable", default, deserialize_with = "lenient_bool")]
    pub is_winacl_enabled: bool,
    #[serde(rename = "datas", default)]
    pub entries: Vec<FileEntry>,
}

/// Body of calls that only report a status (`createdir`, `delete`, logout).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatusOnlyResponse {
    #[serde(deserialize_with = "lenient_i64")]
    pub status: i64,
}

/// Numbers arrive as JSON numbers, numeric strings or empty strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => Ok(n),
        NumberOrString::Float(f) => Ok(f as i64),
        NumberOrString::Bool(b) => Ok(b as i64),
        NumberOrString::Null => Ok(0),
        NumberOrString::Str(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0);
            }
            s.parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid number: {}", s)))
        }
    }
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let n = lenient_i64(deserializer)?;
    u64::try_from(n).map_err(|_| serde::de::Error::custom(format!("negative size: {}", n)))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(lenient_i64(deserializer)? != 0)
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => n.to_string(),
        NumberOrString::Float(f) => f.to_string(),
        NumberOrString::Str(s) => s,
        NumberOrString::Bool(b) => b.to_string(),
        NumberOrString::Null => String::new(),
    })
}
