//! File Station status codes.
//!
//! Every response of the File Station CGI scripts carries an integer
//! `status`. The vendor table lives in [`STATUS_TABLE`]; lookups in both
//! directions go through it.

use crate::error::{FileStationError, Result};

/// File Station status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Generic failure (often "not found", depending on the call)
    Fail,
    /// Success
    Success,
    /// File or folder already exists
    FileExist,
    /// Authentication failure / session expired
    AuthFail,
    /// Permission denied
    PermissionDenied,
    /// File or folder does not exist
    FileNotExist,
    /// File is being extracted
    Extracting,
    /// File IO error
    OpenFileFail,
    /// File Station is not enabled
    Disabled,
    /// Disk quota reached
    QuotaError,
    /// No permission on the source
    SrcPermissionDenied,
    /// No permission on the destination
    DesPermissionDenied,
    /// Illegal file or folder name
    IllegalName,
    /// Too many ISO shares
    ExceedIsoMax,
    /// Too many shares
    ExceedShareMax,
    /// Needs check
    NeedCheck,
    /// Recycle bin not enabled
    RecycleBinNotEnabled,
    /// Password check failed
    CheckPasswordFail,
    /// Media library not enabled
    VideoTcsDisabled,
    /// System busy (database failure)
    DbFail,
    /// Invalid parameters
    ParameterError,
    /// Demo site
    DemoSite,
    /// Transcoding in progress
    TranscodeOngoing,
    /// Source volume error
    SrcVolumeError,
    /// Destination volume error
    DesVolumeError,
    /// Destination does not exist
    DesFileNotExist,
    /// File name too long
    FileNameTooLong,
    /// Folder is encrypted
    FolderEncryption,
    /// Task in progress
    Prepare,
    /// Unsupported media format
    NoSupportMedia,
    /// DLNA media server not enabled
    DlnaQdmsDisabled,
    /// No DLNA renderer found
    RenderNotFound,
    /// SmartLink service busy
    CloudServerError,
    /// Name already exists
    NameDup,
    /// Too many search results
    ExceedSearchMax,
    /// Out of memory
    MemoryError,
    /// Compression in progress
    Compressing,
    /// Too many WebDAV mounts
    ExceedDavMax,
    /// Unmount failed
    UmountFail,
    /// Mount failed
    MountFail,
    /// WebDAV account or password error
    WebdavAccountPasswdError,
    /// WebDAV SSL error
    WebdavSslError,
    /// WebDAV remount error
    WebdavRemountError,
    /// WebDAV host error
    WebdavHostError,
    /// WebDAV timeout
    WebdavTimeoutError,
    /// WebDAV configuration error
    WebdavConfError,
    /// WebDAV base error
    WebdavBaseError,
    /// Code not present in the vendor table
    Unknown,
}

/// One row of the vendor status table.
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo {
    pub code: i64,
    pub status: StatusCode,
    pub name: &'static str,
    /// Other vendor names for the same code
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

const fn row(
    code: i64,
    status: StatusCode,
    name: &'static str,
    description: &'static str,
) -> StatusInfo {
    StatusInfo {
        code,
        status,
        name,
        aliases: &[],
        description,
    }
}

impl StatusInfo {
    const fn aka(self, aliases: &'static [&'static str]) -> Self {
        StatusInfo { aliases, ..self }
    }

    fn is_named(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| *alias == name)
    }
}

/// The vendor status table, one row per code.
pub const STATUS_TABLE: &[StatusInfo] = &[
    row(0, StatusCode::Fail, "WFM2_FAIL", "Operation failed"),
    row(1, StatusCode::Success, "WFM2_SUCCESS", "Success").aka(&["WFM2_DONE"]),
    row(2, StatusCode::FileExist, "WFM2_FILE_EXIST", "File or folder already exists"),
    row(3, StatusCode::AuthFail, "WFM2_AUTH_FAIL", "Session expired"),
    row(4, StatusCode::PermissionDenied, "WFM2_PERMISSION_DENY", "Permission denied"),
    row(5, StatusCode::FileNotExist, "WFM2_FILE_NO_EXIST", "File or folder does not exist")
        .aka(&["WFM2_SRC_FILE_NO_EXIST"]),
    row(6, StatusCode::Extracting, "WFM2_EXTRACTING", "File is being extracted"),
    row(7, StatusCode::OpenFileFail, "WFM2_OPEN_FILE_FAIL", "File IO error"),
    row(8, StatusCode::Disabled, "WFM2_DISABLE", "API is disabled"),
    row(9, StatusCode::QuotaError, "WFM2_QUOTA_ERROR", "Disk quota limit reached"),
    row(10, StatusCode::SrcPermissionDenied, "WFM2_SRC_PERMISSION_DENY", "Permission denied on source"),
    row(11, StatusCode::DesPermissionDenied, "WFM2_DES_PERMISSION_DENY", "Permission denied on destination"),
    row(12, StatusCode::IllegalName, "WFM2_ILLEGAL_NAME", "Illegal name"),
    row(13, StatusCode::ExceedIsoMax, "WFM2_EXCEED_ISO_MAX", "Maximum number of ISO shares reached"),
    row(14, StatusCode::ExceedShareMax, "WFM2_EXCEED_SHARE_MAX", "Maximum number of shares reached"),
    row(15, StatusCode::NeedCheck, "WFM2_NEED_CHECK", "Check required"),
    row(16, StatusCode::RecycleBinNotEnabled, "WFM2_RECYCLE_BIN_NOT_ENABLE", "Recycle bin is not enabled"),
    row(17, StatusCode::CheckPasswordFail, "WFM2_CHECK_PASSWORD_FAIL", "Password required"),
    row(18, StatusCode::VideoTcsDisabled, "WFM2_VIDEO_TCS_DISABLE", "Media library is not enabled"),
    row(19, StatusCode::DbFail, "WFM2_DB_FAIL", "System busy, try again later")
        .aka(&["WFM2_DB_QUERY_FAIL"]),
    row(20, StatusCode::ParameterError, "WFM2_PARAMETER_ERROR", "Parameter error"),
    row(21, StatusCode::DemoSite, "WFM2_DEMO_SITE", "Not available on demo site"),
    row(22, StatusCode::TranscodeOngoing, "WFM2_TRANSCODE_ONGOING", "Transcoding in progress"),
    row(23, StatusCode::SrcVolumeError, "WFM2_SRC_VOLUME_ERROR", "Source volume error"),
    row(24, StatusCode::DesVolumeError, "WFM2_DES_VOLUME_ERROR", "Destination volume error"),
    row(25, StatusCode::DesFileNotExist, "WFM2_DES_FILE_NO_EXIST", "Destination does not exist"),
    row(26, StatusCode::FileNameTooLong, "WFM2_FILE_NAME_TOO_LONG", "File name too long"),
    row(27, StatusCode::FolderEncryption, "WFM2_FOLDER_ENCRYPTION", "Folder is encrypted"),
    row(28, StatusCode::Prepare, "WFM2_PREPARE", "Processing, please wait"),
    row(29, StatusCode::NoSupportMedia, "WFM2_NO_SUPPORT_MEDIA", "Unsupported media format"),
    row(30, StatusCode::DlnaQdmsDisabled, "WFM2_DLNA_QDMS_DISABLE", "DLNA media server is not enabled"),
    row(31, StatusCode::RenderNotFound, "WFM2_RENDER_NOT_FOUND", "No DLNA renderer found"),
    row(32, StatusCode::CloudServerError, "WFM2_CLOUD_SERVER_ERROR", "SmartLink service busy"),
    row(33, StatusCode::NameDup, "WFM2_NAME_DUP", "Name already exists"),
    row(34, StatusCode::ExceedSearchMax, "WFM2_EXCEED_SEARCH_MAX", "Too many search results"),
    row(35, StatusCode::MemoryError, "WFM2_MEMORY_ERROR", "Out of memory"),
    row(36, StatusCode::Compressing, "WFM2_COMPRESSING", "Compression in progress"),
    row(37, StatusCode::ExceedDavMax, "WFM2_EXCEED_DAV_MAX", "Maximum number of WebDAV mounts reached"),
    row(38, StatusCode::UmountFail, "WFM2_UMOUNT_FAIL", "Unmount failed"),
    row(39, StatusCode::MountFail, "WFM2_MOUNT_FAIL", "Mount failed"),
    row(40, StatusCode::WebdavAccountPasswdError, "WFM2_WEBDAV_ACCOUNT_PASSWD_ERROR", "WebDAV account or password error"),
    row(41, StatusCode::WebdavSslError, "WFM2_WEBDAV_SSL_ERROR", "WebDAV SSL error"),
    row(42, StatusCode::WebdavRemountError, "WFM2_WEBDAV_REMOUNT_ERROR", "WebDAV remount error"),
    row(43, StatusCode::WebdavHostError, "WFM2_WEBDAV_HOST_ERROR", "WebDAV host error"),
    row(44, StatusCode::WebdavTimeoutError, "WFM2_WEBDAV_TIMEOUT_ERROR", "WebDAV timeout"),
    row(45, StatusCode::WebdavConfError, "WFM2_WEBDAV_CONF_ERROR", "WebDAV configuration error"),
    row(46, StatusCode::WebdavBaseError, "WFM2_WEBDAV_BASE_ERROR", "WebDAV base error"),
];

impl From<i64> for StatusCode {
    fn from(code: i64) -> Self {
        STATUS_TABLE
            .iter()
            .find(|info| info.code == code)
            .map(|info| info.status)
            .unwrap_or(StatusCode::Unknown)
    }
}

impl StatusCode {
    /// Look up a status by its vendor constant name or one of its aliases.
    pub fn from_name(name: &str) -> Option<StatusCode> {
        STATUS_TABLE
            .iter()
            .find(|info| info.is_named(name))
            .map(|info| info.status)
    }

    fn info(&self) -> Option<&'static StatusInfo> {
        STATUS_TABLE.iter().find(|info| info.status == *self)
    }

    /// The vendor integer for this status, `None` for [`StatusCode::Unknown`].
    pub fn code(&self) -> Option<i64> {
        self.info().map(|info| info.code)
    }

    /// Vendor constant name, e.g. `WFM2_NAME_DUP`.
    pub fn name(&self) -> &'static str {
        self.info().map(|info| info.name).unwrap_or("WFM2_UNKNOWN")
    }

    /// Alternative vendor names, e.g. `WFM2_DONE` for [`StatusCode::Success`].
    pub fn aliases(&self) -> &'static [&'static str] {
        self.info().map(|info| info.aliases).unwrap_or(&[])
    }

    /// Get human-readable description of the status.
    pub fn description(&self) -> &'static str {
        self.info()
            .map(|info| info.description)
            .unwrap_or("Unknown status")
    }

    pub fn is_success(&self) -> bool {
        *self == StatusCode::Success
    }

    /// Both "file exists" (2) and "name duplicated" (33) mean the target is already there.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, StatusCode::FileExist | StatusCode::NameDup)
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            StatusCode::PermissionDenied
                | StatusCode::SrcPermissionDenied
                | StatusCode::DesPermissionDenied
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StatusCode::FileNotExist | StatusCode::DesFileNotExist)
    }
}

/// Render a raw code the way the vendor names it, `WFM2_UNKNOWN:<n>` for unknown codes.
pub fn status_name(code: i64) -> String {
    match StatusCode::from(code) {
        StatusCode::Unknown => format!("WFM2_UNKNOWN:{}", code),
        status => status.name().to_string(),
    }
}

/// Map a raw status code to `Ok(())` on success or a status error.
pub fn check_status(code: i64) -> Result<()> {
    if StatusCode::from(code).is_success() {
        Ok(())
    } else {
        Err(FileStationError::status(code))
    }
}
