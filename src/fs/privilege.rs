//! Unix-style access privileges as reported in file listings.

use std::fmt;

/// A file-system-level access privilege such as `0644`.
///
/// Created with [`Privilege::new`] or parsed from the octal strings found in
/// listings with [`Privilege::from_octal`]. Parsing never fails: empty or
/// malformed input yields [`Privilege::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Privilege(Option<u16>);

/// Read/write/execute flags for one class of users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Access {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

/// Bitwise view of a privilege.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrivilegeBits {
    pub owner: Access,
    pub group: Access,
    pub other: Access,
}

impl Privilege {
    /// Sentinel for missing or unparsable privileges.
    pub const INVALID: Privilege = Privilege(None);

    /// Create a privilege from a numeric mode, e.g. `Privilege::new(0o644)`.
    ///
    /// The setuid, setgid and sticky bits (`0o7000`) are kept and show up as a
    /// fourth octal digit; [`Privilege::bits`] ignores them. Bits above
    /// `0o7777` are dropped.
    pub const fn new(mode: u16) -> Self {
        Privilege(Some(mode & 0o7777))
    }

    /// Parse a string like `"644"` or `"0644"`.
    ///
    /// Anything that is not three or four octal digits yields [`Privilege::INVALID`].
    pub fn from_octal(octal: &str) -> Self {
        if !(3..=4).contains(&octal.len()) || !octal.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
            return Self::INVALID;
        }
        match u16::from_str_radix(octal, 8) {
            Ok(mode) => Self::new(mode),
            Err(_) => Self::INVALID,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The numeric mode, `None` for [`Privilege::INVALID`].
    pub fn mode(&self) -> Option<u16> {
        self.0
    }

    /// Octal representation without a leading zero, e.g. `"644"`, or
    /// `"1755"` when special bits are set.
    ///
    /// Empty for [`Privilege::INVALID`].
    pub fn to_octal(&self) -> String {
        match self.0 {
            Some(mode) => format!("{:03o}", mode),
            None => String::new(),
        }
    }

    /// Split the privilege into owner/group/other flags.
    pub fn bits(&self) -> PrivilegeBits {
        let mode = self.0.unwrap_or(0);
        let has = |mask: u16| mode & mask != 0;
        PrivilegeBits {
            owner: Access {
                read: has(0o400),
                write: has(0o200),
                execute: has(0o100),
            },
            group: Access {
                read: has(0o040),
                write: has(0o020),
                execute: has(0o010),
            },
            other: Access {
                read: has(0o004),
                write: has(0o002),
                execute: has(0o001),
            },
        }
    }
}

impl Default for Privilege {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<&str> for Privilege {
    fn from(octal: &str) -> Self {
        Self::from_octal(octal)
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_octal())
    }
}
