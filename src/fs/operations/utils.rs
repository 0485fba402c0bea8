//! Shared path helpers for filesystem operations.
//!
//! File Station paths always use forward slashes, whatever the host OS.

/// Normalize a path: backslashes become slashes, `//`, `.` and trailing
/// slashes are removed, `..` is resolved. Relative paths stay relative.
pub(crate) fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let absolute = path.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            p => parts.push(p),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Split a path into its parent directory and final component.
///
/// `/share/dir/file` gives `("/share/dir", "file")`, `/share` gives `("/", "share")`.
pub(crate) fn split_path(path: &str) -> (String, String) {
    let normalized = normalize_path(path);
    if normalized == "/" {
        return ("/".to_string(), "/".to_string());
    }

    match normalized.rfind('/') {
        Some(0) => ("/".to_string(), normalized[1..].to_string()),
        Some(idx) => (
            normalized[..idx].to_string(),
            normalized[idx + 1..].to_string(),
        ),
        None => (".".to_string(), normalized),
    }
}

/// Join a directory and an entry name.
pub(crate) fn join_path(dir: &str, name: &str) -> String {
    normalize_path(&format!("{}/{}", dir, name))
}

/// Non-empty components of a normalized path.
pub(crate) fn path_segments(path: &str) -> Vec<String> {
    normalize_path(path)
        .split('/')
        .filter(|p| !p.is_empty() && *p != ".")
        .map(str::to_string)
        .collect()
}
