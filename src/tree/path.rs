//! Znode path joining and normalization
//!
//! Paths are slash-delimited and absolute. Normalization happens on plain
//! strings, so nothing here talks to the server.

/// Normalize a znode path
///
/// This function:
/// 1. Collapses repeated slashes
/// 2. Drops `.` segments and resolves `..` (never above root)
/// 3. Removes trailing slashes (except root)
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }

    if segments.is_empty() {
        return "/".to_string();
    }

    let mut result = String::with_capacity(path.len());
    for segment in segments {
        result.push('/');
        result.push_str(segment);
    }
    result
}

/// Path of the child `name` under `parent`
pub fn join(parent: &str, name: &str) -> String {
    normalize(&format!("{}/{}", parent, name))
}
