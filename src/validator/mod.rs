//! Decides whether a node name is safe to turn into a path segment.

/// Longest accepted name, counted in characters
pub const MAX_NAME_LENGTH: usize = 255;

const FORBIDDEN_SEQUENCES: [&str; 9] = ["//", "\\", ":", "*", "?", "\"", "<", ">", "|"];

const RESERVED_DEVICE_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Returns `true` when `name` can be created without escaping its parent
/// directory or colliding with a reserved device name.
pub fn is_valid_path(name: &str) -> bool {
    let name = name.strip_suffix('/').unwrap_or(name).trim();
    if name.is_empty() {
        return false;
    }

    // An absolute name would replace the parent path when joined onto it
    if name.starts_with('/') {
        return false;
    }

    if name.split('/').any(|component| component == "." || component == "..") {
        return false;
    }

    if FORBIDDEN_SEQUENCES.iter().any(|seq| name.contains(seq)) {
        return false;
    }

    let base = name.rsplit('/').next().unwrap_or(name);
    if RESERVED_DEVICE_NAMES
        .iter()
        .any(|reserved| base.eq_ignore_ascii_case(reserved))
    {
        return false;
    }

    name.chars().count() <= MAX_NAME_LENGTH
}
