use std::path::Path;

/// Whether `path` is hidden by platform convention.
///
/// On Windows this reads the `FILE_ATTRIBUTE_HIDDEN` bit; unreadable
/// attributes count as not hidden.
#[cfg(windows)]
pub fn is_hidden(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    std::fs::symlink_metadata(path)
        .map(|metadata| metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

/// Whether `path` is hidden by platform convention.
///
/// Elsewhere a leading dot in the file name marks it hidden.
#[cfg(not(windows))]
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
