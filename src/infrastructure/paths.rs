//! Sandbox path locations.

use std::path::PathBuf;

/// File name of the OTLP trace export.
pub const TRACE_FILE_NAME: &str = "zshelf-otlp.json";

/// Returns the zshelf data directory, `/host/.local/share/zellij/zshelf`.
///
/// `/host` points to the cwd of the last focused terminal (or where Zellij was
/// started), which is normally the user's home directory.
///
/// ```
/// use zshelf::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zshelf"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zshelf")
}

/// Returns the path traces are exported to.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}
