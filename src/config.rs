//! Session layout and recording policy.
//!
//! Everything here is policy, not mechanism: where sessions live, what
//! counts as an image file, how deep the undo history goes.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;

/// Name of the per-session metadata file
pub const METADATA_FILE: &str = "metadata.json";

/// File extensions recognized during auto-discovery (lowercase)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Format captured frames are written in
pub const CAPTURE_FORMAT: &str = "png";

/// Default number of undo snapshots kept per session
pub const UNDO_DEPTH: usize = 50;

/// Minimum spacing between two capture triggers
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Get the base directory all sessions are stored under.
///
/// - Linux: ~/.local/share/shotbook/sessions
/// - macOS: ~/Library/Application Support/shotbook/sessions
/// - Windows: %APPDATA%\shotbook\sessions
pub fn sessions_root() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push("shotbook");
    path.push("sessions");
    path
}

/// Create a fresh timestamped session directory under the sessions root.
/// Returns the created path.
pub fn new_session_dir() -> std::io::Result<PathBuf> {
    let name = Local::now().format("session_%Y%m%d_%H%M%S").to_string();
    let dir = sessions_root().join(name);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Check whether a path carries a recognized image extension
pub fn is_image_file(path: &std::path::Path) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
