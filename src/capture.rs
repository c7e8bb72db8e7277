//! The capture seam.
//!
//! Actual screen grabbing lives outside this crate; the recorder only
//! needs "capture one frame, hand back its path". Frame naming policy
//! lives here so every capture backend writes the same filenames.

use std::path::PathBuf;

use chrono::Local;

use crate::config;
use crate::error::Result;

/// Anything that can produce one captured frame on disk.
pub trait CaptureSource {
    /// Capture a single frame and return the path it was written to.
    fn capture(&mut self) -> Result<PathBuf>;
}

/// Filename for the `counter`-th captured frame:
/// `0000_20250101_120000.png`. The counter prefix keeps lexicographic
/// order equal to capture order, which auto-discovery relies on.
pub fn frame_filename(counter: u32) -> String {
    format!(
        "{counter:04}_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        config::CAPTURE_FORMAT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_filenames_sort_in_capture_order() {
        let a = frame_filename(0);
        let b = frame_filename(1);
        let c = frame_filename(12);
        assert!(a < b);
        assert!(b < c);
        assert!(a.starts_with("0000_"));
        assert!(a.ends_with(".png"));
    }
}
