//! Document generation from an edited session.
//!
//! Consumes the ordered record list read-only. Records whose image file
//! has gone missing are skipped with a warning; a half-edited session
//! still exports.

pub mod markdown;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::session::ImageRecord;

/// Title used when the caller does not supply one
pub const DEFAULT_TITLE: &str = "Manual";

/// Renders an ordered record list into a document on disk.
pub trait DocumentRenderer {
    /// Produce a document at `output` from the given records.
    ///
    /// # Returns
    /// The path the document was written to.
    fn render(
        &self,
        records: &[ImageRecord],
        title: Option<&str>,
        output: &Path,
    ) -> Result<PathBuf>;
}

pub use markdown::MarkdownExporter;
