//! Markdown manual exporter: a title heading followed by one numbered
//! step per surviving record, image embed plus annotation.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::session::ImageRecord;

use super::{DocumentRenderer, DEFAULT_TITLE};

#[derive(Debug, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        MarkdownExporter
    }
}

impl DocumentRenderer for MarkdownExporter {
    fn render(
        &self,
        records: &[ImageRecord],
        title: Option<&str>,
        output: &Path,
    ) -> Result<PathBuf> {
        let title = title.unwrap_or(DEFAULT_TITLE);
        let mut doc = format!("# {title}\n");

        let mut step = 0usize;
        for record in records {
            // The engine keeps records whose file vanished; the document
            // just leaves them out.
            if !Path::new(&record.filepath).exists() {
                log::warn!("skipping missing image {}", record.filepath);
                continue;
            }

            step += 1;
            let _ = write!(doc, "\n## Step {step}\n\n![Step {step}]({})\n", record.filepath);
            if !record.description.is_empty() {
                let _ = write!(doc, "\n{}\n", record.description);
            }
        }

        std::fs::write(output, doc).map_err(|source| Error::Io {
            path: output.to_path_buf(),
            source,
        })?;

        log::info!("exported {step} steps to {}", output.display());
        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(filepath: &str, description: &str) -> ImageRecord {
        let mut rec = ImageRecord::new(filepath, 0);
        rec.description = description.to_string();
        rec
    }

    #[test]
    fn writes_title_steps_and_descriptions() {
        let dir = TempDir::new().unwrap();
        let img = dir.path().join("shot.png");
        std::fs::write(&img, b"png").unwrap();

        let records = vec![record(img.to_str().unwrap(), "Launch app")];
        let output = dir.path().join("manual.md");
        MarkdownExporter::new()
            .render(&records, Some("Getting Started"), &output)
            .unwrap();

        let doc = std::fs::read_to_string(&output).unwrap();
        assert!(doc.starts_with("# Getting Started\n"));
        assert!(doc.contains("## Step 1"));
        assert!(doc.contains("Launch app"));
    }

    #[test]
    fn missing_images_are_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("here.png");
        std::fs::write(&present, b"png").unwrap();

        let records = vec![
            record("/nowhere/gone.png", "Vanished"),
            record(present.to_str().unwrap(), "Still here"),
        ];
        let output = dir.path().join("manual.md");
        MarkdownExporter::new().render(&records, None, &output).unwrap();

        let doc = std::fs::read_to_string(&output).unwrap();
        assert!(doc.starts_with(&format!("# {DEFAULT_TITLE}\n")));
        assert!(!doc.contains("Vanished"));
        assert!(doc.contains("## Step 1"));
        assert!(doc.contains("Still here"));
        assert!(!doc.contains("## Step 2"));
    }

    #[test]
    fn empty_description_emits_no_paragraph() {
        let dir = TempDir::new().unwrap();
        let img = dir.path().join("shot.png");
        std::fs::write(&img, b"png").unwrap();

        let records = vec![record(img.to_str().unwrap(), "")];
        let output = dir.path().join("manual.md");
        MarkdownExporter::new().render(&records, None, &output).unwrap();

        let doc = std::fs::read_to_string(&output).unwrap();
        assert!(doc.trim_end().ends_with(&format!("![Step 1]({})", img.display())));
    }
}
