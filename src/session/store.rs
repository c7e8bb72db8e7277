//! The session store: one directory's ordered image collection, its
//! mutation operations, undo history, and JSON persistence.
//!
//! The store is single-threaded and single-writer. Two stores opened on
//! the same directory from independent processes can clobber each other's
//! metadata; the surrounding editor is expected to keep one store per
//! session.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::record::ImageRecord;
use crate::config;
use crate::error::{Error, Result};

/// Owns the ordered image collection for one session directory.
///
/// Every mutating operation pushes an undo snapshot first, then rewrites
/// the full collection to `metadata.json` before returning. Invalid
/// indices on `update_description`, `delete` and `swap` are silent
/// no-ops: the surrounding editor can race ahead of the collection, and
/// a stale index must not kill the session.
#[derive(Debug)]
pub struct SessionStore {
    session_dir: PathBuf,
    metadata_path: PathBuf,
    images: Vec<ImageRecord>,
    undo_stack: VecDeque<Vec<ImageRecord>>,
    undo_depth: usize,
}

impl SessionStore {
    /// Open a store against a session directory.
    ///
    /// Loads `metadata.json` if present; otherwise auto-discovers image
    /// files in the directory. Fails if the directory cannot be read, or
    /// if an existing metadata file cannot be parsed — a corrupt file is
    /// surfaced rather than silently replaced by discovery.
    pub fn open(session_dir: impl AsRef<Path>) -> Result<Self> {
        Self::with_undo_depth(session_dir, config::UNDO_DEPTH)
    }

    /// Like [`SessionStore::open`], with a custom undo history cap.
    pub fn with_undo_depth(session_dir: impl AsRef<Path>, undo_depth: usize) -> Result<Self> {
        let session_dir = session_dir.as_ref().to_path_buf();

        // Probe the directory up front so a missing/unreadable session
        // fails here, not halfway through the first mutation.
        std::fs::read_dir(&session_dir).map_err(|source| Error::SessionDir {
            path: session_dir.clone(),
            source,
        })?;

        let metadata_path = session_dir.join(config::METADATA_FILE);

        let images = match load_metadata(&metadata_path)? {
            Some(images) => images,
            None => discover_images(&session_dir),
        };

        log::trace!(
            "opened session {} with {} records",
            session_dir.display(),
            images.len()
        );

        Ok(SessionStore {
            session_dir,
            metadata_path,
            images,
            undo_stack: VecDeque::new(),
            undo_depth,
        })
    }

    /// The session directory this store was opened against
    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    /// Path of the metadata file this store persists to
    pub fn metadata_path(&self) -> &Path {
        &self.metadata_path
    }

    /// The current ordered collection (read view)
    pub fn records(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Number of undo snapshots currently held
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Append a newly captured image to the end of the session.
    ///
    /// The file is not required to exist yet; existence is checked by
    /// consumers (export, display), not here.
    ///
    /// # Returns
    /// A copy of the record that was appended.
    pub fn add(&mut self, filepath: impl AsRef<Path>) -> Result<ImageRecord> {
        self.push_snapshot();

        let record = ImageRecord::new(
            filepath.as_ref().to_string_lossy().into_owned(),
            self.images.len(),
        );
        self.images.push(record.clone());
        self.save()?;

        Ok(record)
    }

    /// Replace the annotation on the record at `index`.
    /// Out-of-range indices are ignored.
    pub fn update_description(&mut self, index: usize, description: impl Into<String>) -> Result<()> {
        if index >= self.images.len() {
            log::debug!("ignoring description update for out-of-range index {index}");
            return Ok(());
        }

        self.push_snapshot();
        self.images[index].description = description.into();
        self.save()
    }

    /// Remove the record at `index` and renumber the rest.
    /// Out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.images.len() {
            log::debug!("ignoring delete for out-of-range index {index}");
            return Ok(());
        }

        self.push_snapshot();
        self.images.remove(index);
        self.renumber();
        self.save()
    }

    /// Rebuild the collection in the order given by `new_order`: the
    /// record previously at `new_order[k]` ends up at position `k`.
    ///
    /// Indices must be in range (duplicates and omissions are the
    /// caller's responsibility, matching an editor that supplies a full
    /// permutation). An out-of-range index fails before any state is
    /// touched.
    pub fn reorder(&mut self, new_order: &[usize]) -> Result<()> {
        let len = self.images.len();
        if let Some(&bad) = new_order.iter().find(|&&i| i >= len) {
            return Err(Error::IndexOutOfRange { index: bad, len });
        }

        self.push_snapshot();
        let old = std::mem::take(&mut self.images);
        self.images = new_order.iter().map(|&i| old[i].clone()).collect();
        self.renumber();
        self.save()
    }

    /// Exchange the records at positions `i` and `j`.
    /// Out-of-range indices are ignored.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.images.len();
        if i >= len || j >= len {
            log::debug!("ignoring swap of out-of-range indices {i}, {j}");
            return Ok(());
        }

        let mut new_order: Vec<usize> = (0..len).collect();
        new_order.swap(i, j);
        self.reorder(&new_order)
    }

    /// Restore the collection to its state before the most recent
    /// mutation, and persist that state.
    ///
    /// # Returns
    /// `true` if a snapshot existed and was applied, `false` if the
    /// history was empty.
    pub fn undo(&mut self) -> Result<bool> {
        match self.undo_stack.pop_back() {
            Some(snapshot) => {
                self.images = snapshot;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Serialize the full collection to the metadata file.
    ///
    /// The write goes to a temp file in the session directory first and
    /// is renamed over the target, so a reader never observes a partial
    /// file. Called by every mutating operation; also public so a caller
    /// can retry after a failed write.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.images).map_err(|source| Error::Io {
            path: self.metadata_path.clone(),
            source: source.into(),
        })?;

        let tmp_path = self.metadata_path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|source| Error::Io {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &self.metadata_path).map_err(|source| Error::Io {
            path: self.metadata_path.clone(),
            source,
        })?;

        log::trace!("saved {} records to {}", self.images.len(), self.metadata_path.display());
        Ok(())
    }

    /// Push a deep copy of the current collection onto the undo stack,
    /// evicting the oldest snapshot once the cap is reached.
    fn push_snapshot(&mut self) {
        self.undo_stack.push_back(self.images.clone());
        while self.undo_stack.len() > self.undo_depth {
            self.undo_stack.pop_front();
        }
    }

    /// Re-assert the order invariant: every record's `order` equals its
    /// index in the collection.
    fn renumber(&mut self) {
        for (i, record) in self.images.iter_mut().enumerate() {
            record.order = i;
        }
    }
}

/// Parse the metadata file into records.
///
/// Returns `None` when the file is absent or blank (both mean "never
/// saved", and the caller falls back to discovery). A file with actual
/// contents that fail to parse is fatal.
fn load_metadata(path: &Path) -> Result<Option<Vec<ImageRecord>>> {
    if !path.is_file() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(None);
    }

    let mut images: Vec<ImageRecord> =
        serde_json::from_str(&contents).map_err(|source| Error::MetadataCorrupt {
            path: path.to_path_buf(),
            source,
        })?;

    for record in &mut images {
        record.ensure_timestamp();
    }
    Ok(Some(images))
}

/// Rebuild a record list from the directory itself, for sessions whose
/// metadata was never written (e.g. the process died between capture and
/// first save). Recognized image files, ascending by filename, orders
/// 0..N-1. Deterministic, so re-running discovery is idempotent.
fn discover_images(session_dir: &Path) -> Vec<ImageRecord> {
    let mut paths: Vec<PathBuf> = WalkDir::new(session_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| config::is_image_file(p))
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    log::trace!(
        "auto-discovered {} images in {}",
        paths.len(),
        session_dir.display()
    );

    paths
        .into_iter()
        .enumerate()
        .map(|(i, p)| ImageRecord::new(p.to_string_lossy().into_owned(), i))
        .collect()
}
