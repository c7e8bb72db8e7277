//! Recording orchestration: input trigger -> debounce -> capture ->
//! record. The input hooks themselves are external; they just call
//! [`Recorder::on_event`] for every detected interaction.

use std::path::PathBuf;

use crate::capture::CaptureSource;
use crate::error::Result;
use crate::session::{ImageRecord, SessionStore};
use crate::trigger::Debouncer;

/// Ties a capture backend to a session store behind a debounce gate.
pub struct Recorder<S: CaptureSource> {
    store: SessionStore,
    source: S,
    debouncer: Debouncer,
}

impl<S: CaptureSource> Recorder<S> {
    pub fn new(store: SessionStore, source: S, debouncer: Debouncer) -> Self {
        Recorder {
            store,
            source,
            debouncer,
        }
    }

    /// Handle one detected interaction. Captures a frame and appends it
    /// to the session unless the event falls inside the debounce window.
    ///
    /// # Returns
    /// The new record when a capture happened, `None` when debounced.
    pub fn on_event(&mut self) -> Result<Option<ImageRecord>> {
        if !self.debouncer.should_trigger() {
            return Ok(None);
        }

        let frame: PathBuf = self.source.capture()?;
        log::info!("captured frame {}", frame.display());
        let record = self.store.add(&frame)?;
        Ok(Some(record))
    }

    /// The session store being recorded into
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Finish recording and hand the store back for editing/export.
    pub fn into_store(self) -> SessionStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::frame_filename;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Capture backend that writes numbered placeholder files.
    struct FakeCapture {
        dir: PathBuf,
        counter: u32,
    }

    impl FakeCapture {
        fn new(dir: &Path) -> Self {
            FakeCapture {
                dir: dir.to_path_buf(),
                counter: 0,
            }
        }
    }

    impl CaptureSource for FakeCapture {
        fn capture(&mut self) -> Result<PathBuf> {
            let path = self.dir.join(frame_filename(self.counter));
            std::fs::write(&path, b"png").map_err(|source| crate::error::Error::Io {
                path: path.clone(),
                source,
            })?;
            self.counter += 1;
            Ok(path)
        }
    }

    #[test]
    fn event_captures_and_appends_a_record() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        let source = FakeCapture::new(dir.path());
        let mut recorder = Recorder::new(store, source, Debouncer::new(Duration::ZERO));

        let record = recorder.on_event().unwrap().expect("should capture");
        assert_eq!(record.order, 0);
        assert!(Path::new(&record.filepath).is_file());
        assert_eq!(recorder.store().len(), 1);
    }

    #[test]
    fn events_inside_the_debounce_window_are_dropped() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        let source = FakeCapture::new(dir.path());
        let mut recorder = Recorder::new(store, source, Debouncer::new(Duration::from_secs(60)));

        assert!(recorder.on_event().unwrap().is_some());
        assert!(recorder.on_event().unwrap().is_none());
        assert_eq!(recorder.store().len(), 1);
    }

    #[test]
    fn recorded_session_is_editable_afterwards() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        let source = FakeCapture::new(dir.path());
        let mut recorder = Recorder::new(store, source, Debouncer::new(Duration::ZERO));

        for _ in 0..3 {
            recorder.on_event().unwrap();
        }

        let mut store = recorder.into_store();
        store.update_description(0, "Launch app").unwrap();
        assert_eq!(store.records()[0].description, "Launch app");
        assert_eq!(store.len(), 3);
    }
}
