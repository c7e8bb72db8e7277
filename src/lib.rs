//! shotbook — turn captured screenshots into step-by-step manuals.
//!
//! The core is [`session::SessionStore`]: one session directory's
//! ordered image records, their mutation operations, snapshot-stack
//! undo, and JSON persistence. Capture and input detection plug in at
//! the [`capture::CaptureSource`] / [`trigger::Debouncer`] seams; the
//! [`export`] module turns the edited list into a document.

pub mod capture;
pub mod config;
pub mod error;
pub mod export;
pub mod recorder;
pub mod session;
pub mod trigger;

pub use error::{Error, Result};
pub use session::{ImageRecord, SessionStore};
