//! Session data management:
//! - Image record model (record.rs)
//! - Ordered collection, mutations, undo, persistence (store.rs)

pub mod record;
pub mod store;

pub use record::ImageRecord;
pub use store::SessionStore;
