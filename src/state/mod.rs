mod persistence;
mod store;

pub use persistence::{load_catalog, load_document, save_catalog, save_document};
pub use store::{JsonFileStore, MemoryStore, PlanStore, ProfileStore};
