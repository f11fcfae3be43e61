//! Core data layer for LifeBooster.
//! Owns the document model, its persistence and every state transition.

pub mod locale;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod service;
pub mod stats;
pub mod store;
pub mod trash;

pub use locale::{detect_default_currency, Environment};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::document::Document;
pub use model::ids::{DayBucket, EntityId};
pub use model::trash::{TrashKey, TrashKind};
pub use model::validation::ValidationError;
pub use reducer::{ReduceError, ReduceResult};
pub use service::LifeSession;
pub use store::{DocumentStore, MemoryDocumentStore, SqliteDocumentStore, StoreError};

/// Health check used by hosts during integration.
pub fn ping() -> &'static str {
    "pong"
}

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
