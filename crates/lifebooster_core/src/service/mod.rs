//! Application services above the pure reducers.
//!
//! # Responsibility
//! - Own the current document and the store it persists to.
//! - Keep FFI and CLI hosts decoupled from storage details.

pub mod life_session;

pub use life_session::LifeSession;
