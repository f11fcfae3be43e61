//! Derived views recomputed from full collections on every call.
//!
//! # Invariants
//! - Pure functions over borrowed slices; nothing is cached.
//! - Empty inputs produce zeros, never NaN.

pub mod finance;
pub mod productivity;
pub mod summary;
