//! Bridge crate exposing the LifeBooster core to Flutter.

pub mod api;
