//! Core business logic modules.

pub mod engine;
pub mod loader;
