//! CineSpace Library
//!
//! Query engine for the CineSpace movie catalog: ranked search, category
//! listings, filters and pagination over a static movie data file.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
