//! Data models.

pub mod catalog;
pub mod config;
pub mod movie;
pub mod query;
