//! Wire and configuration models backing the domain layer.

pub mod config;
pub mod movie;
