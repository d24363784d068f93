//! Core types and trait definitions for the roster person registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod person;
pub mod status;
pub mod store;

pub use error::{Error, Result};
