//! # noted-core
//!
//! Core types, traits, and configuration for the noted service.
//!
//! This crate provides the data structures and trait definitions that the
//! other noted crates depend on.

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{Error, Result};
pub use models::{Note, UpdateNoteRequest};
pub use traits::NoteRepository;
