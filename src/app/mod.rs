//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages)
//! - `controllers/` - Orchestration (HighlightController)
//! - `services/` - Business operations (keyword highlighting, file I/O, text ops)
//! - `infrastructure/` - External integrations (FLTK buffer, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Document, FontChoice, Message, ThemeMode};
pub use infrastructure::buffer::buffer_text_no_leak;
pub use infrastructure::error::{AppError, Result};
pub use services::highlight::{Category, KeywordSet, Mark, MarkSet, Vocabulary};
