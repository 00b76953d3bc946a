//! Services layer - business operations and utilities.
//!
//! - Keyword highlighting
//! - File reading and writing
//! - Text helpers

pub mod file_io;
pub mod highlight;
pub mod text_ops;
