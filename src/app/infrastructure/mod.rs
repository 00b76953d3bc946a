//! Infrastructure layer - external integrations and utilities.
//!
//! - FLTK buffer utilities
//! - Error types

pub mod buffer;
pub mod error;
