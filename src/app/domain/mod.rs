//! Domain layer - core data structures and types.
//!
//! - Document
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;

pub use document::Document;
pub use messages::Message;
pub use settings::{AppSettings, FontChoice, ThemeMode};
