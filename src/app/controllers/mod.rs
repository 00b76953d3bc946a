//! Controllers layer - orchestration between the domain, services and UI.
//!
//! - Keyword highlighting orchestration

pub mod highlight;
