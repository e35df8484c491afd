//! Utility helpers shared across mdform crates.
//!
//! # Modules
//!
//! - [`keys`]: Field-name and heading-text normalization

pub mod keys;
