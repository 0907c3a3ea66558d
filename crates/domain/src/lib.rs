//! # Caliber Domain
//!
//! Domain types shared by every Caliber crate.
//!
//! This crate contains:
//! - Portal entities (Note, Trainee, Batch, Subtopic, CalendarEvent, BamUser)
//! - Domain error type and Result alias
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Caliber crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
