//! Trainer and quality-control notes

pub mod ports;
pub mod service;

pub use ports::NoteApi;
pub use service::NoteFeed;
