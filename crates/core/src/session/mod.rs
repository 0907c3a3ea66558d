//! Explicit session context for the signed-in user and selected batch

pub mod context;
pub mod ports;
pub mod service;

pub use context::SessionContext;
pub use ports::{SessionStore, UserApi};
pub use service::SessionService;
