//! # Caliber Core
//!
//! Portal business logic, free of infrastructure.
//!
//! This crate contains:
//! - Fan-out/fan-in aggregation and the two-phase mutation driver
//! - Port interfaces (traits) for the REST backend and session storage
//! - The note feed, calendar board and session services
//!
//! ## Architecture Principles
//! - Only depends on `caliber-domain`
//! - No HTTP, file or platform code
//! - All external effects via traits

pub mod calendar;
pub mod notes;
pub mod session;
pub mod sync;

pub use calendar::{CalendarApi, CalendarBoard};
pub use notes::{NoteApi, NoteFeed};
pub use session::{SessionContext, SessionService, SessionStore, UserApi};
pub use sync::{
    aggregate, apply_two_phase, FetchFuture, ListPublisher, MutationTarget, PhaseOutcome,
    Publisher,
};
