//! Synchronisation primitives shared by the portal services
//!
//! - [`aggregate`]: fan-out/fan-in merge of independent list fetches
//! - [`Publisher`]: broadcast of whole values to subscribed consumers
//! - [`apply_two_phase`]: two sequential remote calls where the second
//!   always runs

pub mod aggregate;
pub mod publisher;
pub mod two_phase;

pub use aggregate::{aggregate, FetchFuture};
pub use publisher::{ListPublisher, Publisher};
pub use two_phase::{apply_two_phase, MutationTarget, PhaseOutcome};
