//! Shared test helpers for `caliber-core` integration tests.
//!
//! In-memory implementations of the core ports so tests can focus on
//! behaviour instead of transport.
#![allow(dead_code)]

pub mod calendar;
pub mod notes;
pub mod session;
