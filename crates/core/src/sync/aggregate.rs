//! Fan-out/fan-in aggregation of independent list fetches
//!
//! All fetches are polled concurrently from the calling task, so the
//! accumulator is only touched from one place and needs no lock. Items land
//! in the order their fetch completed; the order inside one fetch's result
//! is kept. A failed fetch contributes nothing and never fails the merge.

use std::fmt::Display;
use std::future::Future;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

/// Boxed fetch, for fanning out over heterogeneous futures.
pub type FetchFuture<'a, T, E> = BoxFuture<'a, Result<Vec<T>, E>>;

/// Run every fetch concurrently and merge the successful results.
///
/// Resolves once every fetch has settled. With no fetches it resolves
/// immediately to an empty list. Callers that need to see individual
/// failures must observe them on the fetches they pass in.
pub async fn aggregate<T, E, I, F>(fetches: I) -> Vec<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<Vec<T>, E>>,
    E: Display,
{
    let mut in_flight: FuturesUnordered<F> = fetches.into_iter().collect();
    let sources = in_flight.len();
    let mut merged = Vec::new();
    let mut failed = 0usize;

    while let Some(settled) = in_flight.next().await {
        match settled {
            Ok(items) => merged.extend(items),
            Err(err) => {
                failed += 1;
                debug!(error = %err, "fetch failed, excluded from merge");
            }
        }
    }

    debug!(sources, failed, items = merged.len(), "aggregation settled");
    merged
}
