//! Two-phase remote mutation
//!
//! Some local edits need two sequential remote calls (move a calendar item,
//! then update its status). The caller applies the edit locally first; the
//! driver then runs phase one and, whatever its outcome, phase two. Nothing
//! is rolled back here: a phase that needs compensation does it itself.

use std::fmt::Display;
use std::future::Future;

use tracing::{debug, warn};

/// How a remote phase settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome<T> {
    /// The phase succeeded, optionally returning a server-confirmed copy.
    Succeeded(Option<T>),
    /// The phase failed with the given message.
    Failed(String),
}

impl<T> PhaseOutcome<T> {
    fn from_result<E: Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(confirmed) => Self::Succeeded(confirmed),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Whether the remote call went through.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Server-confirmed copy, if the phase returned one.
    pub fn confirmed(&self) -> Option<&T> {
        match self {
            Self::Succeeded(confirmed) => confirmed.as_ref(),
            Self::Failed(_) => None,
        }
    }
}

/// A record going through a two-phase update
///
/// Holds the optimistic copy the caller already applied locally and the
/// latest copy a phase confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationTarget<T> {
    pending: T,
    confirmed: Option<T>,
}

impl<T> MutationTarget<T> {
    /// Wrap an optimistically updated record.
    pub fn new(pending: T) -> Self {
        Self { pending, confirmed: None }
    }

    /// The optimistic copy the caller applied locally.
    pub fn pending(&self) -> &T {
        &self.pending
    }

    /// Latest copy a phase confirmed, if any.
    pub fn confirmed(&self) -> Option<&T> {
        self.confirmed.as_ref()
    }

    /// Whether any phase returned a server copy.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed.is_some()
    }

    /// Confirmed copy if any phase returned one, otherwise the optimistic one.
    pub fn current(&self) -> &T {
        self.confirmed.as_ref().unwrap_or(&self.pending)
    }

    /// Consume the target, keeping what [`current`](Self::current) returns.
    pub fn into_current(self) -> T {
        self.confirmed.unwrap_or(self.pending)
    }

    fn confirm(&mut self, value: T) {
        self.confirmed = Some(value);
    }
}

/// Run `phase1`, then `phase2` with phase one's outcome, and apply any
/// confirmed copies to `target`.
///
/// Phase two runs exactly once whether phase one succeeded or failed; a
/// phase-one failure is logged and not retried. When both phases return a
/// confirmed copy, phase two's wins. The returned future fails if and only
/// if phase two fails.
pub async fn apply_two_phase<T, E, P1, F1, P2, F2>(
    mut target: MutationTarget<T>,
    phase1: P1,
    phase2: P2,
) -> Result<MutationTarget<T>, E>
where
    T: Clone,
    E: Display,
    P1: FnOnce() -> F1,
    F1: Future<Output = Result<Option<T>, E>>,
    P2: FnOnce(PhaseOutcome<T>) -> F2,
    F2: Future<Output = Result<Option<T>, E>>,
{
    let first = PhaseOutcome::from_result(phase1().await);
    match &first {
        PhaseOutcome::Succeeded(_) => debug!("first phase succeeded"),
        PhaseOutcome::Failed(message) => {
            warn!(error = %message, "first phase failed, continuing with second phase");
        }
    }

    if let Some(confirmed) = first.confirmed() {
        target.confirm(confirmed.clone());
    }

    if let Some(confirmed) = phase2(first).await? {
        target.confirm(confirmed);
    }

    Ok(target)
}
