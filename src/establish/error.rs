//! Establishment errors.

use std::error::Error as StdError;
use std::fmt::Write;

use thiserror::Error;

/// Errors surfaced by `establish`.
///
/// Connect failures are normally absorbed by the retry loop. They only reach
/// the caller when the policy opts into [`Exhaustion::Fail`](crate::Exhaustion::Fail).
#[derive(Debug, Error)]
pub enum EstablishError<E: StdError + 'static> {
    /// The retry budget ran out.
    #[error("source unavailable after {attempts} attempts")]
    Exhausted {
        attempts: u64,
        #[source]
        last: E,
    },
}

impl<E: StdError + 'static> EstablishError<E> {
    /// The last connect error observed.
    pub fn last_error(&self) -> &E {
        match self {
            EstablishError::Exhausted { last, .. } => last,
        }
    }
}

/// Render an error with its full source chain, one cause per line.
pub fn report(error: &(dyn StdError + 'static)) -> String {
    let mut out = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        let _ = write!(out, "\n  caused by: {}", inner);
        cause = inner.source();
    }
    out
}
