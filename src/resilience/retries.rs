//! Retry budget for connection establishment.
//!
//! # States
//! - Attempting: `connect` is being called
//! - Exhausted: the budget hit zero, backoff sleeping begins
//!
//! # State Transitions
//! ```text
//! required:              failure → Backoff (budget untouched)
//! remaining > 1:         failure → Retry (remaining - 1)
//! remaining reaches 0:   failure → Exhausted (first time), Backoff afterwards
//! ```

/// What to do after a failed connect attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Attempt again immediately.
    Retry,
    /// The budget just ran out. Sleep the fallback interval before the next attempt.
    Exhausted,
    /// Sleep the fallback interval before the next attempt.
    Backoff,
}

/// Tracks the remaining retry budget of one establishment attempt.
#[derive(Debug, Clone)]
pub struct RetryBudget {
    required: bool,
    remaining: u32,
    exhausted: bool,
    failures: u64,
}

impl RetryBudget {
    /// Create a budget of `retries` immediate retries.
    ///
    /// A required budget is never consumed; every failure backs off.
    pub fn new(required: bool, retries: u32) -> Self {
        Self {
            required,
            remaining: retries,
            exhausted: false,
            failures: 0,
        }
    }

    /// Record a failed attempt and decide how to continue.
    pub fn on_failure(&mut self) -> Decision {
        self.failures += 1;

        if self.required {
            return Decision::Backoff;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return Decision::Retry;
        }

        if self.exhausted {
            Decision::Backoff
        } else {
            self.exhausted = true;
            Decision::Exhausted
        }
    }

    /// Retries left before backoff sleeping begins.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the budget has run out at least once.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Failures recorded so far.
    pub fn failures(&self) -> u64 {
        self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries_immediately_until_budget_runs_out() {
        let mut budget = RetryBudget::new(false, 3);

        assert_eq!(budget.on_failure(), Decision::Retry);
        assert_eq!(budget.remaining(), 2);
        assert_eq!(budget.on_failure(), Decision::Retry);
        assert_eq!(budget.on_failure(), Decision::Exhausted);
        assert!(budget.is_exhausted());
    }

    #[test]
    fn test_keeps_backing_off_after_exhaustion() {
        let mut budget = RetryBudget::new(false, 1);

        assert_eq!(budget.on_failure(), Decision::Exhausted);
        for _ in 0..5 {
            assert_eq!(budget.on_failure(), Decision::Backoff);
        }
        assert_eq!(budget.remaining(), 0);
        assert_eq!(budget.failures(), 6);
    }

    #[test]
    fn test_zero_retries_exhausts_on_first_failure() {
        let mut budget = RetryBudget::new(false, 0);
        assert!(!budget.is_exhausted());

        assert_eq!(budget.on_failure(), Decision::Exhausted);
    }

    #[test]
    fn test_required_never_consumes_budget() {
        let mut budget = RetryBudget::new(true, 2);

        for _ in 0..10 {
            assert_eq!(budget.on_failure(), Decision::Backoff);
        }
        assert_eq!(budget.remaining(), 2);
        assert!(!budget.is_exhausted());
        assert_eq!(budget.failures(), 10);
    }
}
