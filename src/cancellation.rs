//! Provides a token-based mechanism for graceful cancellation.
//!
//! A repair run honors cancellation only *between* files: decode, detection
//! and repair are pure in-memory operations with no suspension points, so
//! in-flight per-file work always runs to completion before the token is
//! consulted again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A token that signals cancellation to a running repair batch.
///
/// This is a cloneable, thread-safe wrapper around an `Arc<AtomicBool>`.
/// Workers check it before picking up the next file.
///
/// # Examples
///
/// ```
/// use demojibake::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new `CancellationToken` in a non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Signals cancellation.
    ///
    /// All subsequent calls to `is_cancelled()` on this token or any of its
    /// clones will return `true`.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Checks if the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_visible_through_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
