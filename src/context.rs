use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Deadline and cancellation state of a call.
///
/// Resource handles never look inside a context; they hand it to the flat
/// client, which checks it before dispatching and then passes it on to the
/// transport.
#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancellations: Vec<Arc<AtomicBool>>,
}

impl Context {
    /// Returns an empty context: no deadline, never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a child context that expires at `deadline` or at the parent's
    /// deadline, whichever comes first.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(parent) => parent.min(deadline),
            None => deadline,
        };

        Self {
            deadline: Some(deadline),
            cancellations: self.cancellations.clone(),
        }
    }

    /// Returns a child context together with a handle that cancels it.
    ///
    /// Cancelling the child doesn't affect the parent, but cancelling the
    /// parent cancels every child derived from it.
    pub fn with_cancel(&self) -> (Self, Canceller) {
        let flag = Arc::new(AtomicBool::new(false));
        let mut cancellations = self.cancellations.clone();

        cancellations.push(Arc::clone(&flag));

        let this = Self {
            deadline: self.deadline,
            cancellations,
        };

        (this, Canceller { flag })
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.deadline
            .map_or(false, |deadline| Instant::now() >= deadline)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellations
            .iter()
            .any(|flag| flag.load(Ordering::SeqCst))
    }
}

#[derive(Clone, Debug)]
pub struct Canceller {
    flag: Arc<AtomicBool>,
}

impl Canceller {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}
