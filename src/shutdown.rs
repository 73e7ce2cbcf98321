//! Session-wide cancellation.
//!
//! One `Shutdown` is shared by the input poller, the spawner and the
//! simulation loop.  Cancelling wakes every waiter at once.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Paces a periodic task.
pub trait Pacer {
    /// Block for one `period`.  Returns `false` when the task should stop
    /// instead of running another round.
    fn wait(&self, period: Duration) -> bool;
}

#[derive(Debug, Default)]
pub struct Shutdown {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    fn flag(&self) -> MutexGuard<'_, bool> {
        self.cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn cancel(&self) {
        let mut cancelled = self.flag();
        if !*cancelled {
            *cancelled = true;
            log::debug!("shutdown requested");
        }
        self.wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.flag()
    }
}

impl Pacer for Shutdown {
    fn wait(&self, period: Duration) -> bool {
        let deadline = Instant::now() + period;
        let mut cancelled = self.flag();
        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            cancelled = self
                .wake
                .wait_timeout(cancelled, deadline - now)
                .map(|(guard, _)| guard)
                .unwrap_or_else(|poisoned| poisoned.into_inner().0);
        }
        false
    }
}
