//! Counting permit pool bounding concurrent evaluator tasks.

use parking_lot::{Condvar, Mutex};

/// A fixed-capacity permit pool.
///
/// `acquire` blocks while every permit is held; dropping the returned
/// [`Permit`] frees a slot and wakes at most one waiter. No fairness is
/// promised beyond "some blocked acquirer proceeds when a slot frees".
#[derive(Debug)]
pub struct ConcurrencyLimiter {
    capacity: usize,
    in_use: Mutex<usize>,
    freed: Condvar,
}

impl ConcurrencyLimiter {
    /// Capacity must be at least 1; a zero-capacity pool would block the
    /// first acquirer forever.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "limiter capacity must be at least 1");
        Self {
            capacity,
            in_use: Mutex::new(0),
            freed: Condvar::new(),
        }
    }

    /// Blocks until a permit is free, then claims it.
    pub fn acquire(&self) -> Permit<'_> {
        let mut in_use = self.in_use.lock();
        while *in_use >= self.capacity {
            self.freed.wait(&mut in_use);
        }
        *in_use += 1;
        Permit { limiter: self }
    }

    /// Permits currently held. Instrumentation only.
    pub fn in_use(&self) -> usize {
        *self.in_use.lock()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn release(&self) {
        let mut in_use = self.in_use.lock();
        *in_use -= 1;
        drop(in_use);
        self.freed.notify_one();
    }
}

/// RAII handle for one limiter slot.
#[derive(Debug)]
pub struct Permit<'a> {
    limiter: &'a ConcurrencyLimiter,
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.limiter.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn tracks_permits_in_use() {
        let limiter = ConcurrencyLimiter::new(2);
        assert_eq!(limiter.in_use(), 0);

        let first = limiter.acquire();
        let second = limiter.acquire();
        assert_eq!(limiter.in_use(), 2);

        drop(first);
        assert_eq!(limiter.in_use(), 1);
        drop(second);
        assert_eq!(limiter.in_use(), 0);
    }

    #[test]
    fn concurrent_holders_never_exceed_capacity() {
        let limiter = ConcurrencyLimiter::new(3);
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    let _permit = limiter.acquire();
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(2));
                    active.fetch_sub(1, Ordering::SeqCst);
                });
            }
        });

        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert_eq!(limiter.in_use(), 0);
    }

    #[test]
    fn blocked_acquirer_proceeds_after_release() {
        let limiter = ConcurrencyLimiter::new(1);
        let held = limiter.acquire();

        thread::scope(|scope| {
            let waiter = scope.spawn(|| {
                let _permit = limiter.acquire();
            });

            thread::sleep(Duration::from_millis(20));
            assert!(!waiter.is_finished());

            drop(held);
        });

        assert_eq!(limiter.in_use(), 0);
    }

    #[test]
    #[should_panic(expected = "capacity must be at least 1")]
    fn zero_capacity_is_rejected() {
        ConcurrencyLimiter::new(0);
    }
}
