//! Single-writer collection of partial results.

use crossbeam::channel::Receiver;
use tracing::debug;

use crate::{PrimehuntError, Result};

/// Drains exactly `expected` partial results from `receiver` into one
/// aggregate collection.
///
/// This is the only routine that ever mutates the aggregate: evaluator tasks
/// produce and send partials but never touch the shared collection. The loop
/// exits deterministically once every expected contribution has arrived; a
/// channel that disconnects before then means a producer died without
/// reporting, which surfaces as a worker error instead of a hang.
pub fn collect(receiver: Receiver<Vec<u64>>, expected: usize) -> Result<Vec<u64>> {
    let mut aggregate = Vec::new();

    for received in 0..expected {
        let partial = receiver.recv().map_err(|_| {
            PrimehuntError::Worker(format!(
                "result channel closed after {} of {} slices reported",
                received, expected
            ))
        })?;
        debug!(
            received = received + 1,
            expected,
            primes = partial.len(),
            "partial result aggregated"
        );
        aggregate.extend(partial);
    }

    Ok(aggregate)
}
