//! Search orchestration: fan bounded evaluator tasks out over the slices,
//! fan their partial results in, sort once everything has reported.

use std::thread;

use crossbeam::channel;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::aggregator;
use crate::core::config::SearchConfig;
use crate::core::evaluator;
use crate::core::limiter::ConcurrencyLimiter;
use crate::core::partitioner::SlicePlan;
use crate::{PrimehuntError, Result};

/// One full prime search over `[0, range)`.
///
/// The limiter and result channel are owned per search rather than being
/// process globals, so independent searches can run side by side.
pub struct PrimeSearch {
    config: SearchConfig,
    limiter: ConcurrencyLimiter,
}

impl PrimeSearch {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let limiter = ConcurrencyLimiter::new(config.resolved_concurrency());
        Ok(Self { config, limiter })
    }

    /// The permit pool bounding this search's evaluator tasks.
    pub fn limiter(&self) -> &ConcurrencyLimiter {
        &self.limiter
    }

    /// Runs the search to completion and returns the discovered primes in
    /// ascending order. No partial results are exposed before the end.
    pub fn run(&self) -> Result<Vec<u64>> {
        let candidates: Vec<u64> = (0..self.config.range).collect();
        let slice_size = usize::try_from(self.config.slice_size).map_err(|_| {
            PrimehuntError::Config(format!(
                "slice size {} does not fit this platform's address space",
                self.config.slice_size
            ))
        })?;
        let plan = SlicePlan::new(candidates.len(), slice_size);

        info!(
            range = self.config.range,
            slice_size = self.config.slice_size,
            slices = plan.slice_count(),
            concurrency = self.limiter.capacity(),
            "starting prime search"
        );

        let aggregate = self.dispatch(&candidates, plan)?;
        Ok(finalize(aggregate))
    }

    /// Dispatches one evaluator task per slice under the permit pool and
    /// joins the single aggregation task once every slice has reported.
    ///
    /// Only the aggregation task ever touches the aggregate collection;
    /// evaluator tasks hand their partials over the channel and exit.
    fn dispatch(&self, candidates: &[u64], plan: SlicePlan) -> Result<Vec<u64>> {
        let (sender, receiver) = channel::unbounded();

        thread::scope(|scope| {
            let collector = scope.spawn(move || aggregator::collect(receiver, plan.slice_count()));

            for bounds in plan.bounds() {
                let permit = self.limiter.acquire();
                let slice = &candidates[bounds.clone()];
                let sender = sender.clone();

                debug!(start = bounds.start, end = bounds.end, "slice dispatched");
                scope.spawn(move || {
                    let partial = evaluator::find_primes(slice);
                    drop(permit);
                    // A failed send means the collector already exited; the
                    // collector reports that condition itself.
                    let _ = sender.send(partial);
                });
            }
            drop(sender);

            collector
                .join()
                .map_err(|_| PrimehuntError::Worker("aggregation task panicked".to_string()))?
        })
    }
}

/// Full ascending sort of the aggregate. Unstable parallel sort; only the
/// final ordering is part of the contract.
fn finalize(mut aggregate: Vec<u64>) -> Vec<u64> {
    aggregate.par_sort_unstable();
    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finalize_sorts_ascending() {
        assert_eq!(finalize(vec![11, 2, 7, 3, 5]), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn finalize_handles_empty_aggregate() {
        assert_eq!(finalize(Vec::new()), Vec::<u64>::new());
    }
}
