pub mod aggregator;
pub mod config;
pub mod evaluator;
pub mod limiter;
pub mod partitioner;
pub mod search;
