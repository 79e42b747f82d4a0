//! Route evaluation: time estimates and route assembly.

mod evaluator;

pub use evaluator::RouteEvaluator;
