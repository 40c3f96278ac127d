//! Weight table and cost evaluation.
//!
//! All constraints are soft: hard violations carry large weights rather
//! than rejecting a candidate, so the annealer can route around them.

mod evaluator;
mod weights;

pub use evaluator::CostEvaluator;
pub use weights::Weights;
