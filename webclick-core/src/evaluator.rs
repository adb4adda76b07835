//! Evaluate [`Policy`].
use crate::{record::Record, Env, Policy};
use anyhow::Result;
mod default_evaluator;
pub use default_evaluator::DefaultEvaluator;

/// Evaluate [`Policy`].
pub trait Evaluator<E: Env> {
    /// Evaluate [`Policy`] and returns aggregated values as a [`Record`].
    fn evaluate<P: Policy<E>>(&mut self, policy: &mut P) -> Result<Record>;
}
