#![warn(missing_docs)]
//! Environment contract for click-target environments.
//!
//! An environment ([`Env`]) emits observations ([`Obs`]), receives actions ([`Act`])
//! and returns a [`Step`] object together with a [`Record`](record::Record) at every
//! interaction step. Declared action and observation ranges are described with
//! [`BoxSpace`]. [`DefaultEvaluator`] runs episodes with a [`Policy`] and reports
//! the average return.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};

mod space;
pub use space::BoxSpace;

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
