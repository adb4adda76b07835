//! Declared ranges of actions and observations.
use crate::error::CoreError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A box in `R^n` where every element lies in `[low, high]`.
///
/// The space is declarative: environments do not clip or reject values outside
/// of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpace {
    /// Lower bound of every element.
    pub low: f32,

    /// Upper bound of every element.
    pub high: f32,

    /// Shape of the values in the space.
    pub shape: Vec<usize>,
}

impl BoxSpace {
    /// Constructs a [`BoxSpace`].
    pub fn new(low: f32, high: f32, shape: Vec<usize>) -> Self {
        Self { low, high, shape }
    }

    /// Returns the number of elements of a value in the space.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Checks if `value` lies in the space.
    ///
    /// NaN elements are never contained.
    pub fn contains(&self, value: &[f32]) -> Result<bool, CoreError> {
        if value.len() != self.numel() {
            return Err(CoreError::SpaceShapeError {
                expected: self.numel(),
                actual: value.len(),
            });
        }
        Ok(value.iter().all(|v| self.low <= *v && *v <= self.high))
    }

    /// Samples a value uniformly from the space.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f32> {
        (0..self.numel())
            .map(|_| rng.gen_range(self.low..=self.high))
            .collect()
    }
}
