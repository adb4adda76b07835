//! Environment.
use super::{Act, Info, Obs, Step};
use crate::{record::Record, BoxSpace};
use anyhow::Result;

/// Represents an environment, typically an MDP.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object and returned on reset.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performes an environment step.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Starts a new episode and returns the initial observation.
    fn reset(&mut self) -> Result<(Self::Obs, Self::Info)>;

    /// Resets the environment with a given index.
    ///
    /// The index is used as an offset of the random seed given to [`Env::build`],
    /// so that the `ix`-th evaluation episode is the same in every run.
    fn reset_with_index(&mut self, ix: usize) -> Result<(Self::Obs, Self::Info)>;

    /// Performes an environment step and resets the environment if the episode ends.
    ///
    /// The initial observation of the next episode is stored in [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (mut step, record) = self.step(a);
        if step.is_done() {
            let (init_obs, _) = self.reset()?;
            step.init_obs = Some(init_obs);
        }
        Ok((step, record))
    }

    /// Declared range of actions.
    fn action_space(&self) -> BoxSpace;

    /// Declared range of observations.
    fn observation_space(&self) -> BoxSpace;
}
