//! Default implementation of the [`Evaluator`] trait.
//!
//! This module provides a simple evaluator that runs a fixed number of episodes
//! and calculates the average return across all episodes.
use super::Evaluator;
use crate::{
    record::{NullRecorder, Record, RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;
use log::info;

/// A default implementation of the [`Evaluator`] trait.
///
/// Every episode is started with [`Env::reset_with_index`], so the `i`-th episode
/// sees the same initial state in every evaluation. An episode ends when the
/// environment terminates or truncates it, or after `max_steps` steps, whichever
/// comes first. The cap keeps evaluation finite on environments that never
/// terminate by themselves.
///
/// # Examples
///
/// ```ignore
/// let config = SingleButtonEnvConfig::default();
/// let mut evaluator = DefaultEvaluator::<SingleButtonEnv>::new(&config, 42, 10)?.max_steps(20);
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The maximum number of steps in an episode.
    max_steps: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Evaluates a policy and returns `Episode return`, `Episode length` and
    /// `Termination rate` averaged over episodes.
    fn evaluate<P: Policy<E>>(&mut self, policy: &mut P) -> Result<Record> {
        self.evaluate_with_recorder(policy, &mut NullRecorder::default())
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            max_steps: 100,
            env: E::build(config, seed)?,
        })
    }

    /// Sets the maximum number of steps in an episode. Defaults to 100.
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Returns a reference to the environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Evaluates a policy, writing the record of every step to `recorder`.
    ///
    /// The episode index and step index are added to each record as
    /// `episode` and `step`.
    pub fn evaluate_with_recorder<P, R>(
        &mut self,
        policy: &mut P,
        recorder: &mut R,
    ) -> Result<Record>
    where
        P: Policy<E>,
        R: Recorder,
    {
        let mut r_total = 0f32;
        let mut len_total = 0usize;
        let mut n_terminated = 0usize;

        for ix in 0..self.n_episodes {
            let (mut prev_obs, _) = self.env.reset_with_index(ix)?;
            let mut r_episode = 0f32;
            let mut n_steps = 0;

            while n_steps < self.max_steps {
                let act = policy.sample(&prev_obs);
                let (step, mut record) = self.env.step(&act);
                n_steps += 1;
                r_episode += step.reward;

                record.merge_inplace(Record::from_slice(&[
                    ("episode", RecordValue::Scalar(ix as f32)),
                    ("step", RecordValue::Scalar(n_steps as f32)),
                ]));
                recorder.write(record);

                if step.is_terminated {
                    n_terminated += 1;
                }
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }

            info!("Episode {}: return = {}, length = {}", ix, r_episode, n_steps);
            r_total += r_episode;
            len_total += n_steps;
        }

        let n = self.n_episodes.max(1) as f32;
        Ok(Record::from_slice(&[
            ("Episode return", RecordValue::Scalar(r_total / n)),
            ("Episode length", RecordValue::Scalar(len_total as f32 / n)),
            ("Termination rate", RecordValue::Scalar(n_terminated as f32 / n)),
        ]))
    }
}
