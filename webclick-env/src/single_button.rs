//! A page with a single button placed at random.
mod config;
use crate::{
    button,
    geometry::{ClickOutcome, Rect},
    render::{Canvas, Typeface, WHITE},
    ClickAct, PixelObs, WebClickError,
};
use anyhow::Result;
pub use config::SingleButtonEnvConfig;
use log::{debug, info, trace};
use rand::{rngs::SmallRng, SeedableRng};
use webclick_core::{
    record::{Record, RecordValue},
    BoxSpace, Env, Info, Step,
};

/// Information of [`SingleButtonEnv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleButtonInfo {
    /// Top-left corner of the button.
    pub button_position: [u32; 2],
}

impl Info for SingleButtonInfo {}

/// A page with one button at a random position.
///
/// A click inside the button (edges included) is rewarded with `1`. Other clicks
/// are rewarded with the negative distance to the center of the button divided by
/// [`PageConfig::penalty_scale`](crate::PageConfig::penalty_scale).
///
/// Clicking the button does not end the episode unless
/// [`ButtonConfig::terminate_on_click`](crate::ButtonConfig::terminate_on_click)
/// is set.
pub struct SingleButtonEnv {
    config: SingleButtonEnvConfig,

    // Seed given to `build`, offset by the index in `reset_with_index`
    seed: i64,

    rng: SmallRng,

    typeface: Typeface,

    // Top-left corner of the button in the current episode
    button_position: [u32; 2],

    // Steps taken in the current episode
    n_steps: usize,
}

impl SingleButtonEnv {
    /// Top-left corner of the button.
    pub fn button_position(&self) -> [u32; 2] {
        self.button_position
    }

    /// Moves the button for the rest of the episode.
    ///
    /// The next reset places the button at random again.
    pub fn place_button(&mut self, position: [u32; 2]) -> Result<(), WebClickError> {
        button::check_position(position, &self.config.page, &self.config.button)?;
        self.button_position = position;
        Ok(())
    }

    /// Clickable area of the button.
    pub fn target(&self) -> Rect {
        button::rect(self.button_position, &self.config.button)
    }

    /// Renders the page.
    ///
    /// The image is drawn from scratch on every call.
    pub fn render(&self) -> PixelObs {
        let page = &self.config.page;
        let mut canvas = Canvas::new(page.width, page.height, WHITE);
        button::draw(
            &mut canvas,
            &self.typeface,
            self.button_position,
            &self.config.button,
        );
        canvas.into_obs()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SingleButtonEnvConfig {
        &self.config
    }

    fn info(&self) -> SingleButtonInfo {
        SingleButtonInfo {
            button_position: self.button_position,
        }
    }
}

impl Env for SingleButtonEnv {
    type Config = SingleButtonEnvConfig;
    type Obs = PixelObs;
    type Act = ClickAct;
    type Info = SingleButtonInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized,
    {
        config.page.validate()?;
        config.button.validate(&config.page)?;
        let typeface = Typeface::load(&config.page.font)?;
        let mut rng = SmallRng::seed_from_u64(seed as u64);
        let button_position = button::sample_position(&mut rng, &config.page, &config.button);
        info!(
            "Build SingleButtonEnv ({}x{}) with seed {}",
            config.page.width, config.page.height, seed
        );

        Ok(Self {
            config: config.clone(),
            seed,
            rng,
            typeface,
            button_position,
            n_steps: 0,
        })
    }

    fn reset(&mut self) -> Result<(Self::Obs, Self::Info)> {
        self.button_position =
            button::sample_position(&mut self.rng, &self.config.page, &self.config.button);
        self.n_steps = 0;
        debug!("Button placed at {:?}", self.button_position);

        Ok((self.render(), self.info()))
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<(Self::Obs, Self::Info)> {
        self.rng = SmallRng::seed_from_u64(self.seed.wrapping_add(ix as i64) as u64);
        self.reset()
    }

    fn step(&mut self, act: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized,
    {
        act.log_if_outside(&self.action_space());
        self.n_steps += 1;

        let page = &self.config.page;
        let outcome = ClickOutcome::evaluate(&self.target(), act.x, act.y, page.penalty_scale);
        let is_terminated = outcome.hit && self.config.button.terminate_on_click;
        let is_truncated = page.max_steps.map_or(false, |m| self.n_steps >= m);
        trace!(
            "Click ({}, {}): hit = {}, reward = {}",
            act.x,
            act.y,
            outcome.hit,
            outcome.reward
        );

        let mut record = Record::from(outcome);
        record.insert("click", RecordValue::Array1(vec![act.x, act.y]));

        let step = Step::new(
            self.render(),
            *act,
            outcome.reward,
            is_terminated,
            is_truncated,
            self.info(),
        );
        (step, record)
    }

    fn action_space(&self) -> BoxSpace {
        self.config.page.action_space()
    }

    fn observation_space(&self) -> BoxSpace {
        self.config.page.observation_space()
    }
}
