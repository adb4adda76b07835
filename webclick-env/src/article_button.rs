//! A page listing news articles, one of which is the goal.
mod config;
use crate::{
    article::{self, Article},
    button,
    geometry::{ClickOutcome, Rect},
    render::{Canvas, Typeface, WHITE},
    ClickAct, PixelObs, WebClickError,
};
use anyhow::Result;
pub use config::{ArticleButtonEnvConfig, ModeSelection};
use log::{debug, info, trace};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use webclick_core::{
    record::{Record, RecordValue},
    BoxSpace, Env, Info, Step,
};

/// Target of the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// The page lists the articles and the goal title is the target.
    Article,

    /// The page shows a single button, which is the target.
    Button,
}

/// Information of [`ArticleButtonEnv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleButtonInfo {
    /// Title of the goal article, in article mode.
    GoalArticle(String),

    /// Top-left corner of the button, in button mode.
    ButtonPosition([u32; 2]),
}

impl Info for ArticleButtonInfo {}

/// A page listing news articles.
///
/// On reset, one article is chosen as the goal and the mode of the episode is
/// selected with [`ModeSelection`]. In article mode, a click on the title of the
/// goal article is rewarded with `1` and ends the episode. The clickable area of
/// a title starts at `x = 20`, is 30 pixels high and as wide as the title drawn
/// at font size 24. Missed clicks are rewarded with the negative distance to the
/// center of the area divided by
/// [`PageConfig::penalty_scale`](crate::PageConfig::penalty_scale).
///
/// In button mode, the environment behaves like
/// [`SingleButtonEnv`](crate::SingleButtonEnv).
pub struct ArticleButtonEnv {
    config: ArticleButtonEnvConfig,

    // Seed given to `build`, offset by the index in `reset_with_index`
    seed: i64,

    rng: SmallRng,

    typeface: Typeface,

    mode: PageMode,

    // Index of the goal article
    goal: usize,

    // The button is resampled in both modes
    button_position: [u32; 2],

    n_steps: usize,
}

impl ArticleButtonEnv {
    /// Mode of the current episode.
    pub fn mode(&self) -> PageMode {
        self.mode
    }

    /// Switches the mode for the rest of the episode.
    pub fn set_mode(&mut self, mode: PageMode) {
        self.mode = mode;
    }

    /// The goal article.
    pub fn goal_article(&self) -> &Article {
        &self.config.articles[self.goal]
    }

    /// Makes the `ix`-th article the goal for the rest of the episode.
    pub fn select_goal(&mut self, ix: usize) -> Result<(), WebClickError> {
        if ix >= self.config.articles.len() {
            return Err(WebClickError::InvalidConfig(format!(
                "no article at index {}, the page has {}",
                ix,
                self.config.articles.len()
            )));
        }
        self.goal = ix;
        Ok(())
    }

    /// Top-left corner of the button.
    pub fn button_position(&self) -> [u32; 2] {
        self.button_position
    }

    /// Moves the button for the rest of the episode.
    pub fn place_button(&mut self, position: [u32; 2]) -> Result<(), WebClickError> {
        button::check_position(position, &self.config.page, &self.config.button)?;
        self.button_position = position;
        Ok(())
    }

    /// Clickable area of the target in the current mode.
    pub fn target(&self) -> Rect {
        match self.mode {
            PageMode::Article => self.goal_article().title_rect(&self.typeface),
            PageMode::Button => button::rect(self.button_position, &self.config.button),
        }
    }

    /// Renders the page.
    ///
    /// The image is drawn from scratch on every call.
    pub fn render(&self) -> PixelObs {
        let page = &self.config.page;
        let mut canvas = Canvas::new(page.width, page.height, WHITE);
        match self.mode {
            PageMode::Article => {
                article::draw_all(&mut canvas, &self.typeface, &self.config.articles)
            }
            PageMode::Button => button::draw(
                &mut canvas,
                &self.typeface,
                self.button_position,
                &self.config.button,
            ),
        }
        canvas.into_obs()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ArticleButtonEnvConfig {
        &self.config
    }

    fn sample_episode(&mut self) {
        self.goal = self.rng.gen_range(0..self.config.articles.len());
        self.button_position =
            button::sample_position(&mut self.rng, &self.config.page, &self.config.button);
        self.mode = match self.config.mode {
            ModeSelection::Article => PageMode::Article,
            ModeSelection::Button => PageMode::Button,
            ModeSelection::Random => {
                if self.rng.gen_bool(0.5) {
                    PageMode::Article
                } else {
                    PageMode::Button
                }
            }
        };
    }

    fn info(&self) -> ArticleButtonInfo {
        match self.mode {
            PageMode::Article => ArticleButtonInfo::GoalArticle(self.goal_article().title.clone()),
            PageMode::Button => ArticleButtonInfo::ButtonPosition(self.button_position),
        }
    }
}

impl Env for ArticleButtonEnv {
    type Config = ArticleButtonEnvConfig;
    type Obs = PixelObs;
    type Act = ClickAct;
    type Info = ArticleButtonInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized,
    {
        config.validate()?;
        let typeface = Typeface::load(&config.page.font)?;
        for article in config.articles.iter() {
            let rect = article.title_rect(&typeface);
            if rect.x + rect.width > config.page.width as f32 {
                return Err(WebClickError::OutOfCanvas {
                    what: format!("title {:?}", article.title),
                    x: rect.x as u32,
                    y: article.y_position,
                    width: config.page.width,
                    height: config.page.height,
                }
                .into());
            }
        }
        info!(
            "Build ArticleButtonEnv ({} articles, {:?} mode) with seed {}",
            config.articles.len(),
            config.mode,
            seed
        );

        let mut env = Self {
            config: config.clone(),
            seed,
            rng: SmallRng::seed_from_u64(seed as u64),
            typeface,
            mode: PageMode::Article,
            goal: 0,
            button_position: [0, 0],
            n_steps: 0,
        };
        env.sample_episode();
        Ok(env)
    }

    fn reset(&mut self) -> Result<(Self::Obs, Self::Info)> {
        self.sample_episode();
        self.n_steps = 0;
        debug!(
            "Reset in {:?} mode, goal = {:?}, button at {:?}",
            self.mode,
            self.goal_article().title,
            self.button_position
        );

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
        let is_terminated = match self.mode {
            PageMode::Article => outcome.hit,
            PageMode::Button => outcome.hit && self.config.button.terminate_on_click,
        };
        let is_truncated = page.max_steps.map_or(false, |m| self.n_steps >= m);
        trace!(
            "Click ({}, {}) in {:?} mode: hit = {}, reward = {}",
            act.x,
            act.y,
            self.mode,
            outcome.hit,
            outcome.reward
        );

        let mut record = Record::from(outcome);
        record.insert("click", RecordValue::Array1(vec![act.x, act.y]));
        if self.mode == PageMode::Article {
            let title = self.goal_article().title.clone();
            record.insert("goal", RecordValue::String(title));
        }

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

#[cfg(test)]
mod tests {
    use super::*;

    fn build(mode: ModeSelection, seed: i64) -> ArticleButtonEnv {
        let config = ArticleButtonEnvConfig::default().mode(mode);
        ArticleButtonEnv::build(&config, seed).unwrap()
    }

    #[test]
    fn test_click_goal_title() {
        let mut env = build(ModeSelection::Article, 0);
        env.select_goal(0).unwrap();
        assert_eq!(env.goal_article().y_position, 0);

        let (step, record) = env.step(&ClickAct::new(30.0, 15.0));
        assert_eq!(step.reward, 1.0);
        assert!(step.is_terminated);
        assert_eq!(
            step.info,
            ArticleButtonInfo::GoalArticle("Breaking News: AI Revolution".to_string())
        );
        assert_eq!(record.get_scalar("hit").unwrap(), 1.0);
        assert_eq!(record.get_array1("click").unwrap(), vec![30.0, 15.0]);
        assert_eq!(
            record.get_string("goal").unwrap(),
            "Breaking News: AI Revolution"
        );
    }

    #[test]
    fn test_click_other_title() {
        let mut env = build(ModeSelection::Article, 0);
        env.select_goal(2).unwrap();

        // Center of the first title
        let (step, _) = env.step(&ClickAct::new(188.0, 15.0));
        let target = env.target();
        let expected = -target.distance_to_center(188.0, 15.0) / 300.0;
        assert!(!step.is_terminated);
        assert!(step.reward < 0.0);
        assert!((step.reward - expected).abs() < 1e-6);
    }

    #[test]
    fn test_title_edges_are_inclusive() {
        let mut env = build(ModeSelection::Article, 0);
        env.select_goal(1).unwrap();
        let rect = env.target();
        assert_eq!(rect.y, 120.0);

        let (step, _) = env.step(&ClickAct::new(rect.x + rect.width, rect.y + rect.height));
        assert_eq!(step.reward, 1.0);
        let (step, _) = env.step(&ClickAct::new(rect.x - 0.5, rect.y));
        assert!(step.reward < 0.0);
    }

    #[test]
    fn test_button_mode() {
        let mut env = build(ModeSelection::Button, 0);
        let (_, info) = env.reset().unwrap();
        assert_eq!(env.mode(), PageMode::Button);
        assert_eq!(info, ArticleButtonInfo::ButtonPosition(env.button_position()));

        env.place_button([100, 100]).unwrap();
        let (step, record) = env.step(&ClickAct::new(125.0, 125.0));
        assert_eq!(step.reward, 1.0);
        assert!(!step.is_terminated);
        assert!(record.get("goal").is_none());
    }

    #[test]
    fn test_random_mode_selects_both() {
        let mut env = build(ModeSelection::Random, 11);
        let mut n_article = 0;
        let mut n_button = 0;
        for _ in 0..100 {
            env.reset().unwrap();
            match env.mode() {
                PageMode::Article => n_article += 1,
                PageMode::Button => n_button += 1,
            }
        }
        assert!(n_article > 0 && n_button > 0);
    }

    #[test]
    fn test_select_goal_out_of_range() {
        let mut env = build(ModeSelection::Article, 0);
        assert!(env.select_goal(3).is_err());
    }

    #[test]
    fn test_title_wider_than_canvas() {
        let mut config = ArticleButtonEnvConfig::default();
        config.page.width = 200;
        assert!(ArticleButtonEnv::build(&config, 0).is_err());
    }
}
