//! Web page click environments for [`webclick_core`].
//!
//! Agents observe a rendered page ([`PixelObs`], shape `[height, width, 3]`) and
//! click on it ([`ClickAct`]). A click on the target is rewarded with `1`; a miss
//! is rewarded with the negative distance to the center of the target, scaled by
//! [`PageConfig::penalty_scale`].
//!
//! * [`SingleButtonEnv`] shows one button at a random position.
//! * [`ArticleButtonEnv`] lists news articles; the title of a randomly chosen
//!   article is the target. It can also be switched to a button page with
//!   [`ModeSelection`].
//!
//! Text is drawn with the builtin bitmap font unless a font file is given with
//! [`FontConfig::TrueType`]. A missing font file makes [`Env::build`] fail.
//!
//! Here is an example of running an episode with a fixed click.
//!
//! ```
//! use anyhow::Result;
//! use webclick_core::Env as _;
//! use webclick_env::{ClickAct, SingleButtonEnv, SingleButtonEnvConfig};
//!
//! fn main() -> Result<()> {
//!     let config = SingleButtonEnvConfig::default().terminate_on_click(true);
//!     let mut env = SingleButtonEnv::build(&config, 42)?;
//!     let (obs, info) = env.reset()?;
//!     assert_eq!(obs.0.shape(), &[300, 400, 3]);
//!
//!     let [x, y] = info.button_position;
//!     let (step, _record) = env.step(&ClickAct::new(x as f32 + 25.0, y as f32 + 25.0));
//!     assert_eq!(step.reward, 1.0);
//!     assert!(step.is_terminated);
//!     Ok(())
//! }
//! ```
//!
//! [`Env::build`]: webclick_core::Env::build
mod act;
pub mod article;
mod article_button;
mod button;
mod config;
mod error;
pub mod geometry;
mod obs;
pub mod render;
mod single_button;
pub use act::ClickAct;
pub use article_button::{
    ArticleButtonEnv, ArticleButtonEnvConfig, ArticleButtonInfo, ModeSelection, PageMode,
};
pub use config::{ButtonConfig, PageConfig};
pub use error::WebClickError;
pub use obs::PixelObs;
pub use render::FontConfig;
pub use single_button::{SingleButtonEnv, SingleButtonEnvConfig, SingleButtonInfo};
