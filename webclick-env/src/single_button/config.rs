//! Configuration of [`SingleButtonEnv`](super::SingleButtonEnv).
use crate::{
    config::{load_yaml, save_yaml, ButtonConfig, PageConfig},
    render::FontConfig,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of [`SingleButtonEnv`](super::SingleButtonEnv).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SingleButtonEnvConfig {
    /// Canvas and reward settings.
    pub page: PageConfig,

    /// The button.
    pub button: ButtonConfig,
}

impl SingleButtonEnvConfig {
    /// Sets the size of the canvas.
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.page.width = width;
        self.page.height = height;
        self
    }

    /// Sets the glyph source.
    pub fn font(mut self, font: FontConfig) -> Self {
        self.page.font = font;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.page.max_steps = max_steps;
        self
    }

    /// Sets the side length of the button.
    pub fn button_size(mut self, size: u32) -> Self {
        self.button.size = size;
        self
    }

    /// Ends the episode when the button is clicked.
    pub fn terminate_on_click(mut self, v: bool) -> Self {
        self.button.terminate_on_click = v;
        self
    }

    /// Constructs [`SingleButtonEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_yaml(path)
    }

    /// Saves [`SingleButtonEnvConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_yaml(self, path)
    }
}
