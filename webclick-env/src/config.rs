//! Configuration shared by the page environments.
use crate::{render::FontConfig, WebClickError};
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};
use webclick_core::BoxSpace;

/// Canvas and reward settings of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Width of the canvas in pixels.
    pub width: u32,

    /// Height of the canvas in pixels.
    pub height: u32,

    /// Glyph source for all text on the page.
    pub font: FontConfig,

    /// A missed click is rewarded with `-distance / penalty_scale`.
    pub penalty_scale: f32,

    /// Episodes are truncated after this number of steps.
    pub max_steps: Option<usize>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            font: FontConfig::Builtin,
            penalty_scale: 300.0,
            max_steps: None,
        }
    }
}

impl PageConfig {
    /// Clicks are declared in `[0, max(width, height)]` for both coordinates.
    pub fn action_space(&self) -> BoxSpace {
        BoxSpace::new(0.0, self.width.max(self.height) as f32, vec![2])
    }

    /// Pixels in `[0, 255]` with shape `[height, width, 3]`.
    pub fn observation_space(&self) -> BoxSpace {
        BoxSpace::new(
            0.0,
            255.0,
            vec![self.height as usize, self.width as usize, 3],
        )
    }

    pub(crate) fn validate(&self) -> Result<(), WebClickError> {
        if self.width == 0 || self.height == 0 {
            return Err(WebClickError::InvalidConfig(format!(
                "canvas must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.penalty_scale.is_finite() && self.penalty_scale > 0.0) {
            return Err(WebClickError::InvalidConfig(format!(
                "penalty_scale must be positive, got {}",
                self.penalty_scale
            )));
        }
        Ok(())
    }
}

/// The clickable button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Side length of the square button in pixels.
    pub size: u32,

    /// Text drawn at the center of the button.
    pub label: String,

    /// Font size of the label.
    pub label_font_size: f32,

    /// Ends the episode when the button is clicked.
    pub terminate_on_click: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            size: 50,
            label: "Search".to_string(),
            label_font_size: 16.0,
            terminate_on_click: false,
        }
    }
}

impl ButtonConfig {
    pub(crate) fn validate(&self, page: &PageConfig) -> Result<(), WebClickError> {
        if self.size == 0 || self.size > page.width || self.size > page.height {
            return Err(WebClickError::InvalidConfig(format!(
                "button of size {} does not fit in the {}x{} canvas",
                self.size, page.width, page.height
            )));
        }
        Ok(())
    }
}

/// Reads a configuration from a YAML file.
pub(crate) fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let file = File::open(path)?;
    let rdr = BufReader::new(file);
    let config = serde_yaml::from_reader(rdr)?;
    Ok(config)
}

/// Writes a configuration to a YAML file.
pub(crate) fn save_yaml<T: Serialize>(config: &T, path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_yaml::to_string(config)?.as_bytes())?;
    Ok(())
}
