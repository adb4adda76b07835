//! Action of the page environments.
use log::debug;
use webclick_core::{Act, BoxSpace};

/// Coordinates of a click in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickAct {
    /// Horizontal coordinate.
    pub x: f32,

    /// Vertical coordinate.
    pub y: f32,
}

impl ClickAct {
    /// Constructs a click at `(x, y)`.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Logs the click if it lies outside of `space`. The click is used as is.
    pub(crate) fn log_if_outside(&self, space: &BoxSpace) {
        if let Ok(false) = space.contains(&self.to_vec()) {
            debug!("Click ({}, {}) is outside of the action space", self.x, self.y);
        }
    }
}

impl Act for ClickAct {
    fn to_vec(&self) -> Vec<f32> {
        vec![self.x, self.y]
    }
}

impl From<(f32, f32)> for ClickAct {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for ClickAct {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}
