//! Click targets and reward computation.
use webclick_core::record::{Record, RecordValue};

/// An axis-aligned rectangle on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Constructs a [`Rect`].
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if `(x, y)` lies in the rectangle, edges included.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x <= x && x <= self.x + self.width && self.y <= y && y <= self.y + self.height
    }

    /// Returns the geometric center.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Euclidean distance from `(x, y)` to the center.
    pub fn distance_to_center(&self, x: f32, y: f32) -> f32 {
        let (cx, cy) = self.center();
        ((x - cx).powi(2) + (y - cy).powi(2)).sqrt()
    }
}

/// Result of a click on a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickOutcome {
    /// The click landed in the target.
    pub hit: bool,

    /// Distance from the click to the center of the target.
    pub distance: f32,

    /// `1` on a hit, `-distance / penalty_scale` otherwise.
    pub reward: f32,
}

impl ClickOutcome {
    /// Evaluates a click at `(x, y)` on `target`.
    ///
    /// Non-finite coordinates are not rejected; a NaN click misses and yields
    /// a NaN reward.
    pub fn evaluate(target: &Rect, x: f32, y: f32, penalty_scale: f32) -> Self {
        let hit = target.contains(x, y);
        let distance = target.distance_to_center(x, y);
        let reward = if hit { 1.0 } else { -distance / penalty_scale };
        Self {
            hit,
            distance,
            reward,
        }
    }
}

impl From<ClickOutcome> for Record {
    fn from(outcome: ClickOutcome) -> Self {
        Record::from_slice(&[
            ("reward", RecordValue::Scalar(outcome.reward)),
            ("distance", RecordValue::Scalar(outcome.distance)),
            ("hit", RecordValue::Scalar(if outcome.hit { 1.0 } else { 0.0 })),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Rect::new(100.0, 100.0, 50.0, 50.0);
        assert!(r.contains(100.0, 100.0));
        assert!(r.contains(150.0, 150.0));
        assert!(r.contains(125.0, 150.0));
        assert!(!r.contains(150.01, 125.0));
        assert!(!r.contains(99.99, 125.0));
        assert!(!r.contains(f32::NAN, 125.0));
    }

    #[test]
    fn test_reward_outside() {
        let r = Rect::new(0.0, 0.0, 50.0, 50.0);
        let outcome = ClickOutcome::evaluate(&r, 1000.0, 1000.0, 300.0);
        assert!(!outcome.hit);
        assert!((outcome.distance - 1378.8582).abs() < 1e-2);
        assert!((outcome.reward - (-4.5962)).abs() < 1e-3);
    }

    #[test]
    fn test_reward_inside() {
        let r = Rect::new(20.0, 0.0, 120.0, 30.0);
        let outcome = ClickOutcome::evaluate(&r, 80.0, 15.0, 300.0);
        assert!(outcome.hit);
        assert_eq!(outcome.distance, 0.0);
        assert_eq!(outcome.reward, 1.0);
    }

    #[test]
    fn test_nan_click() {
        let r = Rect::new(0.0, 0.0, 50.0, 50.0);
        let outcome = ClickOutcome::evaluate(&r, f32::NAN, 10.0, 300.0);
        assert!(!outcome.hit);
        assert!(outcome.reward.is_nan());
    }
}
