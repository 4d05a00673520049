//! Spatial extent of a frame sequence, used to fix the renderer's axes.

use crate::error::VisualizeError;
use crate::types::TimedFrame;

/// Per-axis (min, max) over every joint of every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

impl Bounds {
    /// A degenerate (min > max) range means no joint was ever observed.
    pub fn is_degenerate(&self) -> bool {
        self.x.0 > self.x.1 || self.y.0 > self.y.1 || self.z.0 > self.z.1
    }
}

/// Scan every joint of every frame once and collect the min/max extent on
/// all three axes. Joints absent from a frame are skipped, not treated as
/// zero. An empty sequence, or one with no joints at all, yields
/// `DegenerateBounds` rather than silent infinities.
pub fn compute_bounds(frames: &[TimedFrame]) -> Result<Bounds, VisualizeError> {
    let mut bounds = Bounds {
        x: (f64::INFINITY, f64::NEG_INFINITY),
        y: (f64::INFINITY, f64::NEG_INFINITY),
        z: (f64::INFINITY, f64::NEG_INFINITY),
    };
    for frame in frames {
        for position in frame.skeleton.joints.values() {
            bounds.x = (bounds.x.0.min(position.x), bounds.x.1.max(position.x));
            bounds.y = (bounds.y.0.min(position.y), bounds.y.1.max(position.y));
            bounds.z = (bounds.z.0.min(position.z), bounds.z.1.max(position.z));
        }
    }
    if bounds.is_degenerate() {
        return Err(VisualizeError::DegenerateBounds);
    }
    Ok(bounds)
}
