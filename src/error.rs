use thiserror::Error;

use crate::types::Micros;

/// Everything that can abort a visualization run. There is no partial
/// success: either a complete output file is written or none is.
#[derive(Debug, Error)]
pub enum VisualizeError {
    #[error("recording contains no skeleton frames")]
    EmptyRecording,

    #[error("no tracked frames left after filtering calibration data")]
    NoTrackedFrames,

    #[error("no frames inside the requested window [{start}, {end}] microseconds")]
    EmptyWindow { start: Micros, end: Micros },

    #[error("need at least {needed} frames to render, got {got}")]
    NotEnoughFrames { needed: usize, got: usize },

    #[error("no joints observed in any frame; spatial bounds are degenerate")]
    DegenerateBounds,

    #[error("malformed recording: {0}")]
    MalformedRecording(String),

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("video encoding failed: {0}")]
    Encoder(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
