//! Frame filtering and timestamp normalization for skeleton recordings.

use crate::types::{Micros, TimedFrame, TrackingState};

/// Remove frames where NiTE was still calibrating (or had lost) the
/// skeleton. Keeps only `Tracked` frames, preserving their relative order.
pub fn filter_tracked(frames: Vec<TimedFrame>) -> Vec<TimedFrame> {
    frames
        .into_iter()
        .filter(|frame| frame.skeleton.state == TrackingState::Tracked)
        .collect()
}

/// Turn absolute timestamps into offsets into the recording.
///
/// `origin` is the timestamp of the very first frame of the original,
/// unfiltered recording. Rebasing against it keeps true elapsed time even
/// though the early calibration frames have been dropped.
pub fn rebase_timestamps(frames: Vec<TimedFrame>, origin: Micros) -> Vec<TimedFrame> {
    frames
        .into_iter()
        .map(|frame| TimedFrame {
            timestamp: frame.timestamp - origin,
            ..frame
        })
        .collect()
}

/// Keep only frames whose offset timestamp lies in the inclusive window
/// `[start, end]`. Unspecified ends default to the first/last offset present
/// in the sequence. An empty result is returned as-is; the caller decides
/// whether that aborts the run.
pub fn restrict_window(
    frames: Vec<TimedFrame>,
    start: Option<Micros>,
    end: Option<Micros>,
) -> Vec<TimedFrame> {
    let (first, last) = match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => (first.timestamp, last.timestamp),
        _ => return frames,
    };
    let start = start.unwrap_or(first);
    let end = end.unwrap_or(last);
    frames
        .into_iter()
        .filter(|frame| frame.timestamp >= start && frame.timestamp <= end)
        .collect()
}
