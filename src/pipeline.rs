//! The load -> filter -> normalize -> bound -> render pipeline, run start to
//! finish for one recording.

use std::path::{Path, PathBuf};

use log::info;

use crate::bounds::compute_bounds;
use crate::drawing;
use crate::error::VisualizeError;
use crate::recording::load_recording;
use crate::skeletons::{filter_tracked, rebase_timestamps, restrict_window};
use crate::types::Micros;

pub struct Options {
    /// Animation video when true, single-frame image when false.
    pub make_video: bool,
    /// Prepended verbatim to the output path.
    pub path_prefix: String,
    /// Seconds into the recording at which to start; defaults to the start.
    pub start_time: Option<f64>,
    /// Seconds into the recording at which to stop; defaults to the end.
    pub end_time: Option<f64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            make_video: true,
            path_prefix: String::new(),
            start_time: None,
            end_time: None,
        }
    }
}

fn secs_to_micros(secs: f64) -> Micros {
    (secs * 1e6) as Micros
}

/// Run the whole pipeline and return the path of the written file.
pub fn visualize(recording_path: &Path, opts: &Options) -> Result<PathBuf, VisualizeError> {
    info!("reading skeleton frames from {}", recording_path.display());
    let frames = load_recording(recording_path)?;
    if frames.is_empty() {
        return Err(VisualizeError::EmptyRecording);
    }
    info!("loaded {} frames", frames.len());

    // Offsets are measured from the first frame of the raw recording,
    // calibration frames included.
    let origin = frames[0].timestamp;
    let frames = filter_tracked(frames);
    if frames.is_empty() {
        return Err(VisualizeError::NoTrackedFrames);
    }
    info!("{} frames of tracking data", frames.len());
    let frames = rebase_timestamps(frames, origin);

    let start = opts.start_time.map(secs_to_micros);
    let end = opts.end_time.map(secs_to_micros);
    let window_start = start.unwrap_or(frames[0].timestamp);
    let window_end = end.unwrap_or(frames[frames.len() - 1].timestamp);
    info!(
        "starting at {}s, ending at {}s",
        window_start as f64 / 1e6,
        window_end as f64 / 1e6
    );
    let frames = restrict_window(frames, start, end);
    if frames.is_empty() {
        return Err(VisualizeError::EmptyWindow {
            start: window_start,
            end: window_end,
        });
    }

    let bounds = compute_bounds(&frames)?;

    let extension = if opts.make_video { "mp4" } else { "png" };
    let out_path = PathBuf::from(format!(
        "{}{}.{}",
        opts.path_prefix,
        recording_path.display(),
        extension
    ));
    info!("creating {}", if opts.make_video { "video" } else { "image" });
    if opts.make_video {
        drawing::render_video(&frames, &bounds, &out_path)?;
    } else {
        drawing::render_image(&frames, &bounds, &out_path)?;
    }
    Ok(out_path)
}
