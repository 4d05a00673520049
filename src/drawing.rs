//! 3D rendering of skeleton frames to images and videos.
//!
//! Each bone link is drawn as a line segment between its two joint
//! positions; links with a missing endpoint are not drawn for that frame.
//! Axis limits come from the precomputed [`Bounds`], with the x and z axes
//! inverted to match the sensor's flipped coordinate convention.

use std::path::Path;
use std::time::Duration;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackendError;

use crate::bounds::Bounds;
use crate::encoder::{VideoEncoder, OUTPUT_FPS};
use crate::error::VisualizeError;
use crate::types::{TimedFrame, LINKS};

pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 480;

// Camera fixed to the sensor's top-down-like view (matplotlib convention:
// elevation 270, azimuth 90).
const CAMERA_ELEVATION_DEG: f64 = 270.0;
const CAMERA_AZIMUTH_DEG: f64 = 90.0;

/// The time between the first two frames, taken as representative of the
/// whole recording's frame spacing. Real recordings jitter a little; that
/// is deliberately ignored here.
pub fn frame_interval(frames: &[TimedFrame]) -> Result<Duration, VisualizeError> {
    if frames.len() < 2 {
        return Err(VisualizeError::NotEnoughFrames {
            needed: 2,
            got: frames.len(),
        });
    }
    let delta = frames[1].timestamp - frames[0].timestamp;
    Ok(Duration::from_micros(delta.max(0) as u64))
}

/// Render the first frame of the sequence as a static image.
pub fn render_image(
    frames: &[TimedFrame],
    bounds: &Bounds,
    out_path: &Path,
) -> Result<(), VisualizeError> {
    let first = frames.first().ok_or(VisualizeError::NotEnoughFrames {
        needed: 1,
        got: 0,
    })?;
    if bounds.is_degenerate() {
        return Err(VisualizeError::DegenerateBounds);
    }
    let area = BitMapBackend::new(out_path, (FRAME_WIDTH, FRAME_HEIGHT)).into_drawing_area();
    draw_pose(&area, bounds, first).map_err(draw_err)?;
    area.present().map_err(draw_err)?;
    Ok(())
}

/// Render the whole sequence as a video, one encoded frame per input frame.
///
/// The measured inter-frame interval describes the capture cadence only; the
/// file is always encoded at [`OUTPUT_FPS`]. When the recording was not
/// captured at ~30 fps the played-back duration will not match wall-clock
/// capture time.
pub fn render_video(
    frames: &[TimedFrame],
    bounds: &Bounds,
    out_path: &Path,
) -> Result<(), VisualizeError> {
    let interval = frame_interval(frames)?;
    if bounds.is_degenerate() {
        return Err(VisualizeError::DegenerateBounds);
    }
    log::info!(
        "capture interval {:?} between frames; encoding at {} fps",
        interval,
        OUTPUT_FPS
    );

    let mut encoder = VideoEncoder::create(FRAME_WIDTH, FRAME_HEIGHT)?;
    let (width, height) = encoder.dimensions();
    let mut buffer = vec![0u8; width * height * 3];
    // Frames must be drawn strictly in input order.
    for frame in frames {
        {
            let area = BitMapBackend::with_buffer(&mut buffer, (width as u32, height as u32))
                .into_drawing_area();
            draw_pose(&area, bounds, frame).map_err(draw_err)?;
            area.present().map_err(draw_err)?;
        }
        encoder.push_frame(&buffer)?;
    }
    encoder.finish(out_path)
}

type PlotResult = Result<(), DrawingAreaErrorKind<BitMapBackendError>>;

fn draw_pose(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    bounds: &Bounds,
    frame: &TimedFrame,
) -> PlotResult {
    area.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(area).margin(10).build_cartesian_3d(
        // x and z run from max to min: the sensor's axes are flipped
        // relative to the plot's.
        bounds.x.1..bounds.x.0,
        bounds.y.0..bounds.y.1,
        bounds.z.1..bounds.z.0,
    )?;
    chart.with_projection(|mut pb| {
        pb.pitch = CAMERA_ELEVATION_DEG.to_radians();
        pb.yaw = CAMERA_AZIMUTH_DEG.to_radians();
        pb.scale = 0.85;
        pb.into_matrix()
    });
    chart
        .configure_axes()
        // no tick labels: keeps rendering independent of system fonts
        .x_labels(0)
        .y_labels(0)
        .z_labels(0)
        .draw()?;

    for (top, bottom) in LINKS {
        if let (Some(a), Some(b)) = (frame.skeleton.joint(top), frame.skeleton.joint(bottom)) {
            chart.draw_series(LineSeries::new(
                [(a.x, a.y, a.z), (b.x, b.y, b.z)],
                BLUE.stroke_width(2),
            ))?;
        }
    }
    Ok(())
}

fn draw_err(err: DrawingAreaErrorKind<BitMapBackendError>) -> VisualizeError {
    VisualizeError::Draw(err.to_string())
}
