//! External H.264 encoding via ffmpeg.
//!
//! Rendered frames are appended as raw RGB24 to a scratch file, then handed
//! to an `ffmpeg` child process in one shot. Encoding failures surface the
//! encoder's stderr and are never retried.

use std::env;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;

use crate::error::VisualizeError;

/// The recording's own frame spacing drives playback timing only; the
/// encoded file is always written at this rate.
pub const OUTPUT_FPS: u32 = 30;

pub struct VideoEncoder {
    writer: BufWriter<NamedTempFile>,
    width: usize,
    height: usize,
    frames: usize,
}

impl VideoEncoder {
    pub fn create(width: u32, height: u32) -> Result<Self, VisualizeError> {
        let raw = NamedTempFile::new()?;
        Ok(VideoEncoder {
            writer: BufWriter::new(raw),
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
            frames: 0,
        })
    }

    /// Frame dimensions after even-size sanitization; callers must render
    /// their RGB24 buffers at exactly this size.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn push_frame(&mut self, rgb: &[u8]) -> Result<(), VisualizeError> {
        debug_assert_eq!(rgb.len(), self.width * self.height * 3);
        self.writer.write_all(rgb)?;
        self.frames += 1;
        Ok(())
    }

    pub fn finish(self, out_path: &Path) -> Result<(), VisualizeError> {
        if self.frames == 0 {
            return Err(VisualizeError::Encoder("no frames to encode".into()));
        }
        let raw = self
            .writer
            .into_inner()
            .map_err(|err| VisualizeError::Io(err.into_error()))?;
        let raw_path = raw.into_temp_path();
        encode_with_ffmpeg(&raw_path, self.frames, self.width, self.height, out_path)?;
        raw_path.close().ok();
        Ok(())
    }
}

// YUV420 encoders require even dimensions.
fn sanitize_dimension(dim: u32) -> usize {
    let dim = dim.max(2);
    (dim - dim % 2) as usize
}

fn encode_with_ffmpeg(
    raw_path: &Path,
    frame_count: usize,
    width: usize,
    height: usize,
    out_path: &Path,
) -> Result<(), VisualizeError> {
    let ffmpeg_bin = env::var("SKELVIEW_FFMPEG").unwrap_or_else(|_| "ffmpeg".into());
    log::info!(
        "encoding {} frames with libx264 ({}x{} @ {} fps) -> {}",
        frame_count,
        width,
        height,
        OUTPUT_FPS,
        out_path.display()
    );

    let mut cmd = Command::new(&ffmpeg_bin);
    cmd.arg("-hide_banner")
        .arg("-loglevel")
        .arg("error")
        .arg("-y")
        .arg("-f")
        .arg("rawvideo")
        .arg("-pix_fmt")
        .arg("rgb24")
        .arg("-s")
        .arg(format!("{}x{}", width, height))
        .arg("-r")
        .arg(OUTPUT_FPS.to_string())
        .arg("-i")
        .arg(raw_path)
        .arg("-frames:v")
        .arg(frame_count.to_string())
        .arg("-c:v")
        .arg("libx264")
        .arg("-pix_fmt")
        .arg("yuv420p")
        .arg("-movflags")
        .arg("+faststart")
        .arg(out_path);

    let output = cmd
        .output()
        .map_err(|err| VisualizeError::Encoder(format!("failed to run {ffmpeg_bin}: {err}")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
        return Err(VisualizeError::Encoder(stderr));
    }
    Ok(())
}
