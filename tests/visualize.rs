use std::fs;
use std::io::Write;
use std::path::PathBuf;

use skelview::error::VisualizeError;
use skelview::pipeline::{visualize, Options};
use skelview::types::{JointType, Micros, Position, Skeleton, TimedFrame, TrackingState};

fn frame(state: TrackingState, timestamp: Micros, drift: f64) -> TimedFrame {
    let mut skeleton = Skeleton::new(state);
    skeleton
        .joints
        .insert(JointType::Head, Position::new(0.1 + drift, 1.6, 2.0 + drift));
    skeleton
        .joints
        .insert(JointType::Neck, Position::new(0.2 + drift, 1.4, 2.1 + drift));
    skeleton
        .joints
        .insert(JointType::Torso, Position::new(0.2 + drift, 1.0, 2.1 + drift));
    TimedFrame {
        skeleton,
        timestamp,
    }
}

fn write_recording(dir: &tempfile::TempDir, frames: &[TimedFrame]) -> PathBuf {
    let path = dir.path().join("recording.skel");
    let mut file = fs::File::create(&path).unwrap();
    for frame in frames {
        let bytes = bincode::serialize(frame).unwrap();
        file.write_all(&bytes).unwrap();
    }
    path
}

fn image_options() -> Options {
    Options {
        make_video: false,
        ..Options::default()
    }
}

#[test]
fn image_mode_renders_first_tracked_frame() {
    // Calibration frame at t=0 is dropped; offsets stay 1000 and 2000
    // because rebasing uses the raw recording's first timestamp.
    let dir = tempfile::tempdir().unwrap();
    let path = write_recording(
        &dir,
        &[
            frame(TrackingState::Calibrating, 0, 0.0),
            frame(TrackingState::Tracked, 1000, 0.1),
            frame(TrackingState::Tracked, 2000, 0.2),
        ],
    );

    let out = visualize(&path, &image_options()).unwrap();
    assert_eq!(out.extension().unwrap(), "png");
    let written = fs::metadata(&out).unwrap();
    assert!(written.len() > 0);
}

#[test]
fn empty_recording_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_recording(&dir, &[]);
    assert!(matches!(
        visualize(&path, &image_options()),
        Err(VisualizeError::EmptyRecording)
    ));
}

#[test]
fn recording_without_tracked_frames_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_recording(
        &dir,
        &[
            frame(TrackingState::Calibrating, 0, 0.0),
            frame(TrackingState::None, 1000, 0.0),
        ],
    );
    assert!(matches!(
        visualize(&path, &image_options()),
        Err(VisualizeError::NoTrackedFrames)
    ));
}

#[test]
fn window_past_the_recording_aborts_instead_of_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_recording(
        &dir,
        &[
            frame(TrackingState::Tracked, 0, 0.0),
            frame(TrackingState::Tracked, 33_000, 0.1),
        ],
    );
    let opts = Options {
        make_video: false,
        start_time: Some(5.0),
        end_time: Some(6.0),
        ..Options::default()
    };
    assert!(matches!(
        visualize(&path, &opts),
        Err(VisualizeError::EmptyWindow { .. })
    ));
    assert!(!path.with_extension("skel.png").exists());
}

#[test]
fn video_mode_needs_at_least_two_frames() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_recording(&dir, &[frame(TrackingState::Tracked, 0, 0.0)]);
    let opts = Options::default();
    assert!(matches!(
        visualize(&path, &opts),
        Err(VisualizeError::NotEnoughFrames { needed: 2, got: 1 })
    ));
}
