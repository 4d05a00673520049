//! Sequential reader for skeleton recording files.
//!
//! A recording is a plain concatenation of bincode-serialized [`TimedFrame`]
//! records; we read until end-of-stream, the same way the capture side
//! appended them.

use std::fs;
use std::path::Path;

use crate::error::VisualizeError;
use crate::types::TimedFrame;

pub fn load_recording(path: &Path) -> Result<Vec<TimedFrame>, VisualizeError> {
    let bytes = fs::read(path)?;
    let mut rest: &[u8] = &bytes;
    let mut frames = Vec::new();
    // End-of-stream on a record boundary ends the recording; running out of
    // bytes inside a record means the file was truncated.
    while !rest.is_empty() {
        match bincode::deserialize_from::<_, TimedFrame>(&mut rest) {
            Ok(frame) => frames.push(frame),
            Err(err) => return Err(VisualizeError::MalformedRecording(err.to_string())),
        }
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JointType, Position, Skeleton, TrackingState};
    use std::io::Write;

    fn sample_frame(timestamp: i64) -> TimedFrame {
        let mut skeleton = Skeleton::new(TrackingState::Tracked);
        skeleton
            .joints
            .insert(JointType::Head, Position::new(0.1, 1.7, 2.0));
        TimedFrame {
            skeleton,
            timestamp,
        }
    }

    #[test]
    fn reads_concatenated_records_until_eof() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for timestamp in [0, 33_000, 66_000] {
            let bytes = bincode::serialize(&sample_frame(timestamp)).unwrap();
            file.write_all(&bytes).unwrap();
        }
        file.flush().unwrap();

        let frames = load_recording(file.path()).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].timestamp, 66_000);
        assert!(frames[0].skeleton.joint(JointType::Head).is_some());
    }

    #[test]
    fn empty_file_is_an_empty_recording() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let frames = load_recording(file.path()).unwrap();
        assert!(frames.is_empty());
    }

    #[test]
    fn truncated_record_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let bytes = bincode::serialize(&sample_frame(0)).unwrap();
        file.write_all(&bytes).unwrap();
        // Chop the second record mid-way through.
        file.write_all(&bytes[..bytes.len() / 2]).unwrap();
        file.flush().unwrap();

        assert!(matches!(
            load_recording(file.path()),
            Err(VisualizeError::MalformedRecording(_))
        ));
    }
}
