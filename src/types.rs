use std::collections::BTreeMap;

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Timestamps are microseconds, as produced by the sensor's clock.
pub type Micros = i64;
pub type Position = Vector3<f64>;

/////////////////////////////////////////////////////////////////////////////////////////////////

/// The 15 joints NiTE tracks. Discriminants match the NiTE joint ids
/// (`NITE_JOINT_HEAD` = 0 .. `NITE_JOINT_RIGHT_FOOT` = 14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum JointType {
    Head = 0,
    Neck = 1,
    LeftShoulder = 2,
    RightShoulder = 3,
    LeftElbow = 4,
    RightElbow = 5,
    LeftHand = 6,
    RightHand = 7,
    Torso = 8,
    LeftHip = 9,
    RightHip = 10,
    LeftKnee = 11,
    RightKnee = 12,
    LeftFoot = 13,
    RightFoot = 14,
}

impl JointType {
    pub const COUNT: usize = 15;

    pub fn from_nite_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Head),
            1 => Some(Self::Neck),
            2 => Some(Self::LeftShoulder),
            3 => Some(Self::RightShoulder),
            4 => Some(Self::LeftElbow),
            5 => Some(Self::RightElbow),
            6 => Some(Self::LeftHand),
            7 => Some(Self::RightHand),
            8 => Some(Self::Torso),
            9 => Some(Self::LeftHip),
            10 => Some(Self::RightHip),
            11 => Some(Self::LeftKnee),
            12 => Some(Self::RightKnee),
            13 => Some(Self::LeftFoot),
            14 => Some(Self::RightFoot),
            _ => None,
        }
    }
}

/// Skeleton tracking states reported by NiTE. Only `Tracked` frames carry
/// usable pose data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TrackingState {
    None = 0,
    Calibrating = 1,
    Tracked = 2,
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// One instant's full-body pose. The joint map is partial: a joint the
/// sensor lost is simply absent, never a zero position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skeleton {
    pub state: TrackingState,
    pub joints: BTreeMap<JointType, Position>,
}

impl Skeleton {
    pub fn new(state: TrackingState) -> Self {
        Skeleton {
            state,
            joints: BTreeMap::new(),
        }
    }

    pub fn joint(&self, joint: JointType) -> Option<&Position> {
        self.joints.get(&joint)
    }
}

/// A skeleton pose paired with its capture timestamp (or, after rebasing,
/// its offset into the recording).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedFrame {
    pub skeleton: Skeleton,
    pub timestamp: Micros,
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// The fixed rig: 14 bone links forming a tree rooted at the torso/neck.
pub const LINKS: [(JointType, JointType); 14] = [
    (JointType::Head, JointType::Neck),
    (JointType::Neck, JointType::LeftShoulder),
    (JointType::Neck, JointType::RightShoulder),
    (JointType::LeftShoulder, JointType::LeftElbow),
    (JointType::LeftElbow, JointType::LeftHand),
    (JointType::RightShoulder, JointType::RightElbow),
    (JointType::RightElbow, JointType::RightHand),
    (JointType::Neck, JointType::Torso),
    (JointType::Torso, JointType::LeftHip),
    (JointType::LeftHip, JointType::LeftKnee),
    (JointType::LeftKnee, JointType::LeftFoot),
    (JointType::Torso, JointType::RightHip),
    (JointType::RightHip, JointType::RightKnee),
    (JointType::RightKnee, JointType::RightFoot),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_endpoints_are_distinct() {
        for (a, b) in LINKS {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn nite_ids_round_trip() {
        for id in 0..JointType::COUNT as u8 {
            let joint = JointType::from_nite_id(id).unwrap();
            assert_eq!(joint as u8, id);
        }
        assert_eq!(JointType::from_nite_id(15), None);
    }
}
