use std::fmt;

use crate::landmark::{HandPose, LandmarkId, Point};

/// Euclidean distance truncated toward zero.
///
/// Every comparison in the letter decision tree runs on this truncated value,
/// so two distances that only differ in their fractional part compare equal.
/// The result saturates at `u64::MAX`.
pub fn distance(a: Point, b: Point) -> u64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    (dx * dx + dy * dy).sqrt() as u64
}

pub fn landmark_distance(pose: &HandPose, a: LandmarkId, b: LandmarkId) -> u64 {
    distance(pose[a], pose[b])
}

/// True when the wrist to middle-tip axis leans horizontal in image space:
/// the vertical pixel delta is strictly smaller than the horizontal one.
pub fn is_horizontal(pose: &HandPose) -> bool {
    let wrist = pose[LandmarkId::Wrist];
    let tip = pose[LandmarkId::MiddleTip];

    let vertical = distance(Point::new(wrist.y, 0.0), Point::new(tip.y, 0.0));
    let horizontal = distance(Point::new(wrist.x, 0.0), Point::new(tip.x, 0.0));

    vertical < horizontal
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Little,
    ];

    /// The intermediate joint compared against the tip.
    pub fn joint(self) -> LandmarkId {
        match self {
            Finger::Thumb => LandmarkId::ThumbIp,
            Finger::Index => LandmarkId::IndexPip,
            Finger::Middle => LandmarkId::MiddlePip,
            Finger::Ring => LandmarkId::RingPip,
            Finger::Little => LandmarkId::LittlePip,
        }
    }

    pub fn tip(self) -> LandmarkId {
        match self {
            Finger::Thumb => LandmarkId::ThumbTip,
            Finger::Index => LandmarkId::IndexTip,
            Finger::Middle => LandmarkId::MiddleTip,
            Finger::Ring => LandmarkId::RingTip,
            Finger::Little => LandmarkId::LittleTip,
        }
    }

    /// A finger is up when its tip lies farther from the wrist than its joint.
    pub fn is_extended(self, pose: &HandPose) -> bool {
        let to_joint = landmark_distance(pose, LandmarkId::Wrist, self.joint());
        let to_tip = landmark_distance(pose, LandmarkId::Wrist, self.tip());
        to_joint < to_tip
    }
}

/// Coarse hand shape: which fingers are up, and whether the hand lies sideways.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HandSignature {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub little: bool,
    pub horizontal: bool,
}

impl HandSignature {
    pub fn from_pose(pose: &HandPose) -> Self {
        Self {
            thumb: Finger::Thumb.is_extended(pose),
            index: Finger::Index.is_extended(pose),
            middle: Finger::Middle.is_extended(pose),
            ring: Finger::Ring.is_extended(pose),
            little: Finger::Little.is_extended(pose),
            horizontal: is_horizontal(pose),
        }
    }

    /// Packs the flags as `thumb index middle ring little horizontal`,
    /// thumb in the most significant of six bits.
    pub fn bits(&self) -> u8 {
        [
            self.thumb,
            self.index,
            self.middle,
            self.ring,
            self.little,
            self.horizontal,
        ]
        .iter()
        .fold(0u8, |acc, &flag| (acc << 1) | u8::from(flag))
    }
}

impl fmt::Display for HandSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06b}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::NUM_LANDMARKS;

    fn pose_with(points: &[(LandmarkId, (f32, f32))]) -> HandPose {
        let mut all = [Point::new(100.0, 300.0); NUM_LANDMARKS];
        for &(id, (x, y)) in points {
            all[id.index()] = Point::new(x, y);
        }
        HandPose::new(all)
    }

    #[test]
    fn distance_truncates_toward_zero() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(distance(origin, Point::new(3.0, 4.0)), 5);
        assert_eq!(distance(origin, Point::new(1.0, 1.0)), 1);
        assert_eq!(distance(origin, Point::new(2.0, 2.0)), 2);
        assert_eq!(distance(origin, Point::new(0.0, 0.9)), 0);
        assert_eq!(distance(origin, origin), 0);
        assert_eq!(distance(Point::new(10.5, 0.0), Point::new(0.0, 0.0)), 10);
    }

    #[test]
    fn distance_keeps_order_beyond_32_bits() {
        let origin = Point::new(0.0, 0.0);
        let near = distance(origin, Point::new(3e9, 4e9));
        let far = distance(origin, Point::new(6e9, 0.0));

        assert_eq!(near, 5_000_000_000);
        assert_eq!(far, 6_000_000_000);
        assert!(near < far);
    }

    #[test]
    fn distance_is_symmetric() {
        let samples = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(640.0, 480.0),
            Point::new(12.25, 7.75),
            Point::new(319.0, 1.0),
        ];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn equal_deltas_are_not_horizontal() {
        let pose = pose_with(&[
            (LandmarkId::Wrist, (100.0, 300.0)),
            (LandmarkId::MiddleTip, (130.0, 270.0)),
        ]);
        assert!(!is_horizontal(&pose));
    }

    #[test]
    fn orientation_follows_dominant_axis() {
        let sideways = pose_with(&[(LandmarkId::MiddleTip, (180.0, 290.0))]);
        assert!(is_horizontal(&sideways));

        let upright = pose_with(&[(LandmarkId::MiddleTip, (110.0, 200.0))]);
        assert!(!is_horizontal(&upright));
    }

    #[test]
    fn orientation_ignores_fractional_deltas() {
        // |dy| = 30.9 and |dx| = 30.2 both truncate to 30
        let pose = pose_with(&[(LandmarkId::MiddleTip, (130.2, 269.1))]);
        assert!(!is_horizontal(&pose));
    }

    #[test]
    fn finger_is_up_when_tip_is_farther_than_joint() {
        let pose = pose_with(&[
            (LandmarkId::IndexPip, (100.0, 270.0)),
            (LandmarkId::IndexTip, (100.0, 220.0)),
            (LandmarkId::MiddlePip, (110.0, 250.0)),
            (LandmarkId::MiddleTip, (110.0, 280.0)),
        ]);

        assert!(Finger::Index.is_extended(&pose));
        assert!(!Finger::Middle.is_extended(&pose));
        // joint and tip both on the wrist: equal distances
        assert!(!Finger::Ring.is_extended(&pose));
    }

    #[test]
    fn signature_collects_all_flags() {
        let pose = pose_with(&[
            (LandmarkId::ThumbIp, (80.0, 290.0)),
            (LandmarkId::ThumbTip, (60.0, 280.0)),
            (LandmarkId::LittlePip, (140.0, 280.0)),
            (LandmarkId::LittleTip, (140.0, 240.0)),
        ]);

        let signature = HandSignature::from_pose(&pose);
        assert_eq!(
            signature,
            HandSignature {
                thumb: true,
                little: true,
                ..HandSignature::default()
            }
        );
        assert_eq!(signature.bits(), 0b100010);
        assert_eq!(signature.to_string(), "100010");
    }

    #[test]
    fn finger_landmarks_pair_joint_with_tip() {
        let pairs: Vec<(usize, usize)> = Finger::ALL
            .iter()
            .map(|f| (f.joint().index(), f.tip().index()))
            .collect();
        assert_eq!(pairs, vec![(3, 4), (6, 8), (10, 12), (14, 16), (18, 20)]);
    }
}
