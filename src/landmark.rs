use std::ops::Index;

use thiserror::Error;

pub const NUM_LANDMARKS: usize = 21;

/// Anatomical position of a tracked hand landmark, in detector output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkId {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    LittleMcp = 17,
    LittlePip = 18,
    LittleDip = 19,
    LittleTip = 20,
}

impl LandmarkId {
    pub const ALL: [LandmarkId; NUM_LANDMARKS] = [
        LandmarkId::Wrist,
        LandmarkId::ThumbCmc,
        LandmarkId::ThumbMcp,
        LandmarkId::ThumbIp,
        LandmarkId::ThumbTip,
        LandmarkId::IndexMcp,
        LandmarkId::IndexPip,
        LandmarkId::IndexDip,
        LandmarkId::IndexTip,
        LandmarkId::MiddleMcp,
        LandmarkId::MiddlePip,
        LandmarkId::MiddleDip,
        LandmarkId::MiddleTip,
        LandmarkId::RingMcp,
        LandmarkId::RingPip,
        LandmarkId::RingDip,
        LandmarkId::RingTip,
        LandmarkId::LittleMcp,
        LandmarkId::LittlePip,
        LandmarkId::LittleDip,
        LandmarkId::LittleTip,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A landmark position in image pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoseError {
    #[error("expected {expected} landmarks, got {got}")]
    LandmarkCount { expected: usize, got: usize },

    #[error("landmark index {index} is out of range 0..21")]
    IndexOutOfRange { index: usize },

    #[error("landmark {index} appears more than once")]
    DuplicateLandmark { index: usize },

    #[error("landmark {index} is missing")]
    MissingLandmark { index: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// The 21 landmarks of one detected hand in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPose {
    points: [Point; NUM_LANDMARKS],
}

impl HandPose {
    pub const fn new(points: [Point; NUM_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Builds a pose from points already in anatomical order.
    pub fn from_points(points: &[(f32, f32)]) -> Result<Self, PoseError> {
        if points.len() != NUM_LANDMARKS {
            return Err(PoseError::LandmarkCount {
                expected: NUM_LANDMARKS,
                got: points.len(),
            });
        }

        let mut pose = [Point::default(); NUM_LANDMARKS];
        for (index, (slot, &raw)) in pose.iter_mut().zip(points).enumerate() {
            let point = Point::from(raw);
            if !point.is_finite() {
                return Err(PoseError::NonFinite { index });
            }
            *slot = point;
        }

        Ok(Self::new(pose))
    }

    /// Builds a pose from `(index, x, y)` rows in any order. Every index in
    /// `0..21` must appear exactly once.
    pub fn from_indexed(rows: &[(usize, f32, f32)]) -> Result<Self, PoseError> {
        let mut slots: [Option<Point>; NUM_LANDMARKS] = [None; NUM_LANDMARKS];

        for &(index, x, y) in rows {
            let slot = slots
                .get_mut(index)
                .ok_or(PoseError::IndexOutOfRange { index })?;
            if slot.is_some() {
                return Err(PoseError::DuplicateLandmark { index });
            }
            let point = Point::new(x, y);
            if !point.is_finite() {
                return Err(PoseError::NonFinite { index });
            }
            *slot = Some(point);
        }

        let mut points = [Point::default(); NUM_LANDMARKS];
        for (index, (point, slot)) in points.iter_mut().zip(slots).enumerate() {
            *point = slot.ok_or(PoseError::MissingLandmark { index })?;
        }

        Ok(Self::new(points))
    }

    pub fn point(&self, id: LandmarkId) -> Point {
        self.points[id.index()]
    }

    pub fn points(&self) -> &[Point; NUM_LANDMARKS] {
        &self.points
    }

    pub fn to_tuples(&self) -> Vec<(f32, f32)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }
}

impl Index<LandmarkId> for HandPose {
    type Output = Point;

    fn index(&self, id: LandmarkId) -> &Point {
        &self.points[id.index()]
    }
}
