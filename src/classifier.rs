//! Fingerspelling letter classifier.
//!
//! A pose is first reduced to a [`HandSignature`] (which fingers are up and
//! whether the hand lies sideways). Each known signature then picks between
//! the letters that share that coarse shape by comparing truncated distances
//! between a handful of landmarks. Comparisons are strict throughout: a tie
//! falls through to the next branch, and a signature or branch chain with no
//! match yields [`Classification::Unclassified`].

use rayon::prelude::*;

use crate::{
    geometry::{HandSignature, landmark_distance},
    landmark::{HandPose, LandmarkId::*},
    types::{Classification, Letter},
};

pub fn classify(pose: &HandPose) -> Classification {
    let signature = HandSignature::from_pose(pose);
    let classification = match letter_for_signature(pose, &signature) {
        Some(letter) => Classification::Letter(letter),
        None => Classification::Unclassified,
    };

    log::debug!("signature {signature} -> {classification:?}");
    classification
}

/// Classifies independent poses in parallel, preserving input order.
pub fn classify_batch(poses: &[HandPose]) -> Vec<Classification> {
    poses.par_iter().map(classify).collect()
}

fn letter_for_signature(pose: &HandPose, s: &HandSignature) -> Option<Letter> {
    match (s.thumb, s.index, s.middle, s.ring, s.little, s.horizontal) {
        (true, false, false, false, false, false) => Some(thumb_beside_fist(pose)),
        (true, true, true, true, true, false) => open_hand(pose),
        (false, false, false, false, false, false) => Some(closed_fist(pose)),
        (true, false, true, true, true, false) => Some(Letter::F),
        (true, true, false, false, false, true) => Some(sideways_index(pose)),
        (true, true, true, false, false, true) => Some(sideways_two_fingers(pose)),
        (false, false, false, false, true, false) => Some(Letter::I),
        (false, false, false, false, true, true) => Some(Letter::J),
        (true, true, true, false, false, false) => two_fingers_with_thumb(pose),
        (true, true, false, false, false, false) => Some(index_with_thumb(pose)),
        (false, true, true, false, false, false) => Some(two_fingers(pose)),
        (true, true, true, true, false, false) => Some(Letter::W),
        (true, false, false, false, true, false) => Some(thumb_and_little(pose)),
        _ => None,
    }
}

/// O, M, N, T, A: where the thumb tip rests against the folded fingers.
fn thumb_beside_fist(pose: &HandPose) -> Letter {
    let d = |a, b| landmark_distance(pose, a, b);
    let thumb_to_little = d(ThumbTip, LittlePip);

    if d(ThumbTip, RingTip) < d(ThumbTip, RingMcp) {
        Letter::O
    } else if thumb_to_little < d(RingPip, LittlePip) {
        Letter::M
    } else if thumb_to_little < d(MiddlePip, LittlePip) {
        Letter::N
    } else if thumb_to_little < d(IndexPip, LittlePip) {
        Letter::T
    } else {
        Letter::A
    }
}

/// C curls the thumb toward the middle tip, B tucks it across the palm.
/// Any other open hand stays unclassified.
fn open_hand(pose: &HandPose) -> Option<Letter> {
    let d = |a, b| landmark_distance(pose, a, b);

    if d(ThumbTip, MiddleTip) < d(ThumbTip, MiddleDip) {
        Some(Letter::C)
    } else if d(ThumbTip, LittleMcp) < d(ThumbTip, IndexMcp) {
        Some(Letter::B)
    } else {
        None
    }
}

fn closed_fist(pose: &HandPose) -> Letter {
    let d = |a, b| landmark_distance(pose, a, b);

    if d(LittleTip, ThumbTip) < d(LittleDip, ThumbTip) {
        Letter::E
    } else {
        Letter::S
    }
}

fn sideways_index(pose: &HandPose) -> Letter {
    let d = |a, b| landmark_distance(pose, a, b);

    if d(IndexTip, ThumbTip) < d(IndexPip, ThumbTip) {
        Letter::Q
    } else if d(MiddleTip, ThumbTip) < d(MiddlePip, ThumbTip) {
        Letter::P
    } else {
        Letter::G
    }
}

fn sideways_two_fingers(pose: &HandPose) -> Letter {
    let d = |a, b| landmark_distance(pose, a, b);

    if d(MiddleTip, ThumbTip) < d(MiddlePip, ThumbTip) {
        Letter::P
    } else {
        Letter::H
    }
}

fn two_fingers_with_thumb(pose: &HandPose) -> Option<Letter> {
    let d = |a, b| landmark_distance(pose, a, b);

    if fingers_crossed(pose) {
        Some(Letter::R)
    } else if d(ThumbTip, RingPip) < d(MiddleMcp, RingPip) {
        Some(spread_or_together(pose))
    } else if d(ThumbTip, RingPip) < d(IndexMcp, RingPip) {
        Some(Letter::K)
    } else {
        None
    }
}

fn index_with_thumb(pose: &HandPose) -> Letter {
    let d = |a, b| landmark_distance(pose, a, b);

    if d(ThumbIp, RingPip) < d(RingPip, ThumbTip) {
        Letter::L
    } else if d(IndexTip, MiddlePip) < d(IndexPip, MiddlePip) {
        Letter::X
    } else {
        Letter::D
    }
}

fn two_fingers(pose: &HandPose) -> Letter {
    if fingers_crossed(pose) {
        Letter::R
    } else {
        spread_or_together(pose)
    }
}

fn thumb_and_little(pose: &HandPose) -> Letter {
    let d = |a, b| landmark_distance(pose, a, b);

    if d(ThumbIp, LittlePip) < d(ThumbTip, LittlePip) {
        Letter::Y
    } else {
        Letter::I
    }
}

/// Index tip left of the middle tip in image space.
fn fingers_crossed(pose: &HandPose) -> bool {
    pose[IndexTip].x < pose[MiddleTip].x
}

/// V when the two raised tips are more than twice the knuckle gap apart.
fn spread_or_together(pose: &HandPose) -> Letter {
    let d = |a, b| landmark_distance(pose, a, b);
    let knuckle_gap = d(IndexMcp, MiddleMcp);

    if knuckle_gap.saturating_mul(2) < d(IndexTip, MiddleTip) {
        Letter::V
    } else {
        Letter::U
    }
}
