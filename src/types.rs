use std::{fmt, time::Instant};

/// Landmarks produced by the hand detector for one video frame.
#[derive(Clone, Debug)]
pub struct LandmarkFrame {
    /// Pixel coordinates in anatomical order, `None` when no hand was found.
    pub landmarks: Option<Vec<(f32, f32)>>,
    pub timestamp: Instant,
}

impl LandmarkFrame {
    pub fn new(landmarks: Option<Vec<(f32, f32)>>) -> Self {
        Self {
            landmarks,
            timestamp: Instant::now(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LetterResult {
    pub classification: Classification,
    pub timestamp: Instant,
    pub landmarks: Option<Vec<(f32, f32)>>,
}

impl LetterResult {
    pub fn display_text(&self) -> String {
        match self.classification {
            Classification::Letter(letter) => letter.to_string(),
            Classification::Unclassified if self.landmarks.is_some() => {
                "hand detected".to_string()
            }
            Classification::Unclassified => "no hand".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    pub const ALL: [Letter; 26] = [
        Letter::A, Letter::B, Letter::C, Letter::D, Letter::E, Letter::F, Letter::G, Letter::H,
        Letter::I, Letter::J, Letter::K, Letter::L, Letter::M, Letter::N, Letter::O, Letter::P,
        Letter::Q, Letter::R, Letter::S, Letter::T, Letter::U, Letter::V, Letter::W, Letter::X,
        Letter::Y, Letter::Z,
    ];

    pub fn as_char(&self) -> char {
        (b'A' + *self as u8) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Outcome of classifying one hand pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Letter(Letter),
    Unclassified,
}

impl Classification {
    pub fn letter(&self) -> Option<Letter> {
        match self {
            Classification::Letter(letter) => Some(*letter),
            Classification::Unclassified => None,
        }
    }
}

impl From<Letter> for Classification {
    fn from(letter: Letter) -> Self {
        Classification::Letter(letter)
    }
}
