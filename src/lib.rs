//! Fingerspelling letter recognition from 21 hand landmarks.
//!
//! [`classify`] is a pure function of one [`HandPose`]. The rest of the crate
//! is plumbing around it: a worker that classifies landmark frames arriving on
//! a channel, a history of recognised letters, and a parser for landmark
//! dumps.

pub mod classifier;
pub mod config;
pub mod geometry;
pub mod history;
pub mod landmark;
pub mod landmark_file;
pub mod recognizer;
pub mod types;

pub use classifier::{classify, classify_batch};
pub use config::{ConfigError, RecognizerConfig};
pub use history::{HistoryEntry, LetterHistory};
pub use landmark::{HandPose, LandmarkId, Point, PoseError};
pub use recognizer::start_recognizer;
pub use types::{Classification, LandmarkFrame, Letter, LetterResult};
