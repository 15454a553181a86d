use thiserror::Error;

use crate::history::DEFAULT_HISTORY_CAPACITY;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("history capacity must be greater than 0")]
    InvalidHistoryCapacity,

    #[error("channel capacity must be greater than 0")]
    InvalidChannelCapacity,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Letters kept in the history before the oldest is dropped.
    pub history_capacity: usize,
    /// Skip queued frames and classify only the newest one.
    pub drop_stale_frames: bool,
    /// Bound of the frame and result channels.
    pub channel_capacity: usize,
}

impl RecognizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidHistoryCapacity);
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::InvalidChannelCapacity);
        }
        Ok(())
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            drop_stale_frames: true,
            channel_capacity: 1,
        }
    }
}
