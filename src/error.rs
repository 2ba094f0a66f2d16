//! Error taxonomy for header normalization and segment reads.
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItabError {
    /// Neither the date nor the time string matched a supported format.
    #[error("illegal acquisition date/time: {date:?} {time:?}")]
    InvalidTimestamp { date: String, time: String },

    /// The assembled measurement info failed its cross-check.
    #[error("inconsistent measurement info: {0}")]
    InconsistentMetadata(String),

    /// `start >= stop` after clamping `stop` to the recording length.
    #[error("no data in sample range [{start}, {stop})")]
    EmptyRange { start: usize, stop: usize },

    #[error("channel index {index} out of range ({n_chan} channels)")]
    ChannelIndex { index: usize, n_chan: usize },

    #[error("shape mismatch for {what}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ItabError>;
