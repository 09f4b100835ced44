//! Error types for ptmark-timecode.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur while parsing or shifting a timecode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimecodeError {
    /// The string is not four colon-delimited unsigned integer fields.
    #[error("malformed timecode '{input}': expected HH:MM:SS:FF")]
    Malformed { input: String },

    /// The frame rate cannot be used for arithmetic.
    #[error("invalid frame rate: {0}")]
    InvalidFrameRate(f64),

    /// Shifting moved the position before 00:00:00:00.
    #[error("timecode would fall {frames} frames before 00:00:00:00")]
    BeforeZero { frames: i64 },

    /// The frame count does not fit the timecode fields.
    #[error("timecode out of range: {0} frames")]
    OutOfRange(i64),
}

impl TimecodeError {
    /// Create a malformed-timecode error.
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
        }
    }
}
