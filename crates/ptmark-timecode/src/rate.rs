//! Session timecode-rate codes and their frame rates.
//!
//! Pro Tools reports the session timecode rate as a numeric enum value. Drop
//! frame variants map to the same nominal frames-per-second as their non-drop
//! counterparts; no frame-skip counting is applied anywhere in this crate.

use std::fmt;

/// Frame rate used when a rate code is unknown or cannot be queried.
pub const DEFAULT_FPS: f64 = 30.0;

/// A session timecode rate as reported by PTSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimecodeRate {
    Fps23976,
    Fps24,
    Fps25,
    Fps2997,
    Fps2997Drop,
    Fps30,
    Fps30Drop,
    Fps47952,
    Fps48,
    Fps50,
    Fps5994,
    Fps5994Drop,
    Fps60,
    Fps60Drop,
    Fps100,
    Fps11988,
    Fps11988Drop,
    Fps120,
    Fps120Drop,
}

impl TimecodeRate {
    /// Every known rate, ordered by protocol code (1..=19).
    pub const ALL: [TimecodeRate; 19] = [
        TimecodeRate::Fps23976,
        TimecodeRate::Fps24,
        TimecodeRate::Fps25,
        TimecodeRate::Fps2997,
        TimecodeRate::Fps2997Drop,
        TimecodeRate::Fps30,
        TimecodeRate::Fps30Drop,
        TimecodeRate::Fps47952,
        TimecodeRate::Fps48,
        TimecodeRate::Fps50,
        TimecodeRate::Fps5994,
        TimecodeRate::Fps5994Drop,
        TimecodeRate::Fps60,
        TimecodeRate::Fps60Drop,
        TimecodeRate::Fps100,
        TimecodeRate::Fps11988,
        TimecodeRate::Fps11988Drop,
        TimecodeRate::Fps120,
        TimecodeRate::Fps120Drop,
    ];

    /// Look up a rate by its protocol code.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Protocol code of this rate.
    pub fn code(self) -> i32 {
        Self::ALL
            .iter()
            .position(|r| *r == self)
            .map(|idx| idx as i32 + 1)
            .unwrap_or_default()
    }

    /// Look up a rate by its protocol enum name, e.g. `STCR_Fps2997Drop`.
    pub fn from_protocol_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.protocol_name() == name)
    }

    /// Protocol enum name of this rate.
    pub fn protocol_name(self) -> &'static str {
        match self {
            TimecodeRate::Fps23976 => "STCR_Fps23976",
            TimecodeRate::Fps24 => "STCR_Fps24",
            TimecodeRate::Fps25 => "STCR_Fps25",
            TimecodeRate::Fps2997 => "STCR_Fps2997",
            TimecodeRate::Fps2997Drop => "STCR_Fps2997Drop",
            TimecodeRate::Fps30 => "STCR_Fps30",
            TimecodeRate::Fps30Drop => "STCR_Fps30Drop",
            TimecodeRate::Fps47952 => "STCR_Fps47952",
            TimecodeRate::Fps48 => "STCR_Fps48",
            TimecodeRate::Fps50 => "STCR_Fps50",
            TimecodeRate::Fps5994 => "STCR_Fps5994",
            TimecodeRate::Fps5994Drop => "STCR_Fps5994Drop",
            TimecodeRate::Fps60 => "STCR_Fps60",
            TimecodeRate::Fps60Drop => "STCR_Fps60Drop",
            TimecodeRate::Fps100 => "STCR_Fps100",
            TimecodeRate::Fps11988 => "STCR_Fps11988",
            TimecodeRate::Fps11988Drop => "STCR_Fps11988Drop",
            TimecodeRate::Fps120 => "STCR_Fps120",
            TimecodeRate::Fps120Drop => "STCR_Fps120Drop",
        }
    }

    /// Frames per second for this rate.
    pub fn fps(self) -> f64 {
        match self {
            TimecodeRate::Fps23976 => 23.976,
            TimecodeRate::Fps24 => 24.0,
            TimecodeRate::Fps25 => 25.0,
            TimecodeRate::Fps2997 | TimecodeRate::Fps2997Drop => 29.97,
            TimecodeRate::Fps30 | TimecodeRate::Fps30Drop => 30.0,
            TimecodeRate::Fps47952 => 47.952,
            TimecodeRate::Fps48 => 48.0,
            TimecodeRate::Fps50 => 50.0,
            TimecodeRate::Fps5994 | TimecodeRate::Fps5994Drop => 59.94,
            TimecodeRate::Fps60 | TimecodeRate::Fps60Drop => 60.0,
            TimecodeRate::Fps100 => 100.0,
            TimecodeRate::Fps11988 | TimecodeRate::Fps11988Drop => 119.88,
            TimecodeRate::Fps120 | TimecodeRate::Fps120Drop => 120.0,
        }
    }

    /// Whether the session labels this rate as drop-frame.
    pub fn is_drop_frame(self) -> bool {
        matches!(
            self,
            TimecodeRate::Fps2997Drop
                | TimecodeRate::Fps30Drop
                | TimecodeRate::Fps5994Drop
                | TimecodeRate::Fps60Drop
                | TimecodeRate::Fps11988Drop
                | TimecodeRate::Fps120Drop
        )
    }
}

impl fmt::Display for TimecodeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.fps())?;
        if self.is_drop_frame() {
            write!(f, " drop")?;
        }
        Ok(())
    }
}

/// Frames per second for a session rate code, [`DEFAULT_FPS`] when unknown.
///
/// ```
/// use ptmark_timecode::rate_for_code;
///
/// assert_eq!(rate_for_code(3), 25.0);
/// assert_eq!(rate_for_code(99), 30.0);
/// ```
pub fn rate_for_code(code: i32) -> f64 {
    TimecodeRate::from_code(code)
        .map(TimecodeRate::fps)
        .unwrap_or(DEFAULT_FPS)
}
