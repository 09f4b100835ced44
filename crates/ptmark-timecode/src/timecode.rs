//! `HH:MM:SS:FF` timecode parsing and seconds arithmetic.

use crate::{Result, TimecodeError};
use std::fmt;
use std::str::FromStr;

/// A non-drop SMPTE-style timecode.
///
/// Fields are not range checked on parse; arithmetic normalizes them. Hours
/// are unbounded and never wrap at 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timecode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Timecode {
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Absolute frame count from `00:00:00:00`.
    ///
    /// The whole seconds are scaled by the real rate and truncated before the
    /// frame field is added, so at 23.976 one hour is 86313 frames.
    pub fn to_frames(&self, fps: f64) -> Result<i64> {
        check_rate(fps)?;
        let whole_seconds =
            i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds);
        let scaled = seconds_to_frames(whole_seconds as f64, fps)?;
        scaled
            .checked_add(i64::from(self.frames))
            .ok_or(TimecodeError::OutOfRange(scaled))
    }

    /// Build a timecode from an absolute frame count.
    ///
    /// Fields are split at `3600 * fps`, `60 * fps` and `fps` frames using the
    /// real rate; the frame field is the truncated remainder and stays below
    /// `fps`.
    pub fn from_frames(total: i64, fps: f64) -> Result<Self> {
        check_rate(fps)?;
        if total < 0 {
            return Err(TimecodeError::BeforeZero { frames: -total });
        }

        let (hours, remaining) = split(total as f64, 3600.0 * fps);
        let (minutes, remaining) = split(remaining, 60.0 * fps);
        let (seconds, remaining) = split(remaining, fps);

        if hours > f64::from(u32::MAX) {
            return Err(TimecodeError::OutOfRange(total));
        }

        Ok(Self {
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            frames: remaining.trunc() as u32,
        })
    }

    /// Shift by elapsed seconds at the given rate.
    ///
    /// The seconds are converted to frames and truncated toward zero, so a
    /// negative delta of -0.5 frames moves nothing.
    pub fn offset_by_seconds(&self, delta_seconds: f64, fps: f64) -> Result<Self> {
        let start = self.to_frames(fps)?;
        let delta = seconds_to_frames(delta_seconds, fps)?;
        let total = start
            .checked_add(delta)
            .ok_or(TimecodeError::OutOfRange(delta))?;
        Self::from_frames(total, fps)
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 4 {
            return Err(TimecodeError::malformed(s));
        }

        let mut parsed = [0u32; 4];
        for (slot, field) in parsed.iter_mut().zip(&fields) {
            let field = field.trim();
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimecodeError::malformed(s));
            }
            *slot = field.parse().map_err(|_| TimecodeError::malformed(s))?;
        }

        Ok(Self::new(parsed[0], parsed[1], parsed[2], parsed[3]))
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

/// Add elapsed seconds to a `HH:MM:SS:FF` string at the given frame rate.
///
/// ```
/// use ptmark_timecode::add_seconds;
///
/// assert_eq!(add_seconds("01:00:00:00", 2.0, 30.0).unwrap(), "01:00:02:00");
/// assert_eq!(add_seconds("00:00:59:29", 1.0, 30.0).unwrap(), "00:01:00:00");
/// ```
pub fn add_seconds(base: &str, delta_seconds: f64, fps: f64) -> Result<String> {
    let base: Timecode = base.parse()?;
    Ok(base.offset_by_seconds(delta_seconds, fps)?.to_string())
}

fn check_rate(fps: f64) -> Result<()> {
    if !fps.is_finite() || fps < 1.0 {
        return Err(TimecodeError::InvalidFrameRate(fps));
    }
    Ok(())
}

/// Quotient and remainder of `value / unit` for non-negative values.
fn split(value: f64, unit: f64) -> (f64, f64) {
    let remainder = value % unit;
    (((value - remainder) / unit).round(), remainder)
}

fn seconds_to_frames(seconds: f64, fps: f64) -> Result<i64> {
    let frames = (seconds * fps).trunc();
    if !frames.is_finite() || frames.abs() >= i64::MAX as f64 {
        return Err(TimecodeError::OutOfRange(i64::MAX));
    }
    Ok(frames as i64)
}
