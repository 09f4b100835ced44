//! ptmark-timecode: timecode arithmetic for marker placement.
//!
//! This crate provides:
//!
//! - **Timecode**: `HH:MM:SS:FF` parsing, formatting and frame conversion
//! - **Rates**: the Pro Tools session timecode-rate table and its fps values
//! - **Arithmetic**: shifting a start timecode by elapsed seconds
//!
//! # Examples
//!
//! ```
//! use ptmark_timecode::{add_seconds, rate_for_code};
//!
//! let fps = rate_for_code(6);
//! assert_eq!(add_seconds("01:00:00:00", 2.0, fps).unwrap(), "01:00:02:00");
//! ```

pub mod error;
pub mod rate;
pub mod timecode;

pub use error::{Result, TimecodeError};
pub use rate::{rate_for_code, TimecodeRate, DEFAULT_FPS};
pub use timecode::{add_seconds, Timecode};
