//! One invocation against a Pro Tools session, from connect to release.

use crate::allocator::{place_bar_markers, SlotAllocator};
use crate::input::BarEvent;
use crate::report::Report;
use futures::FutureExt;
use ptmark_ptsl::{Credentials, MemoryLocation, Session, SessionConnector};
use ptmark_timecode::{rate_for_code, Timecode, TimecodeRate, DEFAULT_FPS};
use std::panic::AssertUnwindSafe;

/// Per-run settings that do not come from the bar data.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Advisory only: existing markers cannot be removed through PTSL
    pub clear_existing: bool,
    pub first_slot: u32,
    pub log_first: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            clear_existing: false,
            first_slot: 1,
            log_first: 5,
        }
    }
}

/// Create bar markers in the session reachable through `connector`.
///
/// Always yields a report. A connection failure is the only failing outcome.
/// Once opened, the session is closed on every path; a panic during placement
/// is resumed only after the close.
pub async fn create_bar_markers(
    connector: &dyn SessionConnector,
    credentials: &Credentials,
    bars: &[BarEvent],
    start: &Timecode,
    options: &RunOptions,
) -> Report {
    let session = match connector.open_session(credentials).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to connect to Pro Tools: {}", e);
            return Report::failure(format!("Failed to connect to Pro Tools: {}", e));
        }
    };

    let outcome = AssertUnwindSafe(run_session(session.as_ref(), bars, start, options))
        .catch_unwind()
        .await;
    session.close().await;

    match outcome {
        Ok(created) => Report::created(created),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

async fn run_session(
    session: &dyn Session,
    bars: &[BarEvent],
    start: &Timecode,
    options: &RunOptions,
) -> u32 {
    let fps = session_frame_rate(session).await;
    let existing = existing_locations(session).await;

    if options.clear_existing && !existing.is_empty() {
        tracing::info!(
            "Note: Found {} existing memory locations (clearing is not supported, leaving them in place)",
            existing.len()
        );
    }

    let mut allocator = SlotAllocator::from_locations(options.first_slot, &existing);
    let placement =
        place_bar_markers(session, &mut allocator, bars, start, fps, options.log_first).await;

    if placement.failed > 0 {
        tracing::warn!(
            "{} of {} bar markers could not be created",
            placement.failed,
            bars.len()
        );
    }

    placement.created
}

/// Frame rate of the session, [`DEFAULT_FPS`] when it cannot be read.
pub async fn session_frame_rate(session: &dyn Session) -> f64 {
    match session.session_name().await {
        Ok(name) => tracing::info!("Session: {}", name),
        Err(e) => tracing::warn!("Could not get session name: {}", e),
    }

    match session.session_timecode_rate().await {
        Ok(code) => {
            let fps = rate_for_code(code);
            match TimecodeRate::from_code(code) {
                Some(rate) => tracing::info!("Timecode rate: {} ({}), using {} fps", code, rate, fps),
                None => tracing::warn!("Unknown timecode rate {}, using {} fps", code, fps),
            }
            fps
        }
        Err(e) => {
            tracing::warn!(
                "Could not get session timecode rate ({}), using {} fps",
                e,
                DEFAULT_FPS
            );
            DEFAULT_FPS
        }
    }
}

/// Memory locations already in the session, empty when they cannot be read.
pub async fn existing_locations(session: &dyn Session) -> Vec<MemoryLocation> {
    match session.get_memory_locations().await {
        Ok(locations) => {
            tracing::info!("Found {} existing memory locations", locations.len());
            locations
        }
        Err(e) => {
            tracing::warn!("Could not get existing locations: {}", e);
            Vec::new()
        }
    }
}
