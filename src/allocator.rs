//! Memory-location slot allocation and marker placement.
//!
//! Each bar gets the lowest memory-location number not already used in the
//! session. Existing markers are never touched or renumbered.

use crate::input::BarEvent;
use ptmark_ptsl::{MemoryLocation, NewMemoryLocation, Session};
use ptmark_timecode::Timecode;
use std::collections::BTreeSet;

/// Tracks which memory-location numbers are taken.
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    occupied: BTreeSet<u32>,
    first_slot: u32,
}

impl SlotAllocator {
    pub fn new(occupied: impl IntoIterator<Item = u32>) -> Self {
        Self::with_first_slot(1, occupied)
    }

    /// Allocator that never hands out numbers below `first_slot`.
    pub fn with_first_slot(first_slot: u32, occupied: impl IntoIterator<Item = u32>) -> Self {
        Self {
            occupied: occupied.into_iter().collect(),
            first_slot: first_slot.max(1),
        }
    }

    /// Seed from the locations already in the session.
    pub fn from_locations(first_slot: u32, locations: &[MemoryLocation]) -> Self {
        Self::with_first_slot(first_slot, locations.iter().map(|l| l.number))
    }

    /// Smallest free number at or above the first slot.
    pub fn next_free(&self) -> u32 {
        let mut slot = self.first_slot;
        while self.occupied.contains(&slot) {
            slot += 1;
        }
        slot
    }

    pub fn mark_used(&mut self, slot: u32) {
        self.occupied.insert(slot);
    }

    pub fn is_used(&self, slot: u32) -> bool {
        self.occupied.contains(&slot)
    }

    pub fn occupied(&self) -> &BTreeSet<u32> {
        &self.occupied
    }
}

/// Marker label for a bar, e.g. `Bar 12 - 120.0 BPM`.
pub fn marker_name(bar: &BarEvent) -> String {
    format!("Bar {} - {:.1} BPM", bar.bar_number, bar.bpm)
}

/// Outcome of placing a batch of bar markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub created: u32,
    pub failed: u32,
    /// Slot numbers of the markers that were created, in creation order
    pub slots: Vec<u32>,
}

/// Create one marker per bar, strictly in input order.
///
/// A bar that fails is logged and skipped; the loop never aborts. A slot whose
/// creation request failed is retired, since the request may still have
/// reached the session.
pub async fn place_bar_markers(
    session: &dyn Session,
    allocator: &mut SlotAllocator,
    bars: &[BarEvent],
    start: &Timecode,
    fps: f64,
    log_first: usize,
) -> Placement {
    let mut placement = Placement::default();

    for bar in bars {
        let name = marker_name(bar);

        let timecode = match start.offset_by_seconds(bar.time, fps) {
            Ok(tc) => tc,
            Err(e) => {
                tracing::warn!("Skipping marker {}: {}", name, e);
                placement.failed += 1;
                continue;
            }
        };

        let slot = allocator.next_free();
        let location = NewMemoryLocation {
            number: slot,
            name,
            start_time: timecode.to_string(),
        };

        match session.create_memory_location(&location).await {
            Ok(()) => {
                allocator.mark_used(slot);
                placement.created += 1;
                placement.slots.push(slot);
                if placement.created as usize <= log_first {
                    tracing::info!(
                        "Created marker #{}: {} at {}",
                        slot,
                        location.name,
                        location.start_time
                    );
                }
            }
            Err(e) => {
                tracing::warn!("Failed to create marker {}: {}", location.name, e);
                allocator.mark_used(slot);
                placement.failed += 1;
            }
        }
    }

    if placement.created as usize > log_first {
        tracing::info!("... and {} more markers", placement.created as usize - log_first);
    }

    placement
}
