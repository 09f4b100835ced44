//! Bar-event input: the JSON document handed over by the host application.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One bar of the tempo map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEvent {
    pub bar_number: u32,
    /// Seconds from the session start timecode
    pub time: f64,
    pub bpm: f64,
}

/// Top-level input document: `{"bars": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarInput {
    pub bars: Vec<BarEvent>,
}

/// Return the JSON text for a command-line argument that is either the JSON
/// itself or the path of a file holding it.
pub fn resolve_json_argument(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if path.exists() {
        tracing::debug!("Reading bar data from {:?}", path);
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON file: {:?}", path));
    }
    Ok(arg.to_string())
}

/// Parse the bar list out of the input document.
pub fn parse_bars(json: &str) -> Result<Vec<BarEvent>> {
    let input: BarInput = serde_json::from_str(json).context("Invalid bar data")?;
    Ok(input.bars)
}
