//! The single JSON result printed to stdout.

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::io;

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub success: bool,
    pub message: String,
    pub markers_created: u32,
}

impl Report {
    /// A completed run, including runs where some bars failed.
    pub fn created(markers_created: u32) -> Self {
        Self {
            success: true,
            message: format!("Created {} bar markers in Pro Tools", markers_created),
            markers_created,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            markers_created: 0,
        }
    }

    /// Serialize with `", "` and `": "` separators.
    ///
    /// The host application matches the literal text `"success": true`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
