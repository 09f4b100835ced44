//! ptmark - bar markers for Pro Tools sessions
//!
//! Converts a tempo map's bar events into memory-location markers through the
//! Pro Tools scripting interface. This library crate exposes the core
//! functionality for integration testing.

pub mod allocator;
pub mod config;
pub mod input;
pub mod report;
pub mod runner;

#[cfg(test)]
mod test_fixtures;
