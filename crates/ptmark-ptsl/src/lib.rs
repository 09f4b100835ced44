//! ptmark-ptsl: the Pro Tools session boundary.
//!
//! [`SessionConnector`] and [`Session`] are the capabilities the marker
//! allocator is written against. [`PtslClient`] implements them by posting
//! PTSL request envelopes as JSON to an HTTP endpoint that fronts the
//! Pro Tools scripting service.

pub mod client;
pub mod error;
pub mod session;
pub mod types;

pub use client::{ClientOptions, PtslClient, PtslSession};
pub use error::{Error, Result};
pub use session::{Session, SessionConnector};
pub use types::{CommandId, Credentials, MemoryLocation, NewMemoryLocation};
