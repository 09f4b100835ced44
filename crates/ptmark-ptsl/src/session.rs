use crate::types::{Credentials, MemoryLocation, NewMemoryLocation};
use crate::Result;

/// Opens sessions against a running Pro Tools instance.
#[async_trait::async_trait]
pub trait SessionConnector: Send + Sync {
    /// Register with Pro Tools and return a handle to the open session
    async fn open_session(&self, credentials: &Credentials) -> Result<Box<dyn Session>>;
}

/// An open Pro Tools session.
///
/// There is deliberately no delete operation: PTSL offers no way to remove a
/// memory location through this boundary.
#[async_trait::async_trait]
pub trait Session: Send + Sync {
    /// Name of the currently open session
    async fn session_name(&self) -> Result<String>;

    /// Raw timecode-rate code of the session
    async fn session_timecode_rate(&self) -> Result<i32>;

    /// All memory locations currently in the session
    async fn get_memory_locations(&self) -> Result<Vec<MemoryLocation>>;

    /// Create a marker at an explicit memory-location number
    async fn create_memory_location(&self, location: &NewMemoryLocation) -> Result<()>;

    /// Release the session. Called once, after the last command.
    async fn close(&self) {}
}
