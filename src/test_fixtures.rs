use ptmark_ptsl::{
    Credentials, Error, MemoryLocation, NewMemoryLocation, Result, Session, SessionConnector,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Scripted behaviour and recorded calls of a fake session.
#[derive(Debug, Default)]
pub struct FakeState {
    pub name: String,
    /// `None` makes the rate query fail
    pub rate_code: Option<i32>,
    /// `None` makes the location query fail
    pub existing: Option<Vec<MemoryLocation>>,
    pub fail_slots: HashSet<u32>,
    pub panic_slots: HashSet<u32>,
    pub refuse_connection: bool,
    pub attempts: Vec<u32>,
    pub created: Vec<NewMemoryLocation>,
    pub opened: usize,
    pub closed: usize,
}

#[derive(Clone, Default)]
pub struct FakeConnector {
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeConnector {
    /// An empty 30 fps session named "Test Session".
    pub fn new() -> Self {
        let connector = Self::default();
        {
            let mut state = connector.state.lock().unwrap();
            state.name = "Test Session".to_string();
            state.rate_code = Some(6);
            state.existing = Some(Vec::new());
        }
        connector
    }

    pub fn with_existing(self, numbers: &[u32]) -> Self {
        self.state.lock().unwrap().existing = Some(
            numbers
                .iter()
                .map(|n| MemoryLocation {
                    number: *n,
                    name: format!("Existing {n}"),
                    start_time: "00:00:00:00".to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn with_rate(self, rate_code: Option<i32>) -> Self {
        self.state.lock().unwrap().rate_code = rate_code;
        self
    }

    pub fn failing_locations(self) -> Self {
        self.state.lock().unwrap().existing = None;
        self
    }

    pub fn failing_slots(self, slots: &[u32]) -> Self {
        self.state.lock().unwrap().fail_slots = slots.iter().copied().collect();
        self
    }

    pub fn panicking_slots(self, slots: &[u32]) -> Self {
        self.state.lock().unwrap().panic_slots = slots.iter().copied().collect();
        self
    }

    pub fn refusing(self) -> Self {
        self.state.lock().unwrap().refuse_connection = true;
        self
    }

    pub fn created(&self) -> Vec<NewMemoryLocation> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn attempts(&self) -> Vec<u32> {
        self.state.lock().unwrap().attempts.clone()
    }

    pub fn session(&self) -> FakeSession {
        FakeSession {
            state: self.state.clone(),
        }
    }
}

#[async_trait::async_trait]
impl SessionConnector for FakeConnector {
    async fn open_session(&self, _credentials: &Credentials) -> Result<Box<dyn Session>> {
        let mut state = self.state.lock().unwrap();
        if state.refuse_connection {
            return Err(Error::NotConnected);
        }
        state.opened += 1;
        Ok(Box::new(self.session()))
    }
}

pub struct FakeSession {
    state: Arc<Mutex<FakeState>>,
}

#[async_trait::async_trait]
impl Session for FakeSession {
    async fn session_name(&self) -> Result<String> {
        Ok(self.state.lock().unwrap().name.clone())
    }

    async fn session_timecode_rate(&self) -> Result<i32> {
        self.state
            .lock()
            .unwrap()
            .rate_code
            .ok_or_else(|| Error::command("CId_GetSessionTimeCodeRate", "Failed", "no session"))
    }

    async fn get_memory_locations(&self) -> Result<Vec<MemoryLocation>> {
        self.state
            .lock()
            .unwrap()
            .existing
            .clone()
            .ok_or_else(|| Error::command("CId_GetMemoryLocations", "Failed", "no session"))
    }

    async fn create_memory_location(&self, location: &NewMemoryLocation) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.attempts.push(location.number);
        if state.panic_slots.contains(&location.number) {
            drop(state);
            panic!("session went away creating slot {}", location.number);
        }
        if state.fail_slots.contains(&location.number) {
            return Err(Error::command(
                "CId_CreateMemoryLocation",
                "Failed",
                "slot rejected",
            ));
        }
        state.created.push(location.clone());
        Ok(())
    }

    async fn close(&self) {
        self.state.lock().unwrap().closed += 1;
    }
}
