//! Request and response payloads for the PTSL commands used by ptmark.

use serde::{Deserialize, Serialize};

/// Identity presented when registering a connection with Pro Tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub company_name: String,
    pub application_name: String,
}

impl Credentials {
    pub fn new(company_name: impl Into<String>, application_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            application_name: application_name.into(),
        }
    }
}

/// A memory location already present in the session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryLocation {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_time: String,
}

/// A marker to be created at an explicit slot number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemoryLocation {
    pub number: u32,
    pub name: String,
    pub start_time: String,
}

/// PTSL command identifiers used by ptmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    RegisterConnection,
    GetSessionName,
    GetSessionTimeCodeRate,
    GetMemoryLocations,
    CreateMemoryLocation,
}

impl CommandId {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandId::RegisterConnection => "CId_RegisterConnection",
            CommandId::GetSessionName => "CId_GetSessionName",
            CommandId::GetSessionTimeCodeRate => "CId_GetSessionTimeCodeRate",
            CommandId::GetMemoryLocations => "CId_GetMemoryLocations",
            CommandId::CreateMemoryLocation => "CId_CreateMemoryLocation",
        }
    }
}

/// Outgoing request envelope.
#[derive(Debug, Serialize)]
pub(crate) struct RequestEnvelope<'a> {
    pub header: RequestHeader<'a>,
    pub request_body_json: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestHeader<'a> {
    pub task_id: &'a str,
    pub command: &'static str,
    pub version: u32,
    pub session_id: &'a str,
}

/// Incoming response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    pub header: ResponseHeader,
    #[serde(default)]
    pub response_body_json: String,
    #[serde(default)]
    pub response_error_json: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseHeader {
    #[serde(default)]
    pub status: String,
}

pub(crate) const STATUS_COMPLETED: &str = "Completed";

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterConnectionResponse {
    #[serde(default)]
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionNameResponse {
    #[serde(default)]
    pub session_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimeCodeRateResponse {
    #[serde(default)]
    pub current_setting: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemoryLocationsResponse {
    #[serde(default)]
    pub memory_locations: Vec<MemoryLocation>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateMemoryLocationRequest<'a> {
    pub number: u32,
    pub name: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub time_properties: &'static str,
    pub reference: &'static str,
    pub comments: &'a str,
    pub location: &'static str,
}

impl<'a> CreateMemoryLocationRequest<'a> {
    /// A main-ruler marker following the track timebase.
    pub fn marker(location: &'a NewMemoryLocation) -> Self {
        Self {
            number: location.number,
            name: &location.name,
            start_time: &location.start_time,
            end_time: "",
            time_properties: "TP_Marker",
            reference: "MLR_FollowTrackTimebase",
            comments: "",
            location: "MLC_MainRuler",
        }
    }
}
