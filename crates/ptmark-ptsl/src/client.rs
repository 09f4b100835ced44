use crate::session::{Session, SessionConnector};
use crate::types::{
    CommandId, CreateMemoryLocationRequest, Credentials, MemoryLocation, MemoryLocationsResponse,
    NewMemoryLocation, RegisterConnectionResponse, RequestEnvelope, RequestHeader,
    ResponseEnvelope, SessionNameResponse, TimeCodeRateResponse, STATUS_COMPLETED,
};
use crate::{Error, Result};
use ptmark_timecode::TimecodeRate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Path of the request/response RPC on the PTSL endpoint
pub const SEND_REQUEST_PATH: &str = "/ptsl.PTSL/SendGrpcRequest";

/// Default PTSL endpoint on the local machine
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:31416";

/// Connection settings for [`PtslClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: String,
    pub timeout: Duration,
    pub version: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            version: 1,
        }
    }
}

/// PTSL client speaking the request envelope as JSON over HTTP.
#[derive(Clone)]
pub struct PtslClient {
    client: Client,
    url: String,
    version: u32,
}

impl PtslClient {
    pub fn new(options: &ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            url: format!(
                "{}{}",
                options.endpoint.trim_end_matches('/'),
                SEND_REQUEST_PATH
            ),
            version: options.version,
        }
    }

    /// Send one command and return its decoded response body.
    async fn send<B, R>(&self, command: CommandId, session_id: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let task_id = uuid::Uuid::new_v4().to_string();
        let envelope = RequestEnvelope {
            header: RequestHeader {
                task_id: &task_id,
                command: command.as_str(),
                version: self.version,
                session_id,
            },
            request_body_json: serde_json::to_string(body)?,
        };

        tracing::trace!("PTSL {} (task {})", command.as_str(), task_id);

        let response = self.client.post(&self.url).json(&envelope).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }

        let envelope: ResponseEnvelope = response.json().await?;
        if envelope.header.status != STATUS_COMPLETED {
            return Err(Error::command(
                command.as_str(),
                envelope.header.status,
                envelope.response_error_json,
            ));
        }

        decode_body(&envelope.response_body_json)
    }
}

#[async_trait::async_trait]
impl SessionConnector for PtslClient {
    async fn open_session(&self, credentials: &Credentials) -> Result<Box<dyn Session>> {
        let registered: RegisterConnectionResponse = self
            .send(CommandId::RegisterConnection, "", credentials)
            .await?;

        if registered.session_id.is_empty() {
            return Err(Error::NotConnected);
        }

        tracing::debug!(
            "Registered '{}' / '{}' with PTSL",
            credentials.company_name,
            credentials.application_name
        );

        Ok(Box::new(PtslSession {
            client: self.clone(),
            session_id: registered.session_id,
        }))
    }
}

/// A registered PTSL connection.
pub struct PtslSession {
    client: PtslClient,
    session_id: String,
}

impl PtslSession {
    async fn send<B, R>(&self, command: CommandId, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.client.send(command, &self.session_id, body).await
    }
}

#[async_trait::async_trait]
impl Session for PtslSession {
    async fn session_name(&self) -> Result<String> {
        let response: SessionNameResponse = self
            .send(CommandId::GetSessionName, &serde_json::json!({}))
            .await?;
        Ok(response.session_name)
    }

    async fn session_timecode_rate(&self) -> Result<i32> {
        let response: TimeCodeRateResponse = self
            .send(CommandId::GetSessionTimeCodeRate, &serde_json::json!({}))
            .await?;
        Ok(rate_code(&response.current_setting))
    }

    async fn get_memory_locations(&self) -> Result<Vec<MemoryLocation>> {
        let response: MemoryLocationsResponse = self
            .send(CommandId::GetMemoryLocations, &serde_json::json!({}))
            .await?;
        Ok(response.memory_locations)
    }

    async fn create_memory_location(&self, location: &NewMemoryLocation) -> Result<()> {
        let request = CreateMemoryLocationRequest::marker(location);
        let _: serde_json::Value = self
            .send(CommandId::CreateMemoryLocation, &request)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        tracing::debug!("Releasing PTSL session {}", self.session_id);
    }
}

fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R> {
    let body = body.trim();
    let body = if body.is_empty() { "{}" } else { body };
    Ok(serde_json::from_str(body)?)
}

/// Rate settings arrive either as the numeric enum or its name; anything
/// unrecognized becomes 0 so the caller falls back to its default rate.
fn rate_code(value: &serde_json::Value) -> i32 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or_default(),
        serde_json::Value::String(s) => s
            .parse::<i32>()
            .ok()
            .or_else(|| TimecodeRate::from_protocol_name(s).map(TimecodeRate::code))
            .unwrap_or_default(),
        _ => 0,
    }
}
