//! Shared test harness for integration tests.
//!
//! [`PtslHarness`] runs a [`FakePtsl`] behind a wiremock server and writes a
//! config file pointing the `ptmark` binary at it.

use assert_cmd::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Scripted PTSL behaviour.
#[derive(Clone)]
pub struct FakePtsl {
    pub session_name: String,
    /// `None` fails the rate query
    pub rate: Option<Value>,
    /// `None` fails the memory-location query
    pub existing: Option<Vec<u32>>,
    pub reject_numbers: Vec<u32>,
}

impl Default for FakePtsl {
    fn default() -> Self {
        Self {
            session_name: "Film Cue 1M1".to_string(),
            rate: Some(json!("STCR_Fps30")),
            existing: Some(Vec::new()),
            reject_numbers: Vec::new(),
        }
    }
}

fn completed(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "header": { "status": "Completed" },
        "response_body_json": body.to_string(),
        "response_error_json": ""
    }))
}

fn failed(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "header": { "status": "Failed" },
        "response_body_json": "",
        "response_error_json": json!({ "command_error_message": message }).to_string()
    }))
}

/// Decode the command name and inner request body of a PTSL envelope.
pub fn decode_request(request: &Request) -> (String, Value) {
    let envelope: Value = serde_json::from_slice(&request.body).unwrap();
    let command = envelope["header"]["command"].as_str().unwrap().to_string();
    let body = envelope["request_body_json"]
        .as_str()
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or(Value::Null);
    (command, body)
}

impl Respond for FakePtsl {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let (command, body) = decode_request(request);
        match command.as_str() {
            "CId_RegisterConnection" => completed(json!({ "session_id": "session-1" })),
            "CId_GetSessionName" => completed(json!({ "session_name": self.session_name })),
            "CId_GetSessionTimeCodeRate" => match &self.rate {
                Some(rate) => completed(json!({ "current_setting": rate })),
                None => failed("no session open"),
            },
            "CId_GetMemoryLocations" => match &self.existing {
                Some(numbers) => completed(json!({
                    "memory_locations": numbers
                        .iter()
                        .map(|n| json!({ "number": n, "name": format!("Cue {n}") }))
                        .collect::<Vec<_>>()
                })),
                None => failed("no session open"),
            },
            "CId_CreateMemoryLocation" => {
                let number = body["number"].as_u64().unwrap_or_default() as u32;
                if self.reject_numbers.contains(&number) {
                    failed("memory location already exists")
                } else {
                    completed(json!({}))
                }
            }
            _ => failed("unsupported command"),
        }
    }
}

pub struct PtslHarness {
    pub server: MockServer,
    config_path: PathBuf,
    _dir: TempDir,
}

impl PtslHarness {
    pub async fn start(fake: FakePtsl) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ptsl.PTSL/SendGrpcRequest"))
            .respond_with(fake)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("ptmark.toml");
        std::fs::write(
            &config_path,
            format!(
                "[ptsl]\nendpoint = \"{}\"\ncompany_name = \"Test Co\"\n",
                server.uri()
            ),
        )
        .unwrap();

        Self {
            server,
            config_path,
            _dir: dir,
        }
    }

    /// Run the binary with `args` plus `--config`.
    #[allow(deprecated)]
    pub async fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::cargo_bin("ptmark").unwrap();
        cmd.args(args).arg("--config").arg(&self.config_path);
        tokio::task::spawn_blocking(move || cmd.output())
            .await
            .unwrap()
            .unwrap()
    }

    /// Inner bodies of all requests for `command`, in arrival order.
    pub async fn requests_for(&self, command: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(decode_request)
            .filter(|(c, _)| c == command)
            .map(|(_, body)| body)
            .collect()
    }
}

/// Parse the single JSON line the binary prints.
pub fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    serde_json::from_str(stdout.trim()).unwrap()
}
