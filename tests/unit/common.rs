// Common utilities for unit tests

use async_trait::async_trait;
use drs_client::prelude::*;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// What the scripted transport does once its timeouts are used up
pub enum Outcome {
    Respond(StatusCode, &'static str),
    Refuse,
}

/// Transport failing with a timeout a fixed number of times before answering
pub struct ScriptedTransport {
    timeouts: u32,
    outcome: Outcome,
    calls: AtomicU32,
    seen: Mutex<Vec<RequestDescriptor>>,
}

impl ScriptedTransport {
    pub fn ok(body: &'static str) -> Arc<Self> {
        Self::timeouts_then(0, Outcome::Respond(StatusCode::OK, body))
    }

    pub fn timeouts_then_ok(timeouts: u32) -> Arc<Self> {
        Self::timeouts_then(timeouts, Outcome::Respond(StatusCode::OK, r#"{"id":"abc"}"#))
    }

    pub fn always_timeout() -> Arc<Self> {
        Self::timeouts_then(u32::MAX, Outcome::Refuse)
    }

    pub fn refusing() -> Arc<Self> {
        Self::timeouts_then(0, Outcome::Refuse)
    }

    pub fn timeouts_then(timeouts: u32, outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            timeouts,
            outcome,
            calls: AtomicU32::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RequestDescriptor {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: RequestDescriptor) -> Result<DrsResponse, DrsError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.seen.lock().unwrap().push(request);
        if call <= self.timeouts {
            return Err(DrsError::Timeout("operation timed out".to_string()));
        }
        match &self.outcome {
            Outcome::Respond(status, body) => {
                Ok(DrsResponse::new(*status, HeaderMap::new(), *body))
            }
            Outcome::Refuse => Err(DrsError::Connection("connection refused".to_string())),
        }
    }
}

/// Async client talking to the scripted transport
pub fn scripted_client(transport: Arc<ScriptedTransport>) -> DrsClient {
    DrsClient::new("http://indexd.local/").with_transport(transport)
}

/// TCP server that accepts connections and never writes a byte back
pub struct SilentServer {
    url: String,
    accepted: Arc<AtomicU32>,
}

impl SilentServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
        let url = format!("http://{}", listener.local_addr().expect("No local address"));
        let accepted = Arc::new(AtomicU32::new(0));
        let counter = accepted.clone();
        thread::spawn(move || {
            // Streams stay open so clients wait for a response that never comes
            let mut open = Vec::new();
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => {
                        counter.fetch_add(1, Ordering::SeqCst);
                        open.push(stream);
                    }
                    Err(_) => break,
                }
            }
        });
        Self { url, accepted }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn accepted(&self) -> u32 {
        self.accepted.load(Ordering::SeqCst)
    }
}
