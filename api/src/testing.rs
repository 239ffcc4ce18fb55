//! In-memory test doubles for the transport seam and the UI hooks.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::{ClientHooks, NoticeLevel, Request, Response, Transport, TransportError};

/// Transport that replays queued responses and records every request.
#[derive(Clone, Default)]
pub(crate) struct StubTransport {
    responses: Arc<Mutex<VecDeque<Result<Response, String>>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and JSON body.
    pub fn push_json(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(Response {
            status,
            body: body.as_bytes().to_vec(),
        }));
    }

    /// Queue a network-level failure (no response received).
    pub fn push_network_failure(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err("connection refused".to_string()));
    }

    /// Everything sent so far, in order.
    pub fn sent(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(request);
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError(message)),
            None => panic!("no stubbed response left for request"),
        }
    }
}

/// Hooks that record notifications and forced logouts.
#[derive(Clone, Default)]
pub(crate) struct RecordingHooks {
    notices: Arc<Mutex<Vec<(NoticeLevel, String)>>>,
    expirations: Arc<Mutex<usize>>,
}

impl RecordingHooks {
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn expirations(&self) -> usize {
        *self.expirations.lock().unwrap()
    }

    pub fn reset(&self) {
        self.notices.lock().unwrap().clear();
        *self.expirations.lock().unwrap() = 0;
    }
}

impl ClientHooks for RecordingHooks {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }

    fn session_expired(&self) {
        *self.expirations.lock().unwrap() += 1;
    }
}
