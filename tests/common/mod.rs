#![allow(dead_code)]

use async_trait::async_trait;
use dbpanel::console::{Dispatcher, LinkSettings};
use dbpanel::remote::{RemoteCall, RemoteError, RemoteRequest, RemoteResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Remote that records every request and answers from a queue.
#[derive(Clone, Default)]
pub struct FakeRemote {
    pub requests: Arc<Mutex<Vec<RemoteRequest>>>,
    pub downloads: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<VecDeque<Result<RemoteResponse, RemoteError>>>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, outcome: Result<RemoteResponse, RemoteError>) -> &Self {
        self.responses.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

#[async_trait]
impl RemoteCall for FakeRemote {
    async fn call(&self, request: RemoteRequest) -> Result<RemoteResponse, RemoteError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RemoteResponse::text("")))
    }

    async fn download(&self, path: &str) -> Result<Vec<u8>, RemoteError> {
        self.downloads.lock().unwrap().push(path.to_string());
        Ok(b"PK\x03\x04".to_vec())
    }
}

pub fn dispatcher(remote: &FakeRemote, origin: &str) -> Dispatcher {
    Dispatcher::new(Arc::new(remote.clone()), LinkSettings::new(None, origin))
}

pub fn status_error(status: u16, body: &str) -> RemoteError {
    RemoteError::Status {
        status,
        response: RemoteResponse::text(body),
    }
}
