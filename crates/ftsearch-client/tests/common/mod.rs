#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use ftsearch_core::error::RemoteError;
use ftsearch_core::reply::Reply;
use ftsearch_core::traits::StoreClient;

/// In-memory stand-in for the remote store: replays canned replies in order
/// and records every issued command with its argument list.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<Reply, RemoteError>>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<Reply, RemoteError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, reply: Result<Reply, RemoteError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreClient for ScriptedClient {
    async fn send_command(&self, command: &str, args: &[String]) -> Result<Reply, RemoteError> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), args.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Reply::Nil))
    }
}

pub fn unknown_index() -> RemoteError {
    RemoteError::from_message("Unknown Index name")
}

pub fn syntax_error() -> RemoteError {
    RemoteError::from_message("ERR syntax error")
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
