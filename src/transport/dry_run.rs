// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Transport that records commands instead of running them

use crate::error::Result;
use crate::transport::Transport;
use crate::types::RemoteCommand;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub struct DryRunTransport {
    host: String,
    commands: Arc<Mutex<Vec<RemoteCommand>>>,
}

impl DryRunTransport {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Commands received so far, in call order
    pub fn commands(&self) -> Vec<RemoteCommand> {
        self.lock().clone()
    }

    fn record(&self, command: RemoteCommand) {
        info!("[dry-run] {}: {}", self.host, command);
        self.lock().push(command);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RemoteCommand>> {
        self.commands.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Transport for DryRunTransport {
    fn host(&self) -> &str {
        &self.host
    }

    async fn ensure_directory(&self, path: &str) -> Result<()> {
        self.record(RemoteCommand::ensure_directory(path));
        Ok(())
    }

    async fn write_file(&self, path: &str, content: &Bytes) -> Result<()> {
        self.record(RemoteCommand::write_file(path, content.clone()));
        Ok(())
    }
}
