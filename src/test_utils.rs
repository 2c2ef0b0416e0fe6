// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test doubles for the phase collaborators.

use crate::error::{PharosError, Result};
use crate::kubeadm::{ConfigGenerator, KubeadmConfigGenerator};
use crate::phases::{PhaseContext, SourceReader};
use crate::templates::{ResourceRenderer, TemplateParams, TemplateRenderer};
use crate::transport::{DryRunTransport, Transport};
use crate::types::{RemoteCommand, WebhookConfig};
use async_trait::async_trait;
use bytes::Bytes;
use kube::config::Kubeconfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Local files held in memory
#[derive(Default)]
pub struct MemorySources {
    files: HashMap<PathBuf, Bytes>,
}

impl SourceReader for MemorySources {
    fn read(&self, path: &Path) -> Result<Bytes> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| PharosError::SourceFile {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

/// Embedded renderer that remembers every call
pub struct RecordingRenderer {
    inner: ResourceRenderer,
    calls: Mutex<Vec<(String, TemplateParams)>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            inner: ResourceRenderer::embedded().unwrap(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, TemplateParams)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TemplateRenderer for RecordingRenderer {
    fn render(&self, name: &str, params: &TemplateParams) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), params.clone()));
        self.inner.render(name, params)
    }
}

/// Kubeadm generator that counts invocations
#[derive(Default)]
pub struct CountingGenerator {
    calls: AtomicUsize,
}

impl CountingGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConfigGenerator for CountingGenerator {
    fn generate_authentication_token_webhook_config(
        &self,
        webhook: &WebhookConfig,
    ) -> Result<Kubeconfig> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        KubeadmConfigGenerator.generate_authentication_token_webhook_config(webhook)
    }
}

/// Collaborators for building a `PhaseContext` in tests
pub struct Fixture {
    pub renderer: RecordingRenderer,
    pub generator: CountingGenerator,
    pub sources: MemorySources,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            renderer: RecordingRenderer::new(),
            generator: CountingGenerator::default(),
            sources: MemorySources::default(),
        }
    }

    /// Add a local file readable under `path`
    pub fn with_file(mut self, path: &str, content: &'static str) -> Self {
        self.sources
            .files
            .insert(PathBuf::from(path), Bytes::from_static(content.as_bytes()));
        self
    }

    pub fn context(&self) -> PhaseContext<'_> {
        PhaseContext {
            renderer: &self.renderer,
            generator: &self.generator,
            sources: &self.sources,
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Records like `DryRunTransport` but rejects any call on one path
pub struct FailingTransport {
    inner: DryRunTransport,
    fail_on: String,
}

impl FailingTransport {
    pub fn new(host: &str, fail_on: &str) -> Self {
        Self {
            inner: DryRunTransport::new(host),
            fail_on: fail_on.to_string(),
        }
    }

    /// Calls that succeeded
    pub fn recorded(&self) -> Vec<RemoteCommand> {
        self.inner.commands()
    }

    fn check(&self, path: &str) -> Result<()> {
        if path == self.fail_on {
            return Err(PharosError::Transport {
                host: self.inner.host().to_string(),
                message: format!("permission denied: {}", path),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Transport for FailingTransport {
    fn host(&self) -> &str {
        self.inner.host()
    }

    async fn ensure_directory(&self, path: &str) -> Result<()> {
        self.check(path)?;
        self.inner.ensure_directory(path).await
    }

    async fn write_file(&self, path: &str, content: &Bytes) -> Result<()> {
        self.check(path)?;
        self.inner.write_file(path, content).await
    }
}

/// Records like `DryRunTransport` after waiting on every call
pub struct SlowTransport {
    inner: DryRunTransport,
    delay: Duration,
}

impl SlowTransport {
    pub fn new(host: &str, delay: Duration) -> Self {
        Self {
            inner: DryRunTransport::new(host),
            delay,
        }
    }

    pub fn commands(&self) -> Vec<RemoteCommand> {
        self.inner.commands()
    }
}

#[async_trait]
impl Transport for SlowTransport {
    fn host(&self) -> &str {
        self.inner.host()
    }

    async fn ensure_directory(&self, path: &str) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.ensure_directory(path).await
    }

    async fn write_file(&self, path: &str, content: &Bytes) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.write_file(path, content).await
    }
}
