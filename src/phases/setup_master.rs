// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Setup master configuration files.
//!
//! The cluster description is evaluated once into a list of actions. Each
//! action is then built and applied to the host in turn.

use crate::error::{PharosError, Result};
use crate::phases::actions::{MasterAction, PhaseContext};
use crate::phases::executor::apply;
use crate::transport::Transport;
use crate::types::ClusterSpec;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use url::Url;

pub const TITLE: &str = "Setup master configuration files";

/// Decide which artifacts the master needs.
///
/// Actions come out in a fixed order, but none of them depends on another
/// having run. Empty values count as not set, for paths and webhook servers
/// alike.
pub fn plan(spec: &ClusterSpec) -> Result<Vec<MasterAction>> {
    let mut actions = Vec::new();

    if let Some(etcd) = &spec.etcd {
        if let Some(certificate) = present(&etcd.certificate) {
            let ca_certificate = present(&etcd.ca_certificate).ok_or_else(|| {
                PharosError::InvalidClusterConfig(
                    "etcd.certificate is set without etcd.ca_certificate".to_string(),
                )
            })?;
            let key = present(&etcd.key).ok_or_else(|| {
                PharosError::InvalidClusterConfig(
                    "etcd.certificate is set without etcd.key".to_string(),
                )
            })?;
            actions.push(MasterAction::ExternalEtcdCerts {
                ca_certificate: ca_certificate.to_path_buf(),
                certificate: certificate.to_path_buf(),
                key: key.to_path_buf(),
            });
        }
    }

    if let Some(audit) = &spec.audit {
        actions.push(MasterAction::AuditPolicy);

        if let Some(server) = audit.server().filter(|s| !s.is_empty()) {
            validate_url("audit.webhook.server", server)?;
            actions.push(MasterAction::AuditWebhookConfig {
                server: server.to_string(),
            });
        }
    }

    if let Some(authentication) = &spec.authentication {
        if let Some(token_webhook) = &authentication.token_webhook {
            if let Some(server) = token_webhook
                .config
                .cluster
                .server
                .as_deref()
                .filter(|s| !s.is_empty())
            {
                validate_url("authentication.token_webhook.config.cluster.server", server)?;
            }
            actions.push(MasterAction::TokenWebhookConfig(token_webhook.config.clone()));
        }

        if let Some(ca_file) = authentication
            .oidc
            .as_ref()
            .and_then(|oidc| present(&oidc.ca_file))
        {
            actions.push(MasterAction::OidcCa {
                ca_file: ca_file.to_path_buf(),
            });
        }
    }

    if let Some(cloud) = spec.cloud.as_ref().filter(|c| c.intree_provider()) {
        if let Some(config) = present(&cloud.config) {
            actions.push(MasterAction::IntreeCloudConfig {
                config: config.to_path_buf(),
            });
        }
    }

    Ok(actions)
}

/// An empty path counts as not set
fn present(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| !p.as_os_str().is_empty())
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| PharosError::InvalidClusterConfig(format!("{} '{}': {}", field, value, e)))
}

/// The setup-master phase for one cluster description.
///
/// Holds no per-host state, so one instance can run against several hosts
/// at the same time.
pub struct SetupMaster<'a> {
    actions: Vec<MasterAction>,
    context: PhaseContext<'a>,
    cancelled: Arc<AtomicBool>,
}

impl<'a> SetupMaster<'a> {
    pub fn new(spec: &ClusterSpec, context: PhaseContext<'a>) -> Result<Self> {
        Ok(Self {
            actions: plan(spec)?,
            context,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Share a flag that stops the phase before its next action
    pub fn with_cancellation(mut self, cancelled: Arc<AtomicBool>) -> Self {
        self.cancelled = cancelled;
        self
    }

    pub fn actions(&self) -> &[MasterAction] {
        &self.actions
    }

    #[instrument(skip_all, fields(host = %transport.host()))]
    pub async fn run(&self, transport: &dyn Transport) -> Result<()> {
        info!("{} ({} actions)", TITLE, self.actions.len());

        for action in &self.actions {
            if self.cancelled.load(Ordering::SeqCst) {
                return Err(PharosError::Cancelled {
                    host: transport.host().to_string(),
                });
            }

            info!("{}", action.title());
            let commands = action.commands(&self.context)?;
            apply(transport, &commands).await?;
        }

        debug!("{} done", TITLE);
        Ok(())
    }

    /// Run on every host concurrently.
    ///
    /// Each host runs to its own end; a failure on one host never stops the
    /// others. Failed hosts are logged and reported together.
    pub async fn run_all(&self, transports: &[&dyn Transport]) -> Result<()> {
        let results = join_all(transports.iter().map(|t| self.run(*t))).await;

        let mut failed = Vec::new();
        for (transport, result) in transports.iter().zip(results) {
            if let Err(e) = result {
                error!("{} failed on {}: {}", TITLE, transport.host(), e);
                failed.push(transport.host().to_string());
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(PharosError::HostsFailed {
                hosts: failed,
                total: transports.len(),
            })
        }
    }
}
