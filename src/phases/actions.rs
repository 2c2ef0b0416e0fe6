// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Artifact families pushed to master hosts.
//!
//! Every action turns its slice of the cluster description into the list
//! of transport calls that delivers it. Building the list reads local files
//! and renders templates but never touches the host.

use crate::constants::{audit, authentication, cloud, etcd, templates, token_webhook};
use crate::error::Result;
use crate::kubeadm::ConfigGenerator;
use crate::phases::sources::SourceReader;
use crate::templates::{TemplateParams, TemplateRenderer};
use crate::types::{RemoteCommand, WebhookConfig};
use std::path::{Path, PathBuf};

/// Collaborators an action may use while building its commands
#[derive(Clone, Copy)]
pub struct PhaseContext<'a> {
    pub renderer: &'a dyn TemplateRenderer,
    pub generator: &'a dyn ConfigGenerator,
    pub sources: &'a dyn SourceReader,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MasterAction {
    ExternalEtcdCerts {
        ca_certificate: PathBuf,
        certificate: PathBuf,
        key: PathBuf,
    },
    AuditPolicy,
    AuditWebhookConfig {
        server: String,
    },
    TokenWebhookConfig(WebhookConfig),
    OidcCa {
        ca_file: PathBuf,
    },
    IntreeCloudConfig {
        config: PathBuf,
    },
}

impl MasterAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ExternalEtcdCerts { .. } => "Pushing external etcd certificates ...",
            Self::AuditPolicy => "Pushing audit policy ...",
            Self::AuditWebhookConfig { .. } => "Pushing audit configs to master ...",
            Self::TokenWebhookConfig(_) => "Pushing token authentication webhook config ...",
            Self::OidcCa { .. } => "Pushing OIDC certificates to master ...",
            Self::IntreeCloudConfig { .. } => "Pushing cloud-config to master ...",
        }
    }

    pub fn commands(&self, ctx: &PhaseContext<'_>) -> Result<Vec<RemoteCommand>> {
        match self {
            Self::ExternalEtcdCerts {
                ca_certificate,
                certificate,
                key,
            } => push_external_etcd_certs(ctx, ca_certificate, certificate, key),
            Self::AuditPolicy => push_audit_policy(ctx),
            Self::AuditWebhookConfig { server } => push_audit_config(ctx, server),
            Self::TokenWebhookConfig(webhook) => {
                push_authentication_token_webhook_config(ctx, webhook)
            }
            Self::OidcCa { ca_file } => push_oidc_certs(ctx, ca_file),
            Self::IntreeCloudConfig { config } => push_intree_cloud_config(ctx, config),
        }
    }
}

// TODO: lock down permissions on the etcd client key once the transport can chmod
fn push_external_etcd_certs(
    ctx: &PhaseContext<'_>,
    ca_certificate: &Path,
    certificate: &Path,
    key: &Path,
) -> Result<Vec<RemoteCommand>> {
    Ok(vec![
        RemoteCommand::ensure_directory(etcd::DIR),
        RemoteCommand::write_file(etcd::CA_CERTIFICATE, ctx.sources.read(ca_certificate)?),
        RemoteCommand::write_file(etcd::CERTIFICATE, ctx.sources.read(certificate)?),
        RemoteCommand::write_file(etcd::KEY, ctx.sources.read(key)?),
    ])
}

fn push_audit_policy(ctx: &PhaseContext<'_>) -> Result<Vec<RemoteCommand>> {
    let policy = ctx
        .renderer
        .render(templates::AUDIT_POLICY, &TemplateParams::new())?;

    Ok(vec![
        RemoteCommand::ensure_directory(audit::DIR),
        RemoteCommand::write_file(audit::POLICY, policy),
    ])
}

fn push_audit_config(ctx: &PhaseContext<'_>, server: &str) -> Result<Vec<RemoteCommand>> {
    let params = TemplateParams::from([("server".to_string(), server.to_string())]);
    let config = ctx
        .renderer
        .render(templates::AUDIT_WEBHOOK_CONFIG, &params)?;

    Ok(vec![
        RemoteCommand::ensure_directory(audit::DIR),
        RemoteCommand::write_file(audit::WEBHOOK, config),
    ])
}

fn push_authentication_token_webhook_config(
    ctx: &PhaseContext<'_>,
    webhook: &WebhookConfig,
) -> Result<Vec<RemoteCommand>> {
    let config = ctx
        .generator
        .generate_authentication_token_webhook_config(webhook)?;

    let mut commands = vec![
        RemoteCommand::ensure_directory(authentication::DIR),
        RemoteCommand::write_file(
            authentication::TOKEN_WEBHOOK_CONFIG,
            serde_yaml::to_string(&config)?,
        ),
    ];
    commands.extend(push_authentication_token_webhook_certs(ctx, webhook)?);

    Ok(commands)
}

fn push_authentication_token_webhook_certs(
    ctx: &PhaseContext<'_>,
    webhook: &WebhookConfig,
) -> Result<Vec<RemoteCommand>> {
    let certs = [
        (&webhook.cluster.certificate_authority, token_webhook::CA),
        (&webhook.user.client_certificate, token_webhook::CERT),
        (&webhook.user.client_key, token_webhook::KEY),
    ];

    let mut commands = vec![RemoteCommand::ensure_directory(token_webhook::DIR)];
    for (source, destination) in certs {
        if let Some(source) = source {
            commands.push(RemoteCommand::write_file(destination, ctx.sources.read(source)?));
        }
    }

    Ok(commands)
}

fn push_oidc_certs(ctx: &PhaseContext<'_>, ca_file: &Path) -> Result<Vec<RemoteCommand>> {
    Ok(vec![
        RemoteCommand::ensure_directory(authentication::DIR),
        RemoteCommand::write_file(authentication::OIDC_CA, ctx.sources.read(ca_file)?),
    ])
}

fn push_intree_cloud_config(
    ctx: &PhaseContext<'_>,
    config: &Path,
) -> Result<Vec<RemoteCommand>> {
    Ok(vec![
        RemoteCommand::ensure_directory(cloud::DIR),
        RemoteCommand::write_file(cloud::CONFIG, ctx.sources.read(config)?),
    ])
}
