// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::cloud::INTREE_PROVIDERS;
use crate::error::{PharosError, Result};
use crate::types::webhook::WebhookConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Cluster description as read from `cluster.yml`.
///
/// Only the sections this phase reads are modelled; other sections of the
/// file are ignored. Validation happens before any phase runs.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ClusterSpec {
    #[serde(default)]
    pub hosts: Vec<Host>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etcd: Option<EtcdConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<AuthenticationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudConfig>,
}

impl ClusterSpec {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| PharosError::SourceFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Hosts the control plane runs on
    pub fn master_hosts(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter().filter(|h| h.role == HostRole::Master)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Host {
    pub address: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_ssh_port")]
    pub ssh_port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key_path: Option<PathBuf>,
    #[serde(default)]
    pub role: HostRole,
}

fn default_user() -> String {
    "ubuntu".to_string()
}

fn default_ssh_port() -> u16 {
    22
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostRole {
    Master,
    #[default]
    Worker,
}

/// External etcd connection material
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EtcdConfig {
    #[serde(default)]
    pub endpoints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_certificate: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AuditConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<AuditWebhookConfig>,
}

impl AuditConfig {
    /// Endpoint the audit webhook backend posts events to
    pub fn server(&self) -> Option<&str> {
        self.webhook.as_ref().and_then(|w| w.server.as_deref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AuditWebhookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AuthenticationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_webhook: Option<TokenWebhookConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc: Option<OidcConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TokenWebhookConfig {
    pub config: WebhookConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct OidcConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CloudConfig {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PathBuf>,
}

impl CloudConfig {
    /// Check if the provider ships inside the control plane
    pub fn intree_provider(&self) -> bool {
        INTREE_PROVIDERS.contains(&self.provider.as_str())
    }
}
