// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_SSH_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the cluster YAML describing hosts and addons
    pub cluster_config: PathBuf,
    /// Directory with resource templates overriding the embedded ones
    pub resources_dir: Option<PathBuf>,
    /// Log and record remote commands instead of running them
    pub dry_run: bool,
    pub ssh_connect_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let cluster_config = env::var("PHAROS_CLUSTER_CONFIG")
            .context("PHAROS_CLUSTER_CONFIG environment variable not set")?
            .into();
        let resources_dir = env::var("PHAROS_RESOURCES_DIR").ok().map(PathBuf::from);
        let dry_run: bool = env::var("PHAROS_DRY_RUN")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);
        let ssh_connect_timeout_secs = match env::var("PHAROS_SSH_CONNECT_TIMEOUT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("Invalid PHAROS_SSH_CONNECT_TIMEOUT value: {}", v))?,
            Err(_) => DEFAULT_SSH_CONNECT_TIMEOUT_SECS,
        };

        Ok(Config {
            cluster_config,
            resources_dir,
            dry_run,
            ssh_connect_timeout_secs,
        })
    }
}
