// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pharos::config::Config;
use pharos::kubeadm::KubeadmConfigGenerator;
use pharos::phases::{LocalFiles, PhaseContext, SetupMaster};
use pharos::templates::ResourceRenderer;
use pharos::transport::{DryRunTransport, SshTransport, Transport};
use pharos::types::ClusterSpec;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: cluster_config={}, dry_run={}",
        config.cluster_config.display(),
        config.dry_run
    );

    let spec = ClusterSpec::from_file(&config.cluster_config).with_context(|| {
        format!(
            "Failed to load cluster config {}",
            config.cluster_config.display()
        )
    })?;

    let renderer = ResourceRenderer::new(config.resources_dir.as_deref())?;
    let generator = KubeadmConfigGenerator;
    let sources = LocalFiles;

    // Stop between actions on ctrl-c, never in the middle of one
    let cancelled = Arc::new(AtomicBool::new(false));
    {
        let cancelled = cancelled.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, stopping after the current action");
                cancelled.store(true, Ordering::SeqCst);
            }
        });
    }

    let phase = SetupMaster::new(
        &spec,
        PhaseContext {
            renderer: &renderer,
            generator: &generator,
            sources: &sources,
        },
    )?
    .with_cancellation(cancelled);

    let transports: Vec<Box<dyn Transport>> = spec
        .master_hosts()
        .map(|host| -> Box<dyn Transport> {
            if config.dry_run {
                Box::new(DryRunTransport::new(host.address.clone()))
            } else {
                Box::new(SshTransport::new(host.clone(), config.ssh_connect_timeout_secs))
            }
        })
        .collect();

    if transports.is_empty() {
        warn!("No master hosts in cluster config, nothing to do");
        return Ok(());
    }

    info!(
        "Running {} on {} master host(s)",
        pharos::phases::setup_master::TITLE,
        transports.len()
    );

    // Hosts share only the immutable plan
    let hosts: Vec<&dyn Transport> = transports.iter().map(|t| t.as_ref()).collect();
    phase.run_all(&hosts).await?;

    info!("Master configuration files are in place");
    Ok(())
}
