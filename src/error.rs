// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PharosError {
    #[error("Failed to read {}: {source}", .path.display())]
    SourceFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Remote command failed on {host}: {message}")]
    Transport { host: String, message: String },

    #[error("Failed to run ssh: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Failed to serialize YAML: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("Failed to build document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid cluster configuration: {0}")]
    InvalidClusterConfig(String),

    #[error("Phase cancelled on host {host}")]
    Cancelled { host: String },

    #[error("Phase failed on {} of {total} host(s): {}", .hosts.len(), .hosts.join(", "))]
    HostsFailed { hosts: Vec<String>, total: usize },
}

pub type Result<T> = std::result::Result<T, PharosError>;
