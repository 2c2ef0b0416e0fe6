// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Units of work pushed to a remote host.

use bytes::Bytes;
use std::fmt;

/// A file to be written on the remote host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteArtifact {
    pub path: String,
    pub content: Bytes,
}

impl RemoteArtifact {
    pub fn new(path: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A single transport call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteCommand {
    /// `mkdir -p` the path
    EnsureDirectory(String),
    /// Overwrite the file at the artifact's path
    WriteFile(RemoteArtifact),
}

impl RemoteCommand {
    pub fn ensure_directory(path: impl Into<String>) -> Self {
        Self::EnsureDirectory(path.into())
    }

    pub fn write_file(path: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self::WriteFile(RemoteArtifact::new(path, content))
    }

    /// Remote path this command acts on
    pub fn path(&self) -> &str {
        match self {
            Self::EnsureDirectory(path) => path,
            Self::WriteFile(artifact) => &artifact.path,
        }
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnsureDirectory(path) => write!(f, "mkdir -p {}", path),
            Self::WriteFile(artifact) => {
                write!(f, "write {} ({} bytes)", artifact.path, artifact.content.len())
            }
        }
    }
}
