// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Applies remote commands through a transport

use crate::error::Result;
use crate::transport::Transport;
use crate::types::RemoteCommand;
use tracing::{debug, instrument};

/// Run commands in order, stopping at the first failure
#[instrument(skip_all, fields(host = %transport.host(), commands = commands.len()))]
pub async fn apply(transport: &dyn Transport, commands: &[RemoteCommand]) -> Result<()> {
    for command in commands {
        debug!("{}", command);
        match command {
            RemoteCommand::EnsureDirectory(path) => transport.ensure_directory(path).await?,
            RemoteCommand::WriteFile(artifact) => {
                transport
                    .write_file(&artifact.path, &artifact.content)
                    .await?
            }
        }
    }

    Ok(())
}
