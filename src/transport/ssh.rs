// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Transport backed by the system `ssh` client

use crate::error::{PharosError, Result};
use crate::transport::Transport;
use crate::types::Host;
use async_trait::async_trait;
use bytes::Bytes;
use std::process::{Output, Stdio};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};

pub struct SshTransport {
    host: Host,
    connect_timeout_secs: u64,
}

impl SshTransport {
    pub fn new(host: Host, connect_timeout_secs: u64) -> Self {
        Self {
            host,
            connect_timeout_secs,
        }
    }

    fn destination(&self) -> String {
        format!("{}@{}", self.host.user, self.host.address)
    }

    /// Build the argument list for running `remote_command` on the host
    fn ssh_args(&self, remote_command: &str) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.connect_timeout_secs),
            "-p".to_string(),
            self.host.ssh_port.to_string(),
        ];

        if let Some(key) = &self.host.ssh_key_path {
            args.push("-i".to_string());
            args.push(shellexpand::tilde(&key.to_string_lossy()).into_owned());
        }

        args.push(self.destination());
        args.push(remote_command.to_string());
        args
    }

    fn check_status(&self, command: &str, output: &Output) -> Result<()> {
        if output.status.success() {
            return Ok(());
        }

        Err(PharosError::Transport {
            host: self.host.address.clone(),
            message: format!(
                "'{}' exited with code {}: {}",
                command,
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        })
    }

    /// Run a shell command on the host, failing on non-zero exit
    #[instrument(skip(self), fields(host = %self.host.address))]
    pub async fn exec(&self, command: &str) -> Result<Output> {
        let output = Command::new("ssh")
            .args(self.ssh_args(command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        self.check_status(command, &output)?;
        Ok(output)
    }
}

#[async_trait]
impl Transport for SshTransport {
    fn host(&self) -> &str {
        &self.host.address
    }

    async fn ensure_directory(&self, path: &str) -> Result<()> {
        self.exec(&mkdir_command(path)).await.map(|_| ())
    }

    // Files are created with the remote umask; no chmod is applied.
    #[instrument(skip(self, content), fields(host = %self.host.address, bytes = content.len()))]
    async fn write_file(&self, path: &str, content: &Bytes) -> Result<()> {
        let command = write_command(path);

        let (output, written) =
            pipe_to(Command::new("ssh").args(self.ssh_args(&command)), content).await?;
        // A refused connection closes stdin early; report the exit status first
        self.check_status(&command, &output)?;
        written?;

        debug!("Wrote {}", path);
        Ok(())
    }
}

/// Remote command creating `path` and its parents as root
fn mkdir_command(path: &str) -> String {
    format!("sudo mkdir -p {}", shell_escape(path))
}

/// Remote command writing stdin to `path` as root
fn write_command(path: &str) -> String {
    format!(
        "sudo sh -c {}",
        shell_escape(&format!("cat > {}", shell_escape(path)))
    )
}

/// Spawn `command`, feed `content` on its stdin and wait for it to exit.
///
/// The result of feeding stdin is returned next to the output, so a process
/// that stopped reading still has its exit status and stderr inspected.
async fn pipe_to(
    command: &mut Command,
    content: &[u8],
) -> Result<(Output, std::io::Result<()>)> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;

    let written = match child.stdin.take() {
        Some(mut stdin) => match stdin.write_all(content).await {
            Ok(()) => stdin.flush().await,
            Err(e) => Err(e),
        },
        None => Ok(()),
    };

    let output = child.wait_with_output().await?;
    Ok((output, written))
}

/// Quote a string for a POSIX shell
fn shell_escape(s: &str) -> String {
    if !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.'))
    {
        return s.to_string();
    }

    format!("'{}'", s.replace('\'', r"'\''"))
}
