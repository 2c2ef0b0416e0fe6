// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Privileged remote filesystem access for a single host.

pub mod dry_run;
pub mod ssh;

pub use dry_run::DryRunTransport;
pub use ssh::SshTransport;

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Remote host operations the phases rely on.
///
/// Both calls run as the remote superuser and complete one round trip
/// before returning. `ensure_directory` must be safe to repeat and to run
/// concurrently for the same path.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Identity of the host this transport talks to
    fn host(&self) -> &str;

    async fn ensure_directory(&self, path: &str) -> Result<()>;

    async fn write_file(&self, path: &str, content: &Bytes) -> Result<()>;
}
