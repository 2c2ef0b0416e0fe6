// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster description and the values the phase produces from it.

pub mod artifact;
pub mod cluster;
pub mod webhook;

pub use artifact::{RemoteArtifact, RemoteCommand};
pub use cluster::{ClusterSpec, Host, HostRole};
pub use webhook::WebhookConfig;
