// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Provisioning phases run against cluster hosts.

pub mod actions;
pub mod executor;
pub mod setup_master;
pub mod sources;

pub use actions::{MasterAction, PhaseContext};
pub use setup_master::{plan, SetupMaster};
pub use sources::{LocalFiles, SourceReader};
