// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Control plane configuration documents.

pub mod config_generator;

pub use config_generator::{ConfigGenerator, KubeadmConfigGenerator};
