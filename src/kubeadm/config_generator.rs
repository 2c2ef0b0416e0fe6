// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generation of the kubeconfig kube-apiserver uses to reach a token webhook

use crate::constants::{kubeconfig, token_webhook};
use crate::error::Result;
use crate::types::WebhookConfig;
use kube::config::Kubeconfig;
use serde_json::{json, Map, Value};

/// Translates logical descriptions into control plane config documents
pub trait ConfigGenerator: Send + Sync {
    fn generate_authentication_token_webhook_config(
        &self,
        webhook: &WebhookConfig,
    ) -> Result<Kubeconfig>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KubeadmConfigGenerator;

impl ConfigGenerator for KubeadmConfigGenerator {
    /// Certificate fields reference the remote copies delivered under
    /// `/etc/pharos/token_webhook`, never the local paths.
    fn generate_authentication_token_webhook_config(
        &self,
        webhook: &WebhookConfig,
    ) -> Result<Kubeconfig> {
        let cluster_name = webhook
            .cluster
            .name
            .as_deref()
            .unwrap_or(kubeconfig::DEFAULT_CLUSTER_NAME);
        let user_name = webhook
            .user
            .name
            .as_deref()
            .unwrap_or(kubeconfig::DEFAULT_USER_NAME);

        let mut cluster = Map::new();
        if let Some(server) = webhook.cluster.server.as_deref().filter(|s| !s.is_empty()) {
            cluster.insert("server".to_string(), json!(server));
        }
        if webhook.cluster.certificate_authority.is_some() {
            cluster.insert("certificate-authority".to_string(), json!(token_webhook::CA));
        }

        let mut user = Map::new();
        if webhook.user.client_certificate.is_some() {
            user.insert("client-certificate".to_string(), json!(token_webhook::CERT));
        }
        if webhook.user.client_key.is_some() {
            user.insert("client-key".to_string(), json!(token_webhook::KEY));
        }

        let document = json!({
            "apiVersion": "v1",
            "kind": "Config",
            "preferences": {},
            "clusters": [{ "name": cluster_name, "cluster": Value::Object(cluster) }],
            "users": [{ "name": user_name, "user": Value::Object(user) }],
            "contexts": [{
                "name": kubeconfig::CONTEXT,
                "context": { "cluster": cluster_name, "user": user_name }
            }],
            "current-context": kubeconfig::CONTEXT,
        });

        Ok(serde_json::from_value(document)?)
    }
}
