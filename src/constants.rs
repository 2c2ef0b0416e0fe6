// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Remote locations for external etcd trust material
pub mod etcd {
    pub const DIR: &str = "/etc/pharos/etcd";
    pub const CA_CERTIFICATE: &str = "/etc/pharos/etcd/ca-certificate.pem";
    pub const CERTIFICATE: &str = "/etc/pharos/etcd/certificate.pem";
    pub const KEY: &str = "/etc/pharos/etcd/certificate-key.pem";
}

/// Remote locations for audit configuration
pub mod audit {
    pub const DIR: &str = "/etc/pharos/audit";
    pub const POLICY: &str = "/etc/pharos/audit/policy.yml";
    pub const WEBHOOK: &str = "/etc/pharos/audit/webhook.yml";
}

/// Remote locations read by kube-apiserver authentication flags
pub mod authentication {
    pub const DIR: &str = "/etc/kubernetes/authentication";
    pub const TOKEN_WEBHOOK_CONFIG: &str = "/etc/kubernetes/authentication/token-webhook-config.yaml";
    pub const OIDC_CA: &str = "/etc/kubernetes/authentication/oidc_ca.crt";
}

/// Remote locations for token webhook TLS material
pub mod token_webhook {
    pub const DIR: &str = "/etc/pharos/token_webhook";
    pub const CA: &str = "/etc/pharos/token_webhook/ca.pem";
    pub const CERT: &str = "/etc/pharos/token_webhook/cert.pem";
    pub const KEY: &str = "/etc/pharos/token_webhook/key.pem";
}

/// Remote locations for in-tree cloud provider configuration
pub mod cloud {
    pub const DIR: &str = "/etc/pharos/cloud";
    pub const CONFIG: &str = "/etc/pharos/cloud/cloud-config";

    /// Cloud providers built into the control plane
    pub const INTREE_PROVIDERS: &[&str] = &[
        "aws",
        "azure",
        "cloudstack",
        "gce",
        "openstack",
        "ovirt",
        "photon",
        "vsphere",
    ];
}

/// Resource template names
pub mod templates {
    pub const AUDIT_POLICY: &str = "audit/policy.yml";
    pub const AUDIT_WEBHOOK_CONFIG: &str = "audit/webhook-config.yml.hbs";
}

/// Defaults for generated token webhook kubeconfig
pub mod kubeconfig {
    pub const CONTEXT: &str = "webhook";
    pub const DEFAULT_CLUSTER_NAME: &str = "token-webhook";
    pub const DEFAULT_USER_NAME: &str = "kube-apiserver";
}
