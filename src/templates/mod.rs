// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource templates rendered into files pushed to hosts.
//!
//! Templates are compiled into the binary. A resources directory can
//! override any of them by providing a file under the same name.

use crate::constants::templates::{AUDIT_POLICY, AUDIT_WEBHOOK_CONFIG};
use crate::error::{PharosError, Result};
use handlebars::{handlebars_helper, Handlebars};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub static AUDIT_POLICY_YML: &str = include_str!("../../resources/audit/policy.yml");
pub static AUDIT_WEBHOOK_CONFIG_YML: &str =
    include_str!("../../resources/audit/webhook-config.yml.hbs");

/// All embedded templates as (name, content) pairs
pub const ALL_TEMPLATES: &[(&str, &str)] = &[
    (AUDIT_POLICY, AUDIT_POLICY_YML),
    (AUDIT_WEBHOOK_CONFIG, AUDIT_WEBHOOK_CONFIG_YML),
];

pub type TemplateParams = BTreeMap<String, String>;

// A JSON string is also a valid YAML double-quoted scalar
handlebars_helper!(yaml_string: |value: str| {
    serde_json::to_string(value).unwrap_or_default()
});

/// Expands a named template with string parameters
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, name: &str, params: &TemplateParams) -> Result<String>;
}

pub struct ResourceRenderer {
    handlebars: Handlebars<'static>,
}

impl ResourceRenderer {
    /// Register the embedded templates, preferring files in `resources_dir`
    pub fn new(resources_dir: Option<&Path>) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Missing parameters are errors, output is YAML not HTML
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("yaml_string", Box::new(yaml_string));

        for (name, embedded) in ALL_TEMPLATES {
            let content = match resources_dir.map(|dir| dir.join(name)) {
                Some(path) if path.is_file() => {
                    debug!("Loading template override {}", path.display());
                    std::fs::read_to_string(&path)
                        .map_err(|source| PharosError::SourceFile { path, source })?
                }
                _ => embedded.to_string(),
            };

            handlebars
                .register_template_string(name, content)
                .map_err(|e| {
                    PharosError::Template(format!("Failed to register template {}: {}", name, e))
                })?;
        }

        Ok(Self { handlebars })
    }

    pub fn embedded() -> Result<Self> {
        Self::new(None)
    }
}

impl TemplateRenderer for ResourceRenderer {
    fn render(&self, name: &str, params: &TemplateParams) -> Result<String> {
        self.handlebars
            .render(name, params)
            .map_err(|e| PharosError::Template(format!("Failed to render {}: {}", name, e)))
    }
}
