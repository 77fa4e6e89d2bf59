// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    API_KEY_ENV_VARS, BASE_URL_ENV_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL, MODEL_ENV_VAR,
};
use crate::errors::{FailureStrategy, SettingsError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional runtime settings for a script run.
///
/// Scripts carry their own node graph, so settings only cover what a script
/// cannot express: how to reach the language model, where file tools are
/// rooted, and what the driving loop does when a line fails. Every field is
/// optional; an absent settings file is the same as an empty one.
///
/// # Example
/// ```yaml
/// failure_strategy: continue_on_error
/// llm:
///   base_url: "http://localhost:9100/v1"
///   model: "bitnet"
/// tools:
///   base_path: "./sandbox"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub tools: ToolSettings,
}

/// Language model connection settings as written in a settings file.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Settings shared by the file tools.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ToolSettings {
    /// Directory that `read` and `write` paths are joined onto.
    pub base_path: Option<PathBuf>,
}

/// Model settings after CLI, file, environment and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    /// `None` puts the model client in passthrough mode.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl LlmSettings {
    /// Resolve against the process environment.
    pub fn resolve(&self, cli_model: Option<&str>) -> ModelSettings {
        self.resolve_with(cli_model, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit environment lookup.
    ///
    /// Precedence is CLI, then settings file, then environment, then the
    /// built-in default. Empty values count as unset at every level.
    pub fn resolve_with<F>(&self, cli_model: Option<&str>, env: F) -> ModelSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| env(name))
                .find(|value| !value.is_empty())
        };

        let api_key = non_empty(self.api_key.clone()).or_else(|| from_env(&API_KEY_ENV_VARS[..]));

        let base_url = non_empty(self.base_url.clone())
            .or_else(|| from_env(&BASE_URL_ENV_VARS[..]))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = non_empty(cli_model.map(String::from))
            .or_else(|| non_empty(self.model.clone()))
            .or_else(|| from_env(&[MODEL_ENV_VAR][..]))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        ModelSettings {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Load settings from a YAML (`.yaml`, `.yml`) or TOML (`.toml`) file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => parse_yaml(&content),
        Some("toml") => Ok(toml::from_str(&content)?),
        _ => Err(SettingsError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn parse_yaml(content: &str) -> Result<Settings, SettingsError> {
    // An empty YAML document deserializes as null rather than an empty map.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
