// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalToolFactory;
use crate::backends::openai::OpenAiModel;
use crate::config::consts::DEFAULT_MODEL_KEY;
use crate::config::{ModelRegistry, ModelSettings, Settings, ToolRegistry};
use crate::errors::FailureStrategy;
use crate::observability::messages::backend::ModelRegistered;
use crate::observability::messages::StructuredLog;
use std::sync::Arc;

/// Runtime builder - assembles the handler registries for a script run.
///
/// Registers every built-in tool (`math`, `rand`, `read`, `write`) rooted at
/// the configured base path, and the OpenAI-compatible client under the
/// `openai` key.
///
/// # Examples
///
/// ```
/// use gendo::config::{RuntimeBuilder, Settings};
///
/// let settings = Settings::default();
/// let model = settings.llm.resolve_with(None, |_| None);
/// let (tools, models, failure_strategy) = RuntimeBuilder::from_settings(&settings, &model);
///
/// assert!(tools.contains_key("math"));
/// assert!(models.contains_key("openai"));
/// assert_eq!(failure_strategy, gendo::errors::FailureStrategy::FailFast);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the tool registry, the model registry and the failure strategy.
    pub fn from_settings(
        settings: &Settings,
        model: &ModelSettings,
    ) -> (ToolRegistry, ModelRegistry, FailureStrategy) {
        let tools = Self::tools(settings);
        let models = Self::models(model);
        (tools, models, settings.failure_strategy)
    }

    fn tools(settings: &Settings) -> ToolRegistry {
        let factory = LocalToolFactory::new(settings.tools.base_path.clone());
        let mut tools = ToolRegistry::new();
        for name in LocalToolFactory::list_available_implementations() {
            if let Ok(tool) = factory.create_tool(name) {
                tools.insert(name.to_string(), tool);
            }
        }
        tools
    }

    fn models(model: &ModelSettings) -> ModelRegistry {
        ModelRegistered {
            key: DEFAULT_MODEL_KEY,
            model: &model.model,
            base_url: &model.base_url,
            authenticated: model.api_key.is_some(),
        }
        .log();

        let mut models = ModelRegistry::new();
        models.insert(
            DEFAULT_MODEL_KEY.to_string(),
            Arc::new(OpenAiModel::new(model.clone())),
        );
        models
    }
}
