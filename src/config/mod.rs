// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod model_registry;
mod runtime;
mod tool_registry;

pub mod consts;

pub use loader::{load_settings, LlmSettings, ModelSettings, Settings, ToolSettings};
pub use model_registry::ModelRegistry;
pub use runtime::RuntimeBuilder;
pub use tool_registry::ToolRegistry;
