// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dispatch;
mod execution;
mod model;
mod script;
mod settings;
mod tool;

pub use dispatch::DispatchError;
pub use execution::{FailureStrategy, PipelineError};
pub use model::ModelError;
pub use script::ScriptError;
pub use settings::SettingsError;
pub use tool::ToolError;
