// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod dispatch;
pub mod executor;
#[cfg(test)]
pub mod integration_tests;

pub use dispatch::NodeDispatcher;
pub use executor::{PipelineExecutor, RunSummary};
