// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::errors::ToolError;
use crate::traits::Tool;

/// Rand tool - returns a uniform integer in `[0, max)` for a decimal `max`.
pub struct RandTool {
    rng: Mutex<StdRng>,
}

impl RandTool {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic generator for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for RandTool {
    async fn process(&self, input: &str) -> Result<String, ToolError> {
        let max: i64 = input
            .parse()
            .map_err(|e| ToolError::invalid_input(format!("invalid max number: {}", e)))?;

        if max <= 0 {
            return Err(ToolError::invalid_input("max number must be positive"));
        }

        let value = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .random_range(0..max);

        tracing::debug!(max, value, "Generated random number");
        Ok(value.to_string())
    }

    fn name(&self) -> &'static str {
        "rand"
    }
}
