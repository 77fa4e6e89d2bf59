// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Handler backends for gendo nodes.
//!
//! A node either runs a tool, asks a language model, or passes its input
//! through. This module provides the implementations behind the first two.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process tools registered by name:
//! - **math**: Evaluates the first arithmetic expression found in the input
//! - **rand**: Draws a uniform integer below the given maximum
//! - **read** / **write**: File access rooted at an optional base path
//!
//! ## OpenAI Backend
//! A chat completion client for any OpenAI-compatible endpoint. Without an
//! API key it passes the input through unchanged, so scripts with prompt
//! nodes still run offline.
//!
//! ## Stub Backend (Test-Only)
//! Counting, failing and recording handlers for executor tests. Not
//! available in production builds.
//!
//! # Examples
//!
//! ```rust
//! use gendo::backends::local::LocalToolFactory;
//!
//! let factory = LocalToolFactory::new(None);
//! let tool = factory.create_tool("math")?;
//! assert_eq!(tool.name(), "math");
//! # Ok::<(), String>(())
//! ```

pub mod local;
pub mod openai;
#[cfg(test)]
pub mod stub;
