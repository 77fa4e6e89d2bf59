// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message is a small struct with a `Display` impl for the human readable
//! line and a [`StructuredLog`] impl that emits it at the right level with its
//! fields attached.

use tracing::Span;

pub mod backend;
pub mod dispatch;
pub mod engine;
pub mod script;

/// Emit a message as a structured `tracing` event or open a span for it.
pub trait StructuredLog {
    /// Log the message at its designated level with structured fields.
    fn log(&self);

    /// Create a span carrying the message fields.
    fn span(&self, name: &str) -> Span;
}
