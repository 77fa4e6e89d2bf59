// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log output is produced through message types that implement `Display` and
//! [`messages::StructuredLog`], so the wording of every diagnostic lives in one
//! place instead of being scattered through the loader and the executor.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::script` - script loading and line classification
//! * `messages::engine` - per-line pipeline stages and error routing
//! * `messages::dispatch` - node dispatch to tools and models
//! * `messages::backend` - tool and model backend lifecycle
//!
//! All output goes through `tracing`. The binary installs a
//! `tracing-subscriber` formatter on stderr, which keeps stdout reserved for
//! pipeline results.
//!
//! # Usage
//!
//! ```rust
//! use gendo::observability::messages::dispatch::NodeDispatchFailed;
//! use gendo::observability::messages::StructuredLog;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! NodeDispatchFailed {
//!     node_id: 3,
//!     error: &error,
//! }
//! .log();
//! ```

pub mod messages;
