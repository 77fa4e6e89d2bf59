// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // tool and model backends
pub mod config;     // settings + registries
pub mod engine;     // pipeline executor
pub mod errors;     // error handling
pub mod node;       // node data model
pub mod observability;
pub mod parser;     // line classifier
pub mod script;     // script loader
pub mod traits;     // handler abstractions
