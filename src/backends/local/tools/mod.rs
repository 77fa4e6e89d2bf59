// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod math;
pub mod random;
pub mod read;
pub mod write;

pub use math::MathTool;
pub use random::RandTool;
pub use read::ReadTool;
pub use write::WriteTool;

use std::path::{Path, PathBuf};

/// Join `input` onto the file tools' base path, if one is configured.
pub(crate) fn rooted(base_path: Option<&Path>, input: &str) -> PathBuf {
    match base_path {
        Some(base) if !base.as_os_str().is_empty() => base.join(input),
        _ => PathBuf::from(input),
    }
}
