pub mod model;
pub mod tool;

pub use crate::config::{ModelRegistry, ToolRegistry};
pub use model::LanguageModel;
pub use tool::Tool;
