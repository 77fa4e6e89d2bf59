use async_trait::async_trait;

use crate::errors::ToolError;

/// A sandboxed, registry-resolved capability: text in, text out.
#[async_trait]
pub trait Tool: Send + Sync {
    async fn process(&self, input: &str) -> Result<String, ToolError>;

    fn name(&self) -> &'static str;
}
