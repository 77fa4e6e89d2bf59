use async_trait::async_trait;

use crate::errors::ModelError;

/// A language model that transforms `input` under a natural-language `prompt`.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn process(&self, prompt: &str, input: &str) -> Result<String, ModelError>;

    fn name(&self) -> &str;
}
