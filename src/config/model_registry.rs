// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::LanguageModel;
use std::collections::HashMap;
use std::sync::Arc;

/// A registry mapping model keys to language model clients.
///
/// Same shape as [`ToolRegistry`](crate::config::ToolRegistry). The executor
/// only ever asks for [`DEFAULT_MODEL_KEY`](crate::config::consts::DEFAULT_MODEL_KEY).
#[derive(Clone, Default)]
pub struct ModelRegistry(pub HashMap<String, Arc<dyn LanguageModel>>);

impl ModelRegistry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: String, model: Arc<dyn LanguageModel>) {
        self.0.insert(key, model);
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn LanguageModel>> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("model_count", &self.0.len())
            .field("model_keys", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn LanguageModel>>> for ModelRegistry {
    fn from(map: HashMap<String, Arc<dyn LanguageModel>>) -> Self {
        Self(map)
    }
}
