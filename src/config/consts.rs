use crate::node::NodeId;

/// Node IDs walked for every input line, in this order.
///
/// Declared node references are not consulted; the chain is fixed.
pub const REFERENCE_PIPELINE_ORDER: [NodeId; 3] = [3, 2, 1];
/// Model registry key used by prompt nodes.
pub const DEFAULT_MODEL_KEY: &str = "openai";
/// Default output destination before any `<id> <` line.
pub const DEFAULT_OUTPUT_NODE: NodeId = 1;

/// Chat completions endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9100/v1";
/// Model name used when neither the CLI nor the environment names one.
pub const DEFAULT_MODEL: &str = "bitnet";

pub const API_KEY_ENV_VARS: [&str; 2] = ["GENDO_API_KEY", "OPENAI_API_KEY"];
pub const BASE_URL_ENV_VARS: [&str; 3] = ["GENDO_API_BASE", "OPENAI_API_BASE", "OPENAI_BASE_URL"];
pub const MODEL_ENV_VAR: &str = "GENDO_MODEL";
