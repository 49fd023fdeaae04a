use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rutkit_core::{MessageOverrides, OutputFormat, Policy};

/// How a [`RutSchema`](crate::RutSchema) reports and renders.
///
/// Deserializes from camelCase JSON; every key is optional:
///
/// ```json
/// { "outputFormat": "formatted", "policy": "strict",
///   "messages": { "required": "Debes ingresar tu RUT" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaOptions {
    /// Merged over the Spanish defaults.
    pub messages: MessageOverrides,
    pub output_format: OutputFormat,
    pub policy: Policy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read schema options: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse schema options: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SchemaOptions {
    pub fn with_messages(mut self, messages: MessageOverrides) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_json(&content)?;
        log::info!("Loaded schema options from {:?}", path);
        Ok(options)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
