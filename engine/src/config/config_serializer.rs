use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String>;
    fn deserialize(&self, content: &str) -> Result<TConfig>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to deserialize config: {}", e)))
    }
}
