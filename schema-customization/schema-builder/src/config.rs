use crate::ConfigError;
use content_model::DEFAULT_TYPE_PREFIX;
use serde::Deserialize;

/// The plugin options that shape the schema. Other options (credentials, host,
/// environment) are ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    /// Adds a `localFile` link to assets.
    pub download_local: bool,
    /// Name content type object types after the display name instead of `sys.id`.
    pub use_name_for_id: bool,
    pub type_prefix: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            download_local: false,
            use_name_for_id: true,
            type_prefix: DEFAULT_TYPE_PREFIX.to_owned(),
        }
    }
}

impl PluginConfig {
    pub fn from_json(options: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(options)?)
    }
}
