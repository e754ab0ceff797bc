use crate::render::OutputFormat;
use crate::source::Macro;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UmlConfig {
    pub log_level: Option<String>,
    pub format: Option<OutputFormat>,
    pub encoding: Option<String>,
    #[serde(default, rename = "macro")]
    pub macros: Vec<Macro>,
}

impl UmlConfig {
    /// Only UTF-8 input is supported
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(encoding) = &self.encoding {
            let normalized = encoding.to_lowercase().replace(['-', '_'], "");
            if normalized != "utf8" {
                anyhow::bail!("unsupported encoding '{}' (only utf-8 is supported)", encoding);
            }
        }
        Ok(())
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("umlsketch.toml")
}

/// Load the configuration file.
///
/// A missing default file means "no configuration"; a missing file that
/// was named explicitly is an error.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<UmlConfig>> {
    let explicit = path.is_some();
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        if explicit {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: UmlConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(Some(config))
}
