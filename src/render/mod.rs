//! Renderers turning extracted facts into output text

pub mod json;
pub mod plantuml;

pub use plantuml::{PlantUmlRenderer, PLACEHOLDER};

use crate::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PlantUML diagram markup
    #[default]
    PlantUml,
    /// Extracted model as JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::PlantUml => "plantuml",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plantuml" | "puml" | "uml" => Ok(OutputFormat::PlantUml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_roundtrip() {
        for format in [OutputFormat::PlantUml, OutputFormat::Json] {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
        assert_eq!("PUML".parse::<OutputFormat>().unwrap(), OutputFormat::PlantUml);
        assert!("svg".parse::<OutputFormat>().is_err());
    }
}
