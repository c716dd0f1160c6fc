use serde::{Deserialize, Serialize};

use crate::core::{Dialect, Error, ExtractOptions};

/// Root configuration structure, read from `.fn-params.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FnParamsConfig {
    /// Default extraction options
    #[serde(default)]
    pub extract: Option<OptionsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl FnParamsConfig {
    pub fn extract_options(&self) -> OptionsConfig {
        self.extract.clone().unwrap_or_default()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

/// Extraction options before validation.
///
/// The dialect is kept as the raw token so that an unrecognized value
/// surfaces as `InvalidOption` at extraction time rather than as a parse
/// failure of the surrounding document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OptionsConfig {
    #[serde(default)]
    pub dialect: Option<String>,

    /// Custom regex; group 1 must capture the parameter text
    #[serde(default, alias = "custom_pattern", alias = "regex")]
    pub pattern: Option<String>,

    #[serde(default, alias = "types")]
    pub include_types: Option<bool>,
}

impl OptionsConfig {
    /// Layer `overrides` on top of `self`, field by field
    pub fn merge(self, overrides: OptionsConfig) -> OptionsConfig {
        OptionsConfig {
            dialect: overrides.dialect.or(self.dialect),
            pattern: overrides.pattern.or(self.pattern),
            include_types: overrides.include_types.or(self.include_types),
        }
    }
}

impl TryFrom<&OptionsConfig> for ExtractOptions {
    type Error = Error;

    fn try_from(config: &OptionsConfig) -> Result<Self, Self::Error> {
        let dialect = config
            .dialect
            .as_deref()
            .map(str::parse::<Dialect>)
            .transpose()?;

        Ok(ExtractOptions {
            dialect,
            custom_pattern: config.pattern.clone(),
            include_types: config.include_types.unwrap_or(false),
        })
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One parameter per line
    #[default]
    Plain,
    /// JSON array (or object keyed by function name)
    Json,
}
