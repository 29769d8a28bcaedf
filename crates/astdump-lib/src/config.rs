//! Dump configuration.

use std::path::PathBuf;

use crate::{Error, Result};

pub const DEFAULT_INDENT_UNIT: &str = "  ";
pub const DEFAULT_MARKER_PREFIX: &str = "$";

/// Options recognized by the dumper.
///
/// Deserializes from camelCase JSON; every key is optional:
///
/// ```json
/// { "indentUnit": "  ", "basePath": "tests", "includeSynthetic": true }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// One indentation level.
    pub indent_unit: String,
    /// Base for relative file rendering.
    ///
    /// A relative base only relates to absolute file paths once `working_dir`
    /// is set; otherwise those files print unrelativized.
    pub base_path: Option<PathBuf>,
    /// Emit synthetic nodes.
    pub include_synthetic: bool,
    /// Directory that relative `base_path` and file paths are resolved against.
    pub working_dir: Option<PathBuf>,
    /// Token that introduces a marker identifier in a comment.
    pub marker_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_owned(),
            base_path: None,
            include_synthetic: true,
            working_dir: None,
            marker_prefix: DEFAULT_MARKER_PREFIX.to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn with_base_path(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base.into());
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn include_synthetic(mut self, value: bool) -> Self {
        self.include_synthetic = value;
        self
    }

    pub fn with_marker_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.marker_prefix = prefix.into();
        self
    }

    /// Reject values that would break the line grammar or marker scanning.
    pub fn validate(&self) -> Result<()> {
        if self.indent_unit.contains(['\n', '\r']) {
            return Err(Error::InvalidConfig(
                "indentUnit must not contain line breaks".to_owned(),
            ));
        }
        if self.marker_prefix.is_empty() {
            return Err(Error::InvalidConfig("markerPrefix must not be empty".to_owned()));
        }
        if self.marker_prefix.chars().any(char::is_whitespace) {
            return Err(Error::InvalidConfig(
                "markerPrefix must not contain whitespace".to_owned(),
            ));
        }
        Ok(())
    }
}
