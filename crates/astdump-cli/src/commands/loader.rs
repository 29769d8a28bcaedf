use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use astdump_lib::{Config, Tree};

/// Why a tree document or config could not be used.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to determine working directory: {0}")]
    WorkingDir(#[source] io::Error),

    #[error(transparent)]
    Dump(#[from] astdump_lib::Error),
}

/// Config file plus command-line overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigArgs {
    pub config_file: Option<PathBuf>,
    pub base_path: Option<PathBuf>,
    pub indent_unit: Option<String>,
    pub no_synthetic: bool,
    pub marker_prefix: Option<String>,
}

impl ConfigArgs {
    /// Build the effective config: defaults, then the config file, then flags.
    ///
    /// A base path without an explicit working directory resolves against
    /// the process working directory.
    pub fn resolve(&self) -> Result<Config, LoadError> {
        let mut config = match &self.config_file {
            Some(path) => Config::from_json(&read_input(path)?)?,
            None => Config::default(),
        };

        if let Some(base) = &self.base_path {
            config.base_path = Some(base.clone());
        }
        if let Some(unit) = &self.indent_unit {
            config.indent_unit = unit.clone();
        }
        if self.no_synthetic {
            config.include_synthetic = false;
        }
        if let Some(prefix) = &self.marker_prefix {
            config.marker_prefix = prefix.clone();
        }
        if config.base_path.is_some() && config.working_dir.is_none() {
            config.working_dir = Some(std::env::current_dir().map_err(LoadError::WorkingDir)?);
        }

        config.validate()?;
        tracing::debug!(?config, "resolved config");
        Ok(config)
    }
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String, LoadError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and validate a tree document.
pub fn load_tree(path: &Path) -> Result<Tree, LoadError> {
    let json = read_input(path)?;
    let tree = Tree::from_json(&json).map_err(astdump_lib::Error::from)?;
    tracing::debug!(
        path = %path.display(),
        roots = tree.nodes().len(),
        "loaded tree document"
    );
    Ok(tree)
}
