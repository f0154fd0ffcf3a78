//! Unpack configuration.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Settings for one unpack run.
///
/// Can be loaded from YAML:
///
/// ```yaml
/// source: dat/geosite.dat
/// out_dir: rules
/// filters:
///   - cn
///   - google@cn
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnpackConfig {
    /// geosite file to read
    pub source: PathBuf,
    /// Directory for output files; current directory when unset
    pub out_dir: Option<PathBuf>,
    /// `tag[@attribute]` selectors; every tag is unpacked when empty
    pub filters: Vec<String>,
    /// Create `out_dir` if it does not exist
    pub create_out_dir: bool,
}

impl Default for UnpackConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            out_dir: None,
            filters: Vec::new(),
            create_out_dir: true,
        }
    }
}

impl UnpackConfig {
    /// Create a config for `source` with default settings.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    pub fn with_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.extend(filters.into_iter().map(Into::into));
        self
    }

    /// Parse a config from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Apply command line values over this config.
    ///
    /// A given source or output directory replaces the configured one;
    /// filters are appended after the configured filters.
    pub fn merge_cli(
        mut self,
        source: Option<PathBuf>,
        out_dir: Option<PathBuf>,
        filters: Vec<String>,
    ) -> Result<Self> {
        if let Some(source) = source {
            self.source = source;
        }
        if let Some(out_dir) = out_dir {
            self.out_dir = Some(out_dir);
        }
        self.filters.extend(filters);
        self.validate()?;
        Ok(self)
    }

    /// Check that the config can be run.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(Error::Config("no source file given".to_string()));
        }
        Ok(())
    }

    /// Source file name without its last extension.
    pub fn base_name(&self) -> String {
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Output path for a group label.
    pub fn output_path(&self, label: &str) -> PathBuf {
        let file = format!("{}_{}.txt", self.base_name(), label);
        match &self.out_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(file),
            _ => PathBuf::from(file),
        }
    }
}
