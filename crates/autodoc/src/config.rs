use crate::constants::{CONFIG_FILENAME, DEFAULT_SOURCE_DIR, DEFAULT_TAB_WIDTH};
use crate::encoding::TextEncoding;
use crate::rst::PageOptions;
use crate::scan::ScanOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration with layered defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project root directory
    pub project_root: PathBuf,

    /// Directory receiving generated pages, relative to the project root
    pub source_dir: PathBuf,

    /// Encoding used to read scripts
    pub encoding: TextEncoding,

    /// Whether to convert tabs to spaces in script pages
    pub convert_tabs: bool,

    /// Spaces per tab when converting
    pub tab_width: usize,

    /// Glob patterns excluded from script discovery
    pub exclude: Vec<String>,

    pub project: Option<String>,
    pub author: Option<String>,
    pub copyright: Option<String>,
    pub release: Option<String>,
    pub theme: Option<String>,

    /// Package path written into `conf.py`
    pub package_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            encoding: TextEncoding::Utf8,
            convert_tabs: true,
            tab_width: DEFAULT_TAB_WIDTH,
            exclude: vec![".git/**".to_string(), "target/**".to_string()],
            project: None,
            author: None,
            copyright: None,
            release: None,
            theme: None,
            package_path: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load(project_root: Option<&str>) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        if let Some(dir) = project_root {
            config.project_root = PathBuf::from(dir);
        }

        // .autodoc/config.toml takes precedence over defaults
        if let Some(file_config) = Self::load_from_file(&config.project_root)? {
            config.merge(file_config);
        }

        Ok(config)
    }

    fn load_from_file(root: &Path) -> Result<Option<PartialConfig>> {
        let config_path = root.join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        log::debug!("Loaded configuration from {}", config_path.display());
        Ok(Some(config))
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.source_dir {
            self.source_dir = val;
        }
        if let Some(val) = other.encoding {
            self.encoding = val;
        }
        if let Some(val) = other.convert_tabs {
            self.convert_tabs = val;
        }
        if let Some(val) = other.tab_width {
            self.tab_width = val;
        }
        if let Some(val) = other.exclude {
            self.exclude = val;
        }
        self.project = other.project.or(self.project.take());
        self.author = other.author.or(self.author.take());
        self.copyright = other.copyright.or(self.copyright.take());
        self.release = other.release.or(self.release.take());
        self.theme = other.theme.or(self.theme.take());
        self.package_path = other.package_path.or(self.package_path.take());
    }

    /// Absolute-or-relative path of the page directory
    pub fn source_path(&self) -> PathBuf {
        if self.source_dir.is_absolute() {
            self.source_dir.clone()
        } else {
            self.project_root.join(&self.source_dir)
        }
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            encoding: self.encoding,
            convert_tabs: self.convert_tabs,
            tab_width: self.tab_width,
        }
    }

    pub fn scan_options(&self) -> Result<ScanOptions> {
        Ok(ScanOptions::new(self.encoding, &self.exclude)?)
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    source_dir: Option<PathBuf>,
    encoding: Option<TextEncoding>,
    convert_tabs: Option<bool>,
    tab_width: Option<usize>,
    exclude: Option<Vec<String>>,
    project: Option<String>,
    author: Option<String>,
    copyright: Option<String>,
    release: Option<String>,
    theme: Option<String>,
    package_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(root: &Path, contents: &str) {
        fs::create_dir_all(root.join(".autodoc")).unwrap();
        fs::write(root.join(CONFIG_FILENAME), contents).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project_root, PathBuf::from("."));
        assert_eq!(config.source_dir, PathBuf::from("doc/source"));
        assert_eq!(config.encoding, TextEncoding::Utf8);
        assert!(config.convert_tabs);
        assert_eq!(config.tab_width, 4);
        assert!(config.project.is_none());
    }

    #[test]
    fn test_load_with_project_root() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(temp.path().to_str().unwrap())).unwrap();
        assert_eq!(config.project_root, temp.path());
        assert_eq!(config.source_path(), temp.path().join("doc/source"));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            r#"
source_dir = "docs/src"
encoding = "latin-1"
convert_tabs = false
tab_width = 8
exclude = ["vendor/**"]
author = "Jo Doe"
theme = "furo"
"#,
        );

        let config = Config::load(Some(temp.path().to_str().unwrap())).unwrap();
        assert_eq!(config.source_dir, PathBuf::from("docs/src"));
        assert_eq!(config.encoding, TextEncoding::Latin1);
        assert!(!config.convert_tabs);
        assert_eq!(config.tab_width, 8);
        assert_eq!(config.exclude, vec!["vendor/**".to_string()]);
        assert_eq!(config.author.as_deref(), Some("Jo Doe"));
        assert_eq!(config.theme.as_deref(), Some("furo"));
        assert!(config.release.is_none());
    }

    #[test]
    fn test_invalid_encoding_in_file() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "encoding = \"ebcdic\"\n");

        let err = Config::load(Some(temp.path().to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_unknown_field_in_file() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "colour = \"blue\"\n");

        assert!(Config::load(Some(temp.path().to_str().unwrap())).is_err());
    }

    #[test]
    fn test_absolute_source_dir() {
        let config = Config { source_dir: PathBuf::from("/srv/docs"), ..Default::default() };
        assert_eq!(config.source_path(), PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_derived_options() {
        let config = Config { tab_width: 2, convert_tabs: false, ..Default::default() };
        let page = config.page_options();
        assert_eq!(page.tab_width, 2);
        assert!(!page.convert_tabs);

        let scan = config.scan_options().unwrap();
        assert_eq!(scan.exclude.len(), 2);
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let config = Config { exclude: vec!["[".to_string()], ..Default::default() };
        assert!(config.scan_options().is_err());
    }
}
