use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::logger::LogMode;
use crate::utils::expand_tilde;
use crate::{SplitError, SplitResult};

pub const INDEX_HTML: &str = "index.html";
pub const CSS_ASSET: &str = "css/styles.css";
pub const JS_ASSET: &str = "js/app.js";

/// Optional user config. Only console behaviour is configurable; paths and
/// markers are fixed.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct Config {
    pub log_mode: Option<LogMode>,
}

/// Fixed file layout of a site directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_html(&self) -> PathBuf {
        self.root.join(INDEX_HTML)
    }

    pub fn css_file(&self) -> PathBuf {
        self.root.join(CSS_ASSET)
    }

    pub fn js_file(&self) -> PathBuf {
        self.root.join(JS_ASSET)
    }
}

#[derive(Debug)]
pub struct SplitConfig {
    pub layout: SiteLayout,
    pub log_mode: LogMode,
}

impl Config {
    pub fn config_file() -> SplitResult<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "htmlsplit", "htmlsplit")
            .ok_or_else(|| SplitError::Config("Could not open config dirs.".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> SplitResult<Config> {
        let config_file = Config::config_file()?;
        if !config_file.exists() {
            return Ok(Config::default());
        }

        let config_string = fs::read_to_string(&config_file)?;
        Config::parse(&config_string)
    }

    pub fn parse(s: &str) -> SplitResult<Config> {
        Ok(toml::from_str(s)?)
    }

    /// Merge with command line arguments. Flags win over the file.
    pub fn resolve(self, args: &Args) -> SplitResult<SplitConfig> {
        let root = expand_tilde(args.dir.clone())?;
        let log_mode = args.log_mode.or(self.log_mode).unwrap_or(LogMode::Fancy);

        Ok(SplitConfig {
            layout: SiteLayout::new(root),
            log_mode,
        })
    }
}
