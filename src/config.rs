//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tagtree/tagtree.toml`
//! 3. Environment variables: `TAGTREE_*` prefix
//! 4. Command line flags (applied by the CLI via `with_overrides`)
//!
//! The site is read once at startup; changing it requires a restart.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, Site};
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Unified configuration for tagtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Active site variant
    pub site: Site,
    /// TOML tag table replacing the site's built-in tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_file: Option<PathBuf>,
}

/// Raw settings for intermediate parsing (None = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub site: Option<Site>,
    pub tags_file: Option<PathBuf>,
}

/// Get the XDG config directory for tagtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tagtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tagtree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(fs: &dyn FileSystem, path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = fs.read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence from the standard locations.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(
            &RealFileSystem,
            global_config_path().as_deref(),
            Self::environment(),
        )
    }

    /// Load settings from an explicit global config file and env source.
    ///
    /// A missing global file is not an error.
    pub fn load_from(
        fs: &dyn FileSystem,
        global: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if fs.exists(global_path) {
                let raw = load_raw_settings(fs, global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = current.apply_env_overrides(env)?;
        current.expand_paths();
        Ok(current)
    }

    /// Environment source for `TAGTREE_*` variables.
    pub fn environment() -> Environment {
        Environment::with_prefix("TAGTREE")
            .prefix_separator("_")
            .separator("__")
    }

    /// Apply command line overrides on top of loaded settings.
    pub fn with_overrides(mut self, site: Option<Site>, tags_file: Option<PathBuf>) -> Self {
        if let Some(site) = site {
            self.site = site;
        }
        if let Some(tags_file) = tags_file {
            self.tags_file = Some(tags_file);
        }
        self.expand_paths();
        self
    }

    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            site: overlay.site.unwrap_or(self.site),
            tags_file: overlay
                .tags_file
                .clone()
                .or_else(|| self.tags_file.clone()),
        }
    }

    /// Env vars replace values, they are explicit user overrides.
    fn apply_env_overrides(mut self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("site") {
            self.site = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("tags_file") {
            self.tags_file = Some(PathBuf::from(val));
        }
        Ok(self)
    }

    fn expand_paths(&mut self) {
        if let Some(tags_file) = &self.tags_file {
            let expanded = expand_env_vars(tags_file.to_string_lossy().as_ref());
            self.tags_file = Some(PathBuf::from(expanded));
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# tagtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/tagtree/tagtree.toml
#   Env:    TAGTREE_SITE, TAGTREE_TAGS_FILE
#   Flags:  --site, --tags-file

# Active site: "physics" (alias "phy") or "computer-science" (alias "cs")
# site = "physics"

# TOML tag table replacing the site's built-in tags
# tags_file = "~/tags/physics.toml"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Environment {
        Settings::environment().source(Some(Default::default()))
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings =
            Settings::load_from(&RealFileSystem, None, no_env()).expect("load defaults");
        assert_eq!(settings.site, Site::Physics);
        assert!(settings.tags_file.is_none());
    }

    #[test]
    fn given_tilde_in_tags_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            site: Site::Physics,
            tags_file: Some(PathBuf::from("~/tags.toml")),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let path = settings.tags_file.unwrap();
        assert!(path.to_string_lossy().starts_with(&home));
        assert!(!path.to_string_lossy().contains('~'));
    }

    #[test]
    fn given_overrides_when_applied_then_replace_loaded_values() {
        let settings = Settings::default()
            .with_overrides(Some(Site::ComputerScience), Some(PathBuf::from("/t.toml")));
        assert_eq!(settings.site, Site::ComputerScience);
        assert_eq!(settings.tags_file, Some(PathBuf::from("/t.toml")));

        let untouched = settings.clone().with_overrides(None, None);
        assert_eq!(untouched, settings);
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.site.is_none());
        assert!(raw.tags_file.is_none());
    }
}
