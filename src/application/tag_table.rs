//! TOML tag tables that replace a site's built-in tags.
//!
//! ```toml
//! hierarchy = ["category", "subcategory", "topic"]
//!
//! [[tags]]
//! id = "physics"
//! title = "Physics"
//!
//! [[tags]]
//! id = "mechanics"
//! parent = "physics"
//! title = "Mechanics"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::BaseTag;
use crate::infrastructure::traits::FileSystem;

/// Tag definitions plus the level names they are augmented with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTable {
    pub hierarchy: Vec<String>,
    #[serde(default)]
    pub tags: Vec<BaseTag>,
}

impl TagTable {
    /// Parse table content; `path` only labels errors.
    pub fn parse(content: &str, path: &Path) -> ApplicationResult<Self> {
        toml::from_str(content).map_err(|e| ApplicationError::TagTable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    #[instrument(level = "debug", skip(fs))]
    pub fn load(fs: &dyn FileSystem, path: &Path) -> ApplicationResult<Self> {
        if !fs.is_file(path) {
            return Err(ApplicationError::TagTable {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        let content = fs
            .read_to_string(path)
            .with_path_context("read tag table", path)?;
        let table = Self::parse(&content, path)?;
        debug!(
            "loaded {} tags, hierarchy {:?}",
            table.tags.len(),
            table.hierarchy
        );
        Ok(table)
    }
}
