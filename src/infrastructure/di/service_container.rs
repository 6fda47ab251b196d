//! Service container for dependency injection
//!
//! Wires the classification service from settings.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ClassificationService, SiteVariant, TagTable};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Classification service for the configured site
    pub classification: Arc<ClassificationService>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    ///
    /// Builds the registry eagerly, so a malformed tag table fails here
    /// rather than on the first query.
    #[instrument(level = "debug", skip(fs))]
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> InfraResult<Self> {
        let variant = match &settings.tags_file {
            Some(path) => {
                debug!("using tag table {}", path.display());
                let table = TagTable::load(fs.as_ref(), path)?;
                SiteVariant::from_table(settings.site, table)
            }
            None => SiteVariant::builtin(settings.site),
        };
        let classification = ClassificationService::new(variant)?;

        Ok(Self {
            settings: Arc::new(settings),
            fs,
            classification: Arc::new(classification),
        })
    }
}
