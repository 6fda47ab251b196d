//! Classification service
//!
//! Owns the registry of the active site and labels content with a subject.

use std::ops::Deref;
use std::sync::OnceLock;

use tracing::{debug, info, instrument};

use crate::application::sites::{Site, SiteVariant, SubjectRule};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{ClassifiedContent, ContentSummary, TagRegistry};

static INSTALLED: OnceLock<ClassificationService> = OnceLock::new();

/// Tag registry of one site, plus that site's subject rule.
///
/// Dereferences to [`TagRegistry`], so every query is available directly.
#[derive(Debug)]
pub struct ClassificationService {
    site: Site,
    registry: TagRegistry,
    subject_rule: SubjectRule,
}

impl ClassificationService {
    /// Build the registry for `variant`; configuration errors are fatal.
    #[instrument(level = "debug", skip(variant), fields(site = %variant.site))]
    pub fn new(variant: SiteVariant) -> ApplicationResult<Self> {
        let registry =
            TagRegistry::build(variant.base_tags.as_slice(), variant.hierarchy.as_slice())?;
        info!(
            "classification service ready: site={}, {} tags",
            variant.site,
            registry.len()
        );
        Ok(Self {
            site: variant.site,
            registry,
            subject_rule: variant.subject_rule,
        })
    }

    /// Service over the built-in tag table of `site`.
    pub fn for_site(site: Site) -> ApplicationResult<Self> {
        Self::new(SiteVariant::builtin(site))
    }

    pub fn site(&self) -> Site {
        self.site
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn subject_rule(&self) -> &SubjectRule {
        &self.subject_rule
    }

    /// Subject the active site assigns to an item carrying `tag_ids`.
    pub fn subject_for<S: AsRef<str>>(&self, tag_ids: &[S]) -> String {
        self.subject_rule.subject_for(&self.registry, tag_ids)
    }

    #[instrument(level = "trace", skip(self, summary), fields(id = %summary.id))]
    pub fn augment_with_subject(&self, summary: ContentSummary) -> ClassifiedContent {
        let subject_id = self.subject_for(summary.tags.as_slice());
        debug!("subject for {}: {}", summary.id, subject_id);
        ClassifiedContent {
            summary,
            subject_id,
        }
    }

    /// Make `service` the process-wide instance.
    ///
    /// Only one service can be installed per process; switching sites
    /// requires a restart.
    pub fn install(service: ClassificationService) -> ApplicationResult<&'static Self> {
        let site = service.site;
        INSTALLED
            .set(service)
            .map_err(|_| ApplicationError::AlreadyInstalled)?;
        info!("installed classification service for site {}", site);
        INSTALLED.get().ok_or(ApplicationError::AlreadyInstalled)
    }

    /// The process-wide instance, if one was installed.
    pub fn current() -> Option<&'static Self> {
        INSTALLED.get()
    }
}

impl Deref for ClassificationService {
    type Target = TagRegistry;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}
