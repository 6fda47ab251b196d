//! Site variants: which tag table, level names and subject rule are active.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::application::builtin_tags;
use crate::application::tag_table::TagTable;
use crate::domain::{BaseTag, TagRegistry};

/// Site identity, read once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Site {
    #[default]
    #[serde(alias = "phy")]
    #[value(alias = "phy")]
    Physics,
    #[serde(alias = "cs")]
    #[value(alias = "cs")]
    ComputerScience,
}

impl Site {
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Physics => "physics",
            Site::ComputerScience => "computer-science",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physics" | "phy" => Ok(Site::Physics),
            "computer-science" | "computer_science" | "cs" => Ok(Site::ComputerScience),
            other => Err(format!("unknown site: {}", other)),
        }
    }
}

/// How a content item's subject is derived from its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectRule {
    /// First tag of the root level type, in item order; `fallback` otherwise
    FirstCategory { fallback: String },
    /// Every item belongs to the same subject
    Fixed(String),
}

impl SubjectRule {
    pub fn subject_for<S: AsRef<str>>(&self, registry: &TagRegistry, tag_ids: &[S]) -> String {
        match self {
            SubjectRule::FirstCategory { fallback } => registry
                .hierarchy()
                .first()
                .and_then(|root_level| registry.get_specified_tag(root_level, tag_ids))
                .map(|tag| tag.id.to_string())
                .unwrap_or_else(|| fallback.clone()),
            SubjectRule::Fixed(subject) => subject.clone(),
        }
    }
}

/// Everything that differs between sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteVariant {
    pub site: Site,
    pub hierarchy: Vec<String>,
    pub base_tags: Vec<BaseTag>,
    pub subject_rule: SubjectRule,
}

impl SiteVariant {
    /// Built-in tag table of `site`.
    pub fn builtin(site: Site) -> Self {
        let (hierarchy, base_tags) = match site {
            Site::Physics => (
                builtin_tags::PHYSICS_HIERARCHY,
                builtin_tags::physics_tags(),
            ),
            Site::ComputerScience => (
                builtin_tags::COMPUTER_SCIENCE_HIERARCHY,
                builtin_tags::computer_science_tags(),
            ),
        };
        Self {
            site,
            hierarchy: hierarchy.iter().map(|level| level.to_string()).collect(),
            base_tags,
            subject_rule: Self::default_subject_rule(site),
        }
    }

    /// `site`'s subject rule applied to a custom tag table.
    pub fn from_table(site: Site, table: TagTable) -> Self {
        Self {
            site,
            hierarchy: table.hierarchy,
            base_tags: table.tags,
            subject_rule: Self::default_subject_rule(site),
        }
    }

    fn default_subject_rule(site: Site) -> SubjectRule {
        match site {
            Site::Physics => SubjectRule::FirstCategory {
                fallback: "physics".to_string(),
            },
            Site::ComputerScience => SubjectRule::Fixed("computer_science".to_string()),
        }
    }
}
