//! Domain entities: tag definitions and the content items they classify

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Root level name used by both built-in hierarchies.
pub const CATEGORY: &str = "category";
/// Second level name.
pub const SUBCATEGORY: &str = "subcategory";
/// Third level name.
pub const TOPIC: &str = "topic";

/// Identifier of a tag, e.g. `"mechanics"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TagId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TagId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TagId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TagId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Tag definition as it appears in a tag table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseTag {
    pub id: TagId,
    /// Parent tag, None for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TagId>,
    pub title: String,
}

impl BaseTag {
    pub fn root(id: &str, title: &str) -> Self {
        Self {
            id: TagId::from(id),
            parent: None,
            title: title.to_string(),
        }
    }

    pub fn child(id: &str, parent: &str, title: &str) -> Self {
        Self {
            id: TagId::from(id),
            parent: Some(TagId::from(parent)),
            title: title.to_string(),
        }
    }
}

/// Tag with its derived position in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: TagId,
    pub parent: Option<TagId>,
    pub title: String,
    /// Number of parent hops to a root; roots are level 0
    pub level: usize,
    /// Hierarchy level name for `level`, e.g. "topic"
    #[serde(rename = "type")]
    pub tag_type: String,
}

impl Tag {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_type(&self, level_type: &str) -> bool {
        self.tag_type == level_type
    }

    /// Strip the derived fields.
    pub fn to_base(&self) -> BaseTag {
        BaseTag {
            id: self.id.clone(),
            parent: self.parent.clone(),
            title: self.title.clone(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}

/// Lightweight representation of a question, concept or gameboard.
///
/// Owned by the content API; only `tags` is read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSummary {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub tags: Vec<String>,
}

/// Content summary with the subject assigned by the active site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedContent {
    #[serde(flatten)]
    pub summary: ContentSummary,
    pub subject_id: String,
}
