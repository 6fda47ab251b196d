//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::TagId;

/// Configuration errors raised while building a tag hierarchy.
/// A registry is never exposed when one of these occurs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("tag '{tag}' refers to unknown parent '{parent}'")]
    UnknownParent { tag: TagId, parent: TagId },

    #[error("tag '{tag}' is at level {level}, hierarchy only declares levels 0..={max}")]
    HierarchyTooDeep { tag: TagId, level: usize, max: usize },

    #[error("duplicate tag id: {0}")]
    DuplicateTag(TagId),

    #[error("cycle detected in hierarchy: {0}")]
    CycleDetected(TagId),

    #[error("tag id must not be empty")]
    EmptyTagId,

    #[error("hierarchy declares no levels")]
    EmptyHierarchy,
}
