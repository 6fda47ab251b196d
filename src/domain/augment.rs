//! Hierarchy augmentation: derives level and type for every tag from its parent chain.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::{BaseTag, Tag};

static TAG_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").unwrap());

/// Check that `id` follows the snake case naming convention.
///
/// Any non-empty string is accepted as an id; this is only used to report
/// unconventional ids.
pub fn is_conventional_tag_id(id: &str) -> bool {
    TAG_ID_PATTERN.is_match(id)
}

/// Compute `level` and `type` for every base tag.
///
/// The output keeps the input order. Levels are memoized, so every parent
/// chain is walked at most once.
///
/// # Errors
///
/// * `EmptyHierarchy` if `hierarchy` declares no levels
/// * `EmptyTagId` / `DuplicateTag` for empty or repeated ids
/// * `UnknownParent` if a parent reference does not resolve
/// * `CycleDetected` if a parent chain loops
/// * `HierarchyTooDeep` if a tag sits below the last declared level
#[instrument(level = "debug", skip_all, fields(tags = base_tags.len(), levels = hierarchy.len()))]
pub fn augment(base_tags: &[BaseTag], hierarchy: &[String]) -> Result<Vec<Tag>, DomainError> {
    if hierarchy.is_empty() {
        return Err(DomainError::EmptyHierarchy);
    }

    let mut by_id: HashMap<&str, &BaseTag> = HashMap::with_capacity(base_tags.len());
    for tag in base_tags {
        if tag.id.as_str().is_empty() {
            return Err(DomainError::EmptyTagId);
        }
        if by_id.insert(tag.id.as_str(), tag).is_some() {
            return Err(DomainError::DuplicateTag(tag.id.clone()));
        }
    }

    let max = hierarchy.len() - 1;
    let mut levels: HashMap<&str, usize> = HashMap::with_capacity(base_tags.len());
    let mut tags = Vec::with_capacity(base_tags.len());
    for base in base_tags {
        let level = level_of(base, &by_id, &mut levels)?;
        if level > max {
            return Err(DomainError::HierarchyTooDeep {
                tag: base.id.clone(),
                level,
                max,
            });
        }
        tags.push(Tag {
            id: base.id.clone(),
            parent: base.parent.clone(),
            title: base.title.clone(),
            level,
            tag_type: hierarchy[level].clone(),
        });
    }

    debug!("augmented {} tags", tags.len());
    Ok(tags)
}

/// Walk up from `tag` until a root or an already known tag is reached.
fn level_of<'a>(
    tag: &'a BaseTag,
    by_id: &HashMap<&'a str, &'a BaseTag>,
    memo: &mut HashMap<&'a str, usize>,
) -> Result<usize, DomainError> {
    let mut chain: Vec<&'a BaseTag> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current = tag;

    let anchor = loop {
        if let Some(&known) = memo.get(current.id.as_str()) {
            break Some(known);
        }
        if !seen.insert(current.id.as_str()) {
            return Err(DomainError::CycleDetected(current.id.clone()));
        }
        chain.push(current);
        match &current.parent {
            None => break None,
            Some(parent_id) => {
                current = by_id.get(parent_id.as_str()).copied().ok_or_else(|| {
                    DomainError::UnknownParent {
                        tag: current.id.clone(),
                        parent: parent_id.clone(),
                    }
                })?;
            }
        }
    };

    // Last element of the chain is a root, or a child of the memoized anchor
    let top = match anchor {
        Some(known) if chain.is_empty() => return Ok(known),
        Some(known) => known + 1,
        None => 0,
    };
    for (offset, visited) in chain.iter().rev().enumerate() {
        memo.insert(visited.id.as_str(), top + offset);
    }
    Ok(top + chain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CATEGORY, SUBCATEGORY, TOPIC};

    fn levels() -> Vec<String> {
        vec![CATEGORY.into(), SUBCATEGORY.into(), TOPIC.into()]
    }

    #[test]
    fn test_levels_follow_parent_chain() {
        let base = vec![
            BaseTag::child("c", "b", "C"),
            BaseTag::root("a", "A"),
            BaseTag::child("b", "a", "B"),
        ];
        let tags = augment(&base, &levels()).unwrap();

        let found: Vec<(&str, usize, &str)> = tags
            .iter()
            .map(|t| (t.id.as_str(), t.level, t.tag_type.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![("c", 2, TOPIC), ("a", 0, CATEGORY), ("b", 1, SUBCATEGORY)]
        );
    }

    #[test]
    fn test_self_parent_is_a_cycle() {
        let base = vec![BaseTag::child("loop", "loop", "Loop")];
        let err = augment(&base, &levels()).unwrap_err();
        assert_eq!(err, DomainError::CycleDetected("loop".into()));
    }

    #[test]
    fn test_tag_id_convention() {
        assert!(is_conventional_tag_id("mechanics"));
        assert!(is_conventional_tag_id("shm_2"));
        assert!(!is_conventional_tag_id(""));
        assert!(!is_conventional_tag_id("Mechanics"));
        assert!(!is_conventional_tag_id("a__b"));
        assert!(!is_conventional_tag_id("trailing_"));
    }

    #[test]
    fn test_unconventional_ids_are_accepted() {
        let base = vec![
            BaseTag::root("Mechanics", "Mechanics"),
            BaseTag::child("Newton's laws", "Mechanics", "Newton's laws"),
        ];
        let tags = augment(&base, &levels()).unwrap();
        assert_eq!(tags[1].level, 1);
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let base = vec![BaseTag::root("", "Nameless")];
        assert_eq!(augment(&base, &levels()).unwrap_err(), DomainError::EmptyTagId);
    }
}
