//! Arena-backed tag registry and its read-only query API.

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::augment::augment;
use crate::domain::error::DomainError;
use crate::domain::{BaseTag, Tag, TagId, CATEGORY, SUBCATEGORY, TOPIC};

/// Tag node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TagNode {
    pub tag: Tag,
    /// Index of parent node in the arena, None for roots
    pub parent: Option<Index>,
    /// Child indices, in registry order
    pub children: Vec<Index>,
}

/// Immutable tag hierarchy.
///
/// Built once from a tag table; afterwards every operation is a pure read,
/// so a registry can be shared freely between threads.
#[derive(Debug)]
pub struct TagRegistry {
    arena: Arena<TagNode>,
    /// Registry order (order of the source table)
    order: Vec<Index>,
    by_id: HashMap<TagId, Index>,
    roots: Vec<Index>,
    hierarchy: Vec<String>,
}

impl TagRegistry {
    /// Augment `base_tags` and index the result.
    ///
    /// Fails with a configuration error instead of exposing a partial registry.
    #[instrument(level = "debug", skip_all, fields(tags = base_tags.len()))]
    pub fn build<S: AsRef<str>>(
        base_tags: &[BaseTag],
        hierarchy: &[S],
    ) -> Result<Self, DomainError> {
        let hierarchy: Vec<String> = hierarchy.iter().map(|s| s.as_ref().to_string()).collect();
        let tags = augment(base_tags, &hierarchy)?;

        let mut arena = Arena::with_capacity(tags.len());
        let mut order = Vec::with_capacity(tags.len());
        let mut by_id = HashMap::with_capacity(tags.len());
        for tag in tags {
            let id = tag.id.clone();
            let idx = arena.insert(TagNode {
                tag,
                parent: None,
                children: Vec::new(),
            });
            order.push(idx);
            by_id.insert(id, idx);
        }

        let mut roots = Vec::new();
        for &idx in &order {
            let parent_idx = arena
                .get(idx)
                .and_then(|node| node.tag.parent.as_ref())
                .and_then(|parent| by_id.get(parent.as_str()).copied());
            match parent_idx {
                Some(parent_idx) => {
                    if let Some(node) = arena.get_mut(idx) {
                        node.parent = Some(parent_idx);
                    }
                    if let Some(parent) = arena.get_mut(parent_idx) {
                        parent.children.push(idx);
                    }
                }
                None => roots.push(idx),
            }
        }

        debug!("registry ready: {} tags, {} roots", order.len(), roots.len());
        Ok(Self {
            arena,
            order,
            by_id,
            roots,
            hierarchy,
        })
    }

    pub fn hierarchy(&self) -> &[String] {
        &self.hierarchy
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get_node(&self, idx: Index) -> Option<&TagNode> {
        self.arena.get(idx)
    }

    pub fn root_indices(&self) -> &[Index] {
        &self.roots
    }

    /// Root nodes in registry order.
    pub fn roots(&self) -> impl Iterator<Item = &TagNode> + '_ {
        self.roots.iter().filter_map(|&idx| self.arena.get(idx))
    }

    /// All tags in registry order.
    pub fn all_tags(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.order
            .iter()
            .filter_map(|&idx| self.arena.get(idx))
            .map(|node| &node.tag)
    }

    pub fn all_tag_ids(&self) -> Vec<&TagId> {
        self.all_tags().map(|tag| &tag.id).collect()
    }

    /// Every tag of one level type, in registry order.
    pub fn tags_at_level(&self, level_type: &str) -> Vec<&Tag> {
        self.all_tags().filter(|tag| tag.is_type(level_type)).collect()
    }

    pub fn all_category_tags(&self) -> Vec<&Tag> {
        self.tags_at_level(CATEGORY)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_by_id(&self, id: &str) -> Option<&Tag> {
        self.by_id
            .get(id)
            .and_then(|&idx| self.arena.get(idx))
            .map(|node| &node.tag)
    }

    /// Base definition of a tag, without derived fields.
    pub fn get_base_tag_by_id(&self, id: &str) -> Option<BaseTag> {
        self.get_by_id(id).map(Tag::to_base)
    }

    /// Resolve ids in input order, silently dropping unknown ones.
    pub fn get_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Tag> {
        ids.iter().filter_map(|id| self.get_by_id(id.as_ref())).collect()
    }

    /// First tag in `ids` (input order) whose type is `level_type`.
    #[instrument(level = "trace", skip(self, ids))]
    pub fn get_specified_tag<S: AsRef<str>>(
        &self,
        level_type: &str,
        ids: &[S],
    ) -> Option<&Tag> {
        for id in ids {
            if let Some(tag) = self.get_by_id(id.as_ref()) {
                if tag.is_type(level_type) {
                    return Some(tag);
                }
            }
        }
        None
    }

    /// All tags in `ids` whose type is `level_type`, input order preserved.
    #[instrument(level = "trace", skip(self, ids))]
    pub fn get_specified_tags<S: AsRef<str>>(
        &self,
        level_type: &str,
        ids: &[S],
    ) -> Vec<&Tag> {
        ids.iter()
            .filter_map(|id| self.get_by_id(id.as_ref()))
            .filter(|tag| tag.is_type(level_type))
            .collect()
    }

    /// Resolvable tag with the greatest level; ties go to the earliest id.
    pub fn get_deepest_tag<S: AsRef<str>>(&self, ids: &[S]) -> Option<&Tag> {
        let mut deepest: Option<&Tag> = None;
        for tag in ids.iter().filter_map(|id| self.get_by_id(id.as_ref())) {
            if deepest.map_or(true, |current| tag.level > current.level) {
                deepest = Some(tag);
            }
        }
        deepest
    }

    pub fn get_category_tag<S: AsRef<str>>(&self, ids: &[S]) -> Option<&Tag> {
        self.get_specified_tag(CATEGORY, ids)
    }

    pub fn get_category_tags<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Tag> {
        self.get_specified_tags(CATEGORY, ids)
    }

    pub fn get_subcategory_tag<S: AsRef<str>>(&self, ids: &[S]) -> Option<&Tag> {
        self.get_specified_tag(SUBCATEGORY, ids)
    }

    pub fn get_subcategory_tags<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Tag> {
        self.get_specified_tags(SUBCATEGORY, ids)
    }

    pub fn get_topic_tag<S: AsRef<str>>(&self, ids: &[S]) -> Option<&Tag> {
        self.get_specified_tag(TOPIC, ids)
    }

    pub fn get_topic_tags<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Tag> {
        self.get_specified_tags(TOPIC, ids)
    }

    /// Pre-order walk below `id`; empty for leaves and unknown ids.
    pub fn descendants(&self, id: &str) -> Descendants<'_> {
        Descendants::new(self, self.by_id.get(id).copied())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn get_descendants(&self, id: &str) -> Vec<&Tag> {
        self.descendants(id).collect()
    }

    /// Parent chain of `id`, nearest first; empty for roots and unknown ids.
    pub fn ancestors(&self, id: &str) -> Vec<&Tag> {
        let mut found = Vec::new();
        let mut current = self
            .by_id
            .get(id)
            .and_then(|&idx| self.arena.get(idx))
            .and_then(|node| node.parent);
        while let Some(node) = current.and_then(|idx| self.arena.get(idx)) {
            found.push(&node.tag);
            current = node.parent;
        }
        found
    }
}

/// Pre-order iterator over the subtree below a tag (the tag itself excluded).
pub struct Descendants<'a> {
    registry: &'a TagRegistry,
    stack: Vec<Index>,
}

impl<'a> Descendants<'a> {
    fn new(registry: &'a TagRegistry, start: Option<Index>) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = start.and_then(|idx| registry.get_node(idx)) {
            // Reverse so the first child is popped first
            stack.extend(node.children.iter().rev().copied());
        }
        Self { registry, stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Tag;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.registry.get_node(current_idx) {
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some(&node.tag);
            }
        }
        None
    }
}
