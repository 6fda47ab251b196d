//! Tests for the lookup and query API

use rstest::{fixture, rstest};

use tagtree::domain::{BaseTag, Tag, TagRegistry, TreeDisplay, CATEGORY, SUBCATEGORY, TOPIC};

//      physics                maths
//      /     \                  |
// mechanics  fields          algebra
//   /    \       \              |
// statics dynamics electric  quadratics
#[fixture]
fn registry() -> TagRegistry {
    let base = vec![
        BaseTag::root("physics", "Physics"),
        BaseTag::child("mechanics", "physics", "Mechanics"),
        BaseTag::child("statics", "mechanics", "Statics"),
        BaseTag::root("maths", "Maths"),
        BaseTag::child("fields", "physics", "Fields"),
        BaseTag::child("dynamics", "mechanics", "Dynamics"),
        BaseTag::child("electric", "fields", "Electric Fields"),
        BaseTag::child("algebra", "maths", "Algebra"),
        BaseTag::child("quadratics", "algebra", "Quadratics"),
    ];
    TagRegistry::build(&base, &[CATEGORY, SUBCATEGORY, TOPIC]).unwrap()
}

fn ids<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> Vec<&'a str> {
    tags.into_iter().map(|t| t.id.as_str()).collect()
}

// ============================================================
// get_by_id / get_by_ids
// ============================================================

#[rstest]
fn given_known_id_when_get_by_id_then_returns_that_tag(registry: TagRegistry) {
    let tag = registry.get_by_id("statics").unwrap();
    assert_eq!(tag.id.as_str(), "statics");
    assert_eq!(tag.title, "Statics");
    assert_eq!(tag.parent.as_ref().map(|p| p.as_str()), Some("mechanics"));
}

#[rstest]
fn given_unknown_id_when_get_by_id_then_returns_none(registry: TagRegistry) {
    assert!(registry.get_by_id("nonexistent").is_none());
    assert!(registry.get_by_id("").is_none());
}

#[rstest]
fn given_every_registered_id_when_get_by_id_then_id_matches(registry: TagRegistry) {
    for id in registry.all_tag_ids() {
        assert_eq!(&registry.get_by_id(id.as_str()).unwrap().id, id);
    }
}

#[rstest]
fn given_mixed_ids_when_get_by_ids_then_drops_unknown_silently(registry: TagRegistry) {
    let found = registry.get_by_ids(&["dynamics", "unknown", "maths"]);
    assert_eq!(ids(found), vec!["dynamics", "maths"]);
}

#[rstest]
fn given_id_when_get_base_tag_by_id_then_strips_derived_fields(registry: TagRegistry) {
    let base = registry.get_base_tag_by_id("electric").unwrap();
    assert_eq!(base, BaseTag::child("electric", "fields", "Electric Fields"));
}

// ============================================================
// get_specified_tag(s)
// ============================================================

#[rstest]
fn given_only_one_topic_when_get_specified_tag_then_returns_it(registry: TagRegistry) {
    let tag = registry.get_specified_tag(TOPIC, &["mechanics", "statics"]).unwrap();
    assert_eq!(tag.id.as_str(), "statics");
}

#[rstest]
fn given_two_topics_when_get_specified_tag_then_input_order_decides(registry: TagRegistry) {
    let first = registry.get_specified_tag(TOPIC, &["statics", "dynamics"]).unwrap();
    let swapped = registry.get_specified_tag(TOPIC, &["dynamics", "statics"]).unwrap();

    assert_eq!(first.id.as_str(), "statics");
    assert_eq!(swapped.id.as_str(), "dynamics");
}

#[rstest]
fn given_no_match_when_get_specified_tag_then_returns_none(registry: TagRegistry) {
    assert!(registry.get_specified_tag(TOPIC, &["physics", "mechanics"]).is_none());
    assert!(registry.get_specified_tag(TOPIC, &["unknown"]).is_none());
    let empty: [&str; 0] = [];
    assert!(registry.get_specified_tag(TOPIC, &empty).is_none());
}

#[rstest]
fn given_ids_when_get_specified_tags_then_returns_ordered_subsequence(registry: TagRegistry) {
    let input = ["quadratics", "physics", "unknown", "statics", "fields", "electric"];

    let found = registry.get_specified_tags(TOPIC, &input);

    assert_eq!(ids(found.iter().copied()), vec!["quadratics", "statics", "electric"]);
    // Relative order matches the input
    let positions: Vec<usize> = found
        .iter()
        .map(|t| input.iter().position(|id| *id == t.id.as_str()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[rstest]
#[case::category(CATEGORY, Some("maths"))]
#[case::subcategory(SUBCATEGORY, Some("algebra"))]
#[case::topic(TOPIC, Some("quadratics"))]
#[case::unknown_level("strand", None)]
fn given_level_when_get_specified_tag_then_matches_bindings(
    registry: TagRegistry,
    #[case] level: &str,
    #[case] expected: Option<&str>,
) {
    let input = ["quadratics", "algebra", "maths", "physics"];
    let found = registry.get_specified_tag(level, &input).map(|t| t.id.as_str());
    assert_eq!(found, expected);
}

#[rstest]
fn given_bindings_when_called_then_equal_specified_queries(registry: TagRegistry) {
    let input = ["statics", "mechanics", "physics", "dynamics", "fields"];

    assert_eq!(registry.get_category_tag(&input), registry.get_specified_tag(CATEGORY, &input));
    assert_eq!(
        registry.get_subcategory_tags(&input),
        registry.get_specified_tags(SUBCATEGORY, &input)
    );
    assert_eq!(ids(registry.get_topic_tags(&input)), vec!["statics", "dynamics"]);
    assert_eq!(registry.get_topic_tag(&input).unwrap().id.as_str(), "statics");
    assert_eq!(ids(registry.get_category_tags(&input)), vec!["physics"]);
    assert_eq!(registry.get_subcategory_tag(&input).unwrap().id.as_str(), "mechanics");
}

// ============================================================
// get_descendants
// ============================================================

#[rstest]
fn given_root_when_get_descendants_then_returns_preorder(registry: TagRegistry) {
    let found = registry.get_descendants("physics");
    assert_eq!(
        ids(found),
        vec!["mechanics", "statics", "dynamics", "fields", "electric"]
    );
}

#[rstest]
fn given_leaf_or_unknown_when_get_descendants_then_empty(registry: TagRegistry) {
    assert!(registry.get_descendants("statics").is_empty());
    assert!(registry.get_descendants("unknown").is_empty());
}

#[rstest]
fn given_any_tag_when_get_descendants_then_exactly_reachable_tags(registry: TagRegistry) {
    for tag in registry.all_tags() {
        let descendants = ids(registry.get_descendants(tag.id.as_str()));
        assert!(!descendants.contains(&tag.id.as_str()));

        for other in registry.all_tags() {
            let mut reachable = false;
            let mut parent = other.parent.clone();
            while let Some(p) = parent {
                if p == tag.id {
                    reachable = true;
                    break;
                }
                parent = registry.get_by_id(p.as_str()).and_then(|t| t.parent.clone());
            }
            assert_eq!(
                descendants.contains(&other.id.as_str()),
                reachable,
                "{} below {}",
                other.id,
                tag.id
            );
        }
    }
}

#[test]
fn given_three_level_chain_when_querying_then_levels_and_descendants_match() {
    let base = vec![
        BaseTag::root("A", "A"),
        BaseTag::child("B", "A", "B"),
        BaseTag::child("C", "B", "C"),
    ];
    let registry = TagRegistry::build(&base, &["category", "subcategory", "topic"]).unwrap();

    let a = registry.get_by_id("A").unwrap();
    let c = registry.get_by_id("C").unwrap();
    assert_eq!((a.level, a.tag_type.as_str()), (0, "category"));
    assert_eq!((c.level, c.tag_type.as_str()), (2, "topic"));
    assert_eq!(ids(registry.get_descendants("A")), vec!["B", "C"]);
    assert_eq!(registry.get_specified_tag("topic", &["B", "C"]).unwrap().id.as_str(), "C");
}

// ============================================================
// ancestors
// ============================================================

#[rstest]
fn given_leaf_when_ancestors_then_nearest_parent_first(registry: TagRegistry) {
    assert_eq!(ids(registry.ancestors("statics")), vec!["mechanics", "physics"]);
    assert!(registry.ancestors("physics").is_empty());
    assert!(registry.ancestors("unknown").is_empty());
}

#[rstest]
fn given_any_tag_when_ancestors_then_count_equals_level(registry: TagRegistry) {
    for tag in registry.all_tags() {
        let ancestors = registry.ancestors(tag.id.as_str());
        assert_eq!(ancestors.len(), tag.level, "ancestors of {}", tag.id);
        assert_eq!(ancestors.first().map(|p| &p.id), tag.parent.as_ref());
    }
}

// ============================================================
// Deepest tag, level listings, display
// ============================================================

#[rstest]
fn given_ids_when_get_deepest_tag_then_greatest_level_wins(registry: TagRegistry) {
    let deepest = registry.get_deepest_tag(&["physics", "electric", "mechanics"]).unwrap();
    assert_eq!(deepest.id.as_str(), "electric");
}

#[rstest]
fn given_tied_levels_when_get_deepest_tag_then_earliest_wins(registry: TagRegistry) {
    let deepest = registry.get_deepest_tag(&["unknown", "dynamics", "statics"]).unwrap();
    assert_eq!(deepest.id.as_str(), "dynamics");
    assert!(registry.get_deepest_tag(&["unknown"]).is_none());
}

#[rstest]
fn given_registry_when_listing_levels_then_registry_order(registry: TagRegistry) {
    assert_eq!(ids(registry.all_category_tags()), vec!["physics", "maths"]);
    assert_eq!(
        ids(registry.tags_at_level(SUBCATEGORY)),
        vec!["mechanics", "fields", "algebra"]
    );
    assert_eq!(registry.len(), 9);
    assert_eq!(registry.roots().count(), 2);
}

#[rstest]
fn given_registry_when_rendering_tree_then_lists_every_tag(registry: TagRegistry) {
    let rendered = registry.to_tree_string().to_string();

    for tag in registry.all_tags() {
        assert!(rendered.contains(tag.id.as_str()), "missing {}", tag.id);
    }
    let physics = rendered.find("physics [").unwrap();
    let maths = rendered.find("maths [").unwrap();
    assert!(physics < maths);
}

#[rstest]
fn given_registry_when_shared_across_threads_then_queries_agree(registry: TagRegistry) {
    let registry = std::sync::Arc::new(registry);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .get_descendants("maths")
                    .iter()
                    .map(|t| t.id.to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["algebra", "quadratics"]);
    }
}
