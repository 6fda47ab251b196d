//! Tag hierarchy service for classifying educational content.
//!
//! A tag table (id, optional parent, title) is augmented once with each tag's
//! depth and level name, then queried read-only: lookup by id, first or all
//! tags of a level in priority order, descendants, deepest tag, and the
//! subject a site assigns to a content item.
//!
//! ```
//! use tagtree::domain::{BaseTag, TagRegistry, TOPIC};
//!
//! let registry = TagRegistry::build(
//!     &[
//!         BaseTag::root("physics", "Physics"),
//!         BaseTag::child("mechanics", "physics", "Mechanics"),
//!         BaseTag::child("statics", "mechanics", "Statics"),
//!     ],
//!     &["category", "subcategory", "topic"],
//! )
//! .unwrap();
//!
//! let topic = registry.get_specified_tag(TOPIC, &["mechanics", "statics"]).unwrap();
//! assert_eq!(topic.title, "Statics");
//! assert_eq!(topic.level, 2);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
