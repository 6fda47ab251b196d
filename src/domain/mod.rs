//! Domain layer: tag entities, hierarchy augmentation and queries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod augment;
pub mod entities;
pub mod error;
pub mod registry;
pub mod tree_display;

pub use augment::{augment, is_conventional_tag_id};
pub use entities::*;
pub use error::DomainError;
pub use registry::{Descendants, TagNode, TagRegistry};
pub use tree_display::TreeDisplay;
