//! Application layer: services and use cases
//!
//! This layer selects the site variant, loads tag tables through I/O boundary
//! traits and builds the classification service.

pub mod builtin_tags;
pub mod error;
pub mod error_ext;
pub mod services;
pub mod sites;
pub mod tag_table;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use services::ClassificationService;
pub use sites::{Site, SiteVariant, SubjectRule};
pub use tag_table::TagTable;
