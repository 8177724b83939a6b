//! Validation of assembled metadata value graphs.
//!
//! Record constructors enforce always-mandatory properties at build time.
//! What they cannot enforce are the conditional obligations of ISO 19115-1,
//! where an entity requires at least one property out of a named group, such
//! as a lineage needing a statement, process steps, or sources. Those groups
//! are declared in [`groups`] and checked by the walker in [`conditional`]:
//!
//! ```
//! use geo_metadata_sdk::models::lineage::Lineage;
//! use geo_metadata_sdk::validation::MetadataValidator;
//!
//! let report = MetadataValidator::new().validate(&Lineage::default());
//! assert!(!report.is_valid());
//! assert_eq!(report.violations[0].group.label(), "Lineage.content");
//! ```

pub mod conditional;
pub mod groups;

pub use conditional::{MetadataValidator, ValidateConditional, ValidationContext};
pub use groups::{
    conditional_groups, ConditionalGroup, ConditionalGroupViolation, ValidationError,
    ValidationReport,
};
