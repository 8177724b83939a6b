//! Geographic Metadata SDK - Abstract data model for geographic information
//!
//! Provides typed building blocks for:
//! - Resource metadata records per ISO 19115-1/-2 (citation, identification,
//!   extent, lineage, constraints, content, distribution, maintenance)
//! - Data quality reports per ISO 19157
//! - Spatial referencing by coordinates per ISO 19111
//! - Naming, measure, and geometry primitives per ISO 19103 and ISO 19107
//! - Conditional-obligation validation over assembled value graphs
//!
//! Records serialize to and from JSON with the standards' element names as
//! keys and the code lists' exact tokens as values.

pub mod error;
pub mod geometry;
pub mod models;
pub mod referencing;
pub mod validation;
pub mod vocabulary;

// Re-export commonly used types
pub use error::{ModelError, ModelResult};
pub use geometry::DirectPosition;
pub use validation::{
    ConditionalGroup, ConditionalGroupViolation, MetadataValidator, ValidationError,
    ValidationReport,
};
pub use vocabulary::{CodeList, UnknownToken};

// Re-export the principal records
pub use models::{
    Citation, DataIdentification, DataQuality, Distribution, Extent, Identification, Lineage,
    MaintenanceInformation, Responsibility, ServiceIdentification,
};
pub use referencing::{CoordinateReferenceSystem, ReferenceSystemItem, SingleCrs};
