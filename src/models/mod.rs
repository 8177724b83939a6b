//! Record types of the abstract metadata model.
//!
//! Each module covers one topic package of ISO 19115-1: how a resource is
//! cited, who is responsible for it, what it covers in space and time, where
//! it came from, how it is constrained, maintained, represented, and
//! distributed. ISO 19157 data quality and the ISO 19103 naming and measure
//! primitives live here as well. The commonly assembled records are
//! re-exported at this level; code lists stay in their topic modules.

pub mod citation;
pub mod constraints;
pub mod content;
pub mod distribution;
pub mod extension;
pub mod extent;
pub mod identification;
pub mod lineage;
pub mod maintenance;
pub mod measure;
pub mod naming;
pub mod quality;
pub mod representation;
pub mod service;

pub use citation::{Citation, Identifier, OnlineResource, Party, Responsibility};
pub use constraints::{ConstraintItem, Constraints, LegalConstraints, SecurityConstraints};
pub use content::{
    ContentInformationItem, CoverageDescription, FeatureCatalogueDescription, ImageDescription,
};
pub use distribution::{Distribution, Distributor, Format};
pub use extension::{
    ApplicationSchemaInformation, ExtendedElementInformation, MetadataExtensionInformation,
};
pub use extent::{Extent, GeographicExtent, TemporalElement, VerticalExtent};
pub use identification::{DataIdentification, Identification, Keywords};
pub use lineage::{Lineage, ProcessStep, Source};
pub use maintenance::{MaintenanceInformation, Scope};
pub use measure::{Angle, Distance, UnitOfMeasure};
pub use naming::{GenericName, MemberName, Record, RecordType, ScopedName};
pub use quality::{DataQuality, QualityElement, QualityResult};
pub use representation::SpatialRepresentationItem;
pub use service::{OperationMetadata, ServiceIdentification};
