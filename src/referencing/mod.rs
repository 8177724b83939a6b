//! Spatial referencing by coordinates (ISO 19111)
//!
//! The referencing model splits into three layers:
//! - `datum`: how coordinates relate to the Earth
//! - `cs`: the axes that give coordinate tuples their meaning
//! - `crs`: reference systems combining a coordinate system with a datum
//!
//! Metadata entities point into this model wherever a resource declares the
//! system its coordinates are expressed in.

pub mod crs;
pub mod cs;
pub mod datum;

pub use crs::{
    CompoundCrs, Conversion, CoordinateReferenceSystem, DerivedCrs, EngineeringCrs, GeodeticCrs,
    GeographicCrs, MetadataReferenceSystem, ProjectedCrs, ReferenceSystem, ReferenceSystemItem,
    SingleCrs, SingleCrsItem, TemporalCrs, VerticalCrs,
};
pub use cs::{
    AxisDirection, CartesianCs, CoordinateSystem, CoordinateSystemAxis, CoordinateSystemItem,
    CoordinateSystemRef, EllipsoidalCs, LinearCs, RangeMeaning, SphericalCs, TimeCs, VerticalCs,
};
pub use datum::{
    Datum, DatumRef, Ellipsoid, EngineeringDatum, GeodeticDatum, IdentifiedObject, PrimeMeridian,
    SecondDefiningParameter, TemporalDatum, VerticalDatum, VerticalDatumType,
};
