//! Datum records
//!
//! A datum relates a coordinate system to the Earth or to another reference
//! body (ISO 19111). Concrete datum kinds embed the shared [`Datum`] record
//! the same way metadata entities embed their base records; the geodetic kind
//! additionally carries the defining [`Ellipsoid`] and [`PrimeMeridian`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::citation::Identifier;
use crate::models::extent::Extent;
use crate::models::measure::UnitOfMeasure;
use crate::vocabulary::code_list;

/// Properties shared by every object of the referencing model (ISO 19111)
///
/// Referencing objects are identified primarily by name, optionally qualified
/// by aliases and authority identifiers such as EPSG codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentifiedObject {
    /// Primary name by which this object is identified
    pub name: String,
    /// Alternative names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias: Vec<String>,
    /// Identifiers assigned by registers, e.g. `EPSG:4326`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    /// Comments on or information about this object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl IdentifiedObject {
    pub fn new(name: String) -> Self {
        Self {
            name,
            alias: Vec::new(),
            identifier: Vec::new(),
            remarks: None,
        }
    }

    pub fn with_identifier(mut self, identifier: Identifier) -> Self {
        self.identifier.push(identifier);
        self
    }
}

/// Properties shared by every datum kind (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Datum {
    /// Shared referencing-object properties
    #[serde(flatten)]
    pub object: IdentifiedObject,
    /// Description of the point or surface the datum is anchored to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_point: Option<String>,
    /// Time after which the datum definition is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realization_epoch: Option<DateTime<Utc>>,
    /// Area, region or time frame the datum is valid in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_of_validity: Option<Box<Extent>>,
    /// Description of the usage the datum is intended for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl Datum {
    pub fn named(name: String) -> Self {
        Self {
            object: IdentifiedObject::new(name),
            anchor_point: None,
            realization_epoch: None,
            domain_of_validity: None,
            scope: None,
        }
    }
}

/// Geometric figure approximating the shape of the Earth (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ellipsoid {
    /// Shared referencing-object properties
    #[serde(flatten)]
    pub object: IdentifiedObject,
    /// Equatorial radius, in `axis_unit`
    pub semi_major_axis: f64,
    /// Linear unit of the semi-major and semi-minor axes
    pub axis_unit: UnitOfMeasure,
    /// Parameter that, together with the semi-major axis, fixes the figure
    pub second_defining_parameter: SecondDefiningParameter,
}

/// Second parameter defining an ellipsoid's figure (ISO 19111)
///
/// Exactly one of the three forms applies; registries publish whichever form
/// the defining authority chose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum SecondDefiningParameter {
    /// Inverse flattening `a / (a - b)`, dimensionless
    InverseFlattening(f64),
    /// Polar radius, in the ellipsoid's axis unit
    SemiMinorAxis(f64),
    /// The figure is a sphere; both radii equal the semi-major axis
    IsSphere,
}

impl Ellipsoid {
    pub fn new(
        name: String,
        semi_major_axis: f64,
        axis_unit: UnitOfMeasure,
        second_defining_parameter: SecondDefiningParameter,
    ) -> Self {
        Self {
            object: IdentifiedObject::new(name),
            semi_major_axis,
            axis_unit,
            second_defining_parameter,
        }
    }

    /// The WGS 84 ellipsoid, defined by its inverse flattening.
    pub fn wgs84() -> Self {
        Self::new(
            "WGS 84".to_string(),
            6_378_137.0,
            UnitOfMeasure::new("m".to_string()),
            SecondDefiningParameter::InverseFlattening(298.257_223_563),
        )
    }

    /// Polar radius in the axis unit, derived from whichever second
    /// parameter the definition carries.
    pub fn semi_minor_axis(&self) -> f64 {
        match self.second_defining_parameter {
            SecondDefiningParameter::InverseFlattening(inverse_flattening) => {
                self.semi_major_axis * (1.0 - 1.0 / inverse_flattening)
            }
            SecondDefiningParameter::SemiMinorAxis(semi_minor_axis) => semi_minor_axis,
            SecondDefiningParameter::IsSphere => self.semi_major_axis,
        }
    }
}

/// Origin meridian from which longitude is measured (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrimeMeridian {
    /// Shared referencing-object properties
    #[serde(flatten)]
    pub object: IdentifiedObject,
    /// Longitude of this meridian relative to Greenwich, in `angular_unit`
    pub greenwich_longitude: f64,
    /// Angular unit of the longitude value
    pub angular_unit: UnitOfMeasure,
}

impl PrimeMeridian {
    pub fn new(name: String, greenwich_longitude: f64, angular_unit: UnitOfMeasure) -> Self {
        Self {
            object: IdentifiedObject::new(name),
            greenwich_longitude,
            angular_unit,
        }
    }

    /// The Greenwich meridian, longitude zero by definition.
    pub fn greenwich() -> Self {
        Self::new(
            "Greenwich".to_string(),
            0.0,
            UnitOfMeasure::new("deg".to_string()),
        )
    }
}

/// Datum relating ellipsoidal or geocentric coordinates to the Earth
/// (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeodeticDatum {
    /// Shared datum properties
    #[serde(flatten)]
    pub datum: Datum,
    /// Ellipsoid the datum positions relative to the Earth
    pub ellipsoid: Ellipsoid,
    /// Meridian longitudes are measured from
    pub prime_meridian: PrimeMeridian,
}

impl GeodeticDatum {
    pub fn new(name: String, ellipsoid: Ellipsoid, prime_meridian: PrimeMeridian) -> Self {
        Self {
            datum: Datum::named(name),
            ellipsoid,
            prime_meridian,
        }
    }

    /// The World Geodetic System 1984 datum used by GPS.
    pub fn wgs84() -> Self {
        Self::new(
            "World Geodetic System 1984".to_string(),
            Ellipsoid::wgs84(),
            PrimeMeridian::greenwich(),
        )
    }
}

code_list! {
    /// Origin surface a vertical datum measures from (ISO 19111)
    pub enum VerticalDatumType {
        Geoidal => "geoidal",
        Ellipsoidal => "ellipsoidal",
        Depth => "depth",
        Barometric => "barometric",
        OtherSurface => "otherSurface",
    }
}

/// Datum describing the relation of gravity-related heights or depths to the
/// Earth (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerticalDatum {
    /// Shared datum properties
    #[serde(flatten)]
    pub datum: Datum,
    /// Surface the vertical coordinates are measured from
    pub vertical_datum_type: VerticalDatumType,
}

impl VerticalDatum {
    pub fn new(name: String, vertical_datum_type: VerticalDatumType) -> Self {
        Self {
            datum: Datum::named(name),
            vertical_datum_type,
        }
    }
}

/// Datum defining the origin of a temporal coordinate system (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemporalDatum {
    /// Shared datum properties
    #[serde(flatten)]
    pub datum: Datum,
    /// Instant temporal coordinates are counted from
    pub origin: DateTime<Utc>,
}

impl TemporalDatum {
    pub fn new(name: String, origin: DateTime<Utc>) -> Self {
        Self {
            datum: Datum::named(name),
            origin,
        }
    }
}

/// Datum for local, engineering or CRS-independent coordinates, e.g. on a
/// moving platform (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineeringDatum {
    /// Shared datum properties
    #[serde(flatten)]
    pub datum: Datum,
}

impl EngineeringDatum {
    pub fn new(name: String) -> Self {
        Self {
            datum: Datum::named(name),
        }
    }
}

/// Borrowed view over any concrete datum kind
///
/// Returned by accessors that expose the datum of a reference system without
/// fixing which kind it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatumRef<'a> {
    Geodetic(&'a GeodeticDatum),
    Vertical(&'a VerticalDatum),
    Temporal(&'a TemporalDatum),
    Engineering(&'a EngineeringDatum),
}

impl<'a> DatumRef<'a> {
    /// Shared datum properties regardless of kind.
    pub fn datum(&self) -> &'a Datum {
        match self {
            DatumRef::Geodetic(datum) => &datum.datum,
            DatumRef::Vertical(datum) => &datum.datum,
            DatumRef::Temporal(datum) => &datum.datum,
            DatumRef::Engineering(datum) => &datum.datum,
        }
    }

    /// Name of the datum.
    pub fn name(&self) -> &'a str {
        &self.datum().object.name
    }
}
