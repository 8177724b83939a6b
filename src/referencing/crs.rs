//! Coordinate reference systems
//!
//! A coordinate reference system pairs a coordinate system with a datum so
//! that coordinate tuples refer to positions in the real world (ISO 19111).
//! The concrete kinds embed the shared [`ReferenceSystem`] record. Kinds
//! that the standard narrows, such as the geographic system's ellipsoidal
//! coordinate system, store the narrowed type directly; the [`SingleCrs`]
//! trait exposes the general contract over kind-erased views so callers
//! written against the parent contract accept every kind.

use serde::{Deserialize, Serialize};

use super::cs::{
    CartesianCs, CoordinateSystemItem, CoordinateSystemRef, EllipsoidalCs, TimeCs, VerticalCs,
};
use super::datum::{
    DatumRef, EngineeringDatum, GeodeticDatum, IdentifiedObject, TemporalDatum, VerticalDatum,
};
use crate::models::citation::Identifier;
use crate::models::extent::Extent;
use crate::models::naming::Record;
use crate::models::representation::ReferenceSystemTypeCode;

/// Properties shared by every reference system (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSystem {
    /// Shared referencing-object properties
    #[serde(flatten)]
    pub object: IdentifiedObject,
    /// Area, region or time frame the system is valid in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_of_validity: Option<Box<Extent>>,
    /// Description of the usage the system is intended for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl ReferenceSystem {
    pub fn named(name: String) -> Self {
        Self {
            object: IdentifiedObject::new(name),
            domain_of_validity: None,
            scope: None,
        }
    }
}

/// Coordinate operation deriving one system's coordinates from another's
/// (ISO 19111)
///
/// Carried by derived and projected systems to record how their coordinates
/// relate to the base system. Parameter values are kept as loosely typed
/// record fields keyed by parameter name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// Shared referencing-object properties
    #[serde(flatten)]
    pub object: IdentifiedObject,
    /// Name of the operation method, e.g. `"Transverse Mercator"`
    pub method: String,
    /// Operation parameter values, keyed by parameter name
    #[serde(default, skip_serializing_if = "Record::is_empty")]
    pub parameter_value: Record,
}

impl Conversion {
    pub fn new(name: String, method: String) -> Self {
        Self {
            object: IdentifiedObject::new(name),
            method,
            parameter_value: Record::new(),
        }
    }

    pub fn with_parameter(mut self, name: String, value: serde_json::Value) -> Self {
        self.parameter_value = self.parameter_value.with_field(name, value);
        self
    }
}

/// Reference system of geocentric or ellipsoidal coordinates tied to a
/// geodetic datum (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeodeticCrs {
    /// Shared reference-system properties
    #[serde(flatten)]
    pub reference_system: ReferenceSystem,
    /// Coordinate system; geocentric systems use Cartesian or spherical axes
    pub coordinate_system: CoordinateSystemItem,
    /// Datum relating the system to the Earth
    pub datum: GeodeticDatum,
}

impl GeodeticCrs {
    pub fn new(name: String, coordinate_system: CoordinateSystemItem, datum: GeodeticDatum) -> Self {
        Self {
            reference_system: ReferenceSystem::named(name),
            coordinate_system,
            datum,
        }
    }
}

/// Geodetic reference system of ellipsoidal coordinates (ISO 19111)
///
/// The coordinate system of a geographic system is always ellipsoidal, so it
/// is stored with that exact type rather than kind-erased.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeographicCrs {
    /// Shared reference-system properties
    #[serde(flatten)]
    pub reference_system: ReferenceSystem,
    /// Ellipsoidal coordinate system of the geographic coordinates
    pub coordinate_system: EllipsoidalCs,
    /// Datum relating the system to the Earth
    pub datum: GeodeticDatum,
}

impl GeographicCrs {
    pub fn new(name: String, coordinate_system: EllipsoidalCs, datum: GeodeticDatum) -> Self {
        Self {
            reference_system: ReferenceSystem::named(name),
            coordinate_system,
            datum,
        }
    }

    /// The WGS 84 geographic system in latitude/longitude axis order.
    pub fn wgs84() -> Self {
        Self::new(
            "WGS 84".to_string(),
            EllipsoidalCs::latitude_longitude(),
            GeodeticDatum::wgs84(),
        )
    }
}

/// Reference system for gravity-related heights or depths (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerticalCrs {
    /// Shared reference-system properties
    #[serde(flatten)]
    pub reference_system: ReferenceSystem,
    /// Single-axis vertical coordinate system
    pub coordinate_system: VerticalCs,
    /// Datum fixing the origin surface heights are measured from
    pub datum: VerticalDatum,
}

impl VerticalCrs {
    pub fn new(name: String, coordinate_system: VerticalCs, datum: VerticalDatum) -> Self {
        Self {
            reference_system: ReferenceSystem::named(name),
            coordinate_system,
            datum,
        }
    }
}

/// Reference system for time coordinates (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemporalCrs {
    /// Shared reference-system properties
    #[serde(flatten)]
    pub reference_system: ReferenceSystem,
    /// Single-axis time coordinate system
    pub coordinate_system: TimeCs,
    /// Datum fixing the origin instant
    pub datum: TemporalDatum,
}

impl TemporalCrs {
    pub fn new(name: String, coordinate_system: TimeCs, datum: TemporalDatum) -> Self {
        Self {
            reference_system: ReferenceSystem::named(name),
            coordinate_system,
            datum,
        }
    }
}

/// Contextually local reference system, e.g. on a moving platform
/// (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineeringCrs {
    /// Shared reference-system properties
    #[serde(flatten)]
    pub reference_system: ReferenceSystem,
    /// Coordinate system of the local coordinates
    pub coordinate_system: CoordinateSystemItem,
    /// Datum fixing the local origin
    pub datum: EngineeringDatum,
}

impl EngineeringCrs {
    pub fn new(
        name: String,
        coordinate_system: CoordinateSystemItem,
        datum: EngineeringDatum,
    ) -> Self {
        Self {
            reference_system: ReferenceSystem::named(name),
            coordinate_system,
            datum,
        }
    }
}

/// Reference system derived from another by a conversion (ISO 19111)
///
/// The datum of a derived system is the datum of its base system, so none is
/// stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedCrs {
    /// Shared reference-system properties
    #[serde(flatten)]
    pub reference_system: ReferenceSystem,
    /// System this one is derived from
    pub base_crs: Box<CoordinateReferenceSystem>,
    /// Conversion from base coordinates to this system's coordinates
    pub conversion_from_base: Conversion,
    /// Coordinate system of the derived coordinates
    pub coordinate_system: CoordinateSystemItem,
}

impl DerivedCrs {
    pub fn new(
        name: String,
        base_crs: CoordinateReferenceSystem,
        conversion_from_base: Conversion,
        coordinate_system: CoordinateSystemItem,
    ) -> Self {
        Self {
            reference_system: ReferenceSystem::named(name),
            base_crs: Box::new(base_crs),
            conversion_from_base,
            coordinate_system,
        }
    }
}

/// Planar reference system derived from a geographic system by a map
/// projection (ISO 19111)
///
/// The base is always geographic and the coordinate system always Cartesian,
/// so both are stored with their exact types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedCrs {
    /// Shared reference-system properties
    #[serde(flatten)]
    pub reference_system: ReferenceSystem,
    /// Geographic system the projection starts from
    pub base_crs: Box<GeographicCrs>,
    /// Map projection from geographic to planar coordinates
    pub conversion_from_base: Conversion,
    /// Cartesian coordinate system of the planar coordinates
    pub coordinate_system: CartesianCs,
}

impl ProjectedCrs {
    pub fn new(
        name: String,
        base_crs: GeographicCrs,
        conversion_from_base: Conversion,
        coordinate_system: CartesianCs,
    ) -> Self {
        Self {
            reference_system: ReferenceSystem::named(name),
            base_crs: Box::new(base_crs),
            conversion_from_base,
            coordinate_system,
        }
    }

    /// Datum of the projected system, which is the base system's datum.
    pub fn datum(&self) -> &GeodeticDatum {
        &self.base_crs.datum
    }
}

/// Reference system composed of two or more independent single systems
/// (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompoundCrs {
    /// Shared reference-system properties
    #[serde(flatten)]
    pub reference_system: ReferenceSystem,
    /// Component systems, in coordinate-tuple order
    pub components: Vec<SingleCrsItem>,
}

impl CompoundCrs {
    pub fn new(name: String, components: Vec<SingleCrsItem>) -> Self {
        Self {
            reference_system: ReferenceSystem::named(name),
            components,
        }
    }

    /// Total dimension of coordinate tuples across all components.
    pub fn dimension(&self) -> usize {
        self.components
            .iter()
            .map(|component| component.as_single().coordinate_system().dimension())
            .sum()
    }
}

/// Common contract of reference systems with one coordinate system and one
/// datum (ISO 19111)
///
/// Kinds that narrow a property store the narrowed concrete type; the trait
/// returns borrowed kind-erased views, so code written against this contract
/// accepts narrowed and unnarrowed kinds alike.
pub trait SingleCrs {
    /// Shared reference-system properties.
    fn reference_system(&self) -> &ReferenceSystem;

    /// The coordinate system, viewed without fixing its kind.
    fn coordinate_system(&self) -> CoordinateSystemRef<'_>;

    /// The datum, viewed without fixing its kind. `None` only for a derived
    /// system whose base carries no single datum.
    fn datum(&self) -> Option<DatumRef<'_>>;
}

impl SingleCrs for GeodeticCrs {
    fn reference_system(&self) -> &ReferenceSystem {
        &self.reference_system
    }

    fn coordinate_system(&self) -> CoordinateSystemRef<'_> {
        self.coordinate_system.as_ref()
    }

    fn datum(&self) -> Option<DatumRef<'_>> {
        Some(DatumRef::Geodetic(&self.datum))
    }
}

impl SingleCrs for GeographicCrs {
    fn reference_system(&self) -> &ReferenceSystem {
        &self.reference_system
    }

    fn coordinate_system(&self) -> CoordinateSystemRef<'_> {
        CoordinateSystemRef::Ellipsoidal(&self.coordinate_system)
    }

    fn datum(&self) -> Option<DatumRef<'_>> {
        Some(DatumRef::Geodetic(&self.datum))
    }
}

impl SingleCrs for VerticalCrs {
    fn reference_system(&self) -> &ReferenceSystem {
        &self.reference_system
    }

    fn coordinate_system(&self) -> CoordinateSystemRef<'_> {
        CoordinateSystemRef::Vertical(&self.coordinate_system)
    }

    fn datum(&self) -> Option<DatumRef<'_>> {
        Some(DatumRef::Vertical(&self.datum))
    }
}

impl SingleCrs for TemporalCrs {
    fn reference_system(&self) -> &ReferenceSystem {
        &self.reference_system
    }

    fn coordinate_system(&self) -> CoordinateSystemRef<'_> {
        CoordinateSystemRef::Time(&self.coordinate_system)
    }

    fn datum(&self) -> Option<DatumRef<'_>> {
        Some(DatumRef::Temporal(&self.datum))
    }
}

impl SingleCrs for EngineeringCrs {
    fn reference_system(&self) -> &ReferenceSystem {
        &self.reference_system
    }

    fn coordinate_system(&self) -> CoordinateSystemRef<'_> {
        self.coordinate_system.as_ref()
    }

    fn datum(&self) -> Option<DatumRef<'_>> {
        Some(DatumRef::Engineering(&self.datum))
    }
}

impl SingleCrs for DerivedCrs {
    fn reference_system(&self) -> &ReferenceSystem {
        &self.reference_system
    }

    fn coordinate_system(&self) -> CoordinateSystemRef<'_> {
        self.coordinate_system.as_ref()
    }

    fn datum(&self) -> Option<DatumRef<'_>> {
        self.base_crs.datum()
    }
}

impl SingleCrs for ProjectedCrs {
    fn reference_system(&self) -> &ReferenceSystem {
        &self.reference_system
    }

    fn coordinate_system(&self) -> CoordinateSystemRef<'_> {
        CoordinateSystemRef::Cartesian(&self.coordinate_system)
    }

    fn datum(&self) -> Option<DatumRef<'_>> {
        Some(DatumRef::Geodetic(&self.base_crs.datum))
    }
}

/// Any concrete coordinate reference system at a reference site (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "crsType", rename_all = "camelCase")]
pub enum CoordinateReferenceSystem {
    Geodetic(GeodeticCrs),
    Geographic(GeographicCrs),
    Projected(ProjectedCrs),
    Vertical(VerticalCrs),
    Temporal(TemporalCrs),
    Engineering(EngineeringCrs),
    Derived(DerivedCrs),
    Compound(CompoundCrs),
}

impl CoordinateReferenceSystem {
    /// Shared reference-system properties regardless of kind.
    pub fn reference_system(&self) -> &ReferenceSystem {
        match self {
            CoordinateReferenceSystem::Geodetic(crs) => &crs.reference_system,
            CoordinateReferenceSystem::Geographic(crs) => &crs.reference_system,
            CoordinateReferenceSystem::Projected(crs) => &crs.reference_system,
            CoordinateReferenceSystem::Vertical(crs) => &crs.reference_system,
            CoordinateReferenceSystem::Temporal(crs) => &crs.reference_system,
            CoordinateReferenceSystem::Engineering(crs) => &crs.reference_system,
            CoordinateReferenceSystem::Derived(crs) => &crs.reference_system,
            CoordinateReferenceSystem::Compound(crs) => &crs.reference_system,
        }
    }

    /// Name of the reference system.
    pub fn name(&self) -> &str {
        &self.reference_system().object.name
    }

    /// The system viewed through the single-system contract, or `None` for a
    /// compound system.
    pub fn single(&self) -> Option<&dyn SingleCrs> {
        match self {
            CoordinateReferenceSystem::Geodetic(crs) => Some(crs),
            CoordinateReferenceSystem::Geographic(crs) => Some(crs),
            CoordinateReferenceSystem::Projected(crs) => Some(crs),
            CoordinateReferenceSystem::Vertical(crs) => Some(crs),
            CoordinateReferenceSystem::Temporal(crs) => Some(crs),
            CoordinateReferenceSystem::Engineering(crs) => Some(crs),
            CoordinateReferenceSystem::Derived(crs) => Some(crs),
            CoordinateReferenceSystem::Compound(_) => None,
        }
    }

    /// The datum, where the kind carries a single one.
    pub fn datum(&self) -> Option<DatumRef<'_>> {
        self.single().and_then(|single| single.datum())
    }
}

/// Any non-compound coordinate reference system, as composed into compound
/// systems (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "crsType", rename_all = "camelCase")]
pub enum SingleCrsItem {
    Geodetic(GeodeticCrs),
    Geographic(GeographicCrs),
    Projected(ProjectedCrs),
    Vertical(VerticalCrs),
    Temporal(TemporalCrs),
    Engineering(EngineeringCrs),
    Derived(DerivedCrs),
}

impl SingleCrsItem {
    /// The system viewed through the single-system contract.
    pub fn as_single(&self) -> &dyn SingleCrs {
        match self {
            SingleCrsItem::Geodetic(crs) => crs,
            SingleCrsItem::Geographic(crs) => crs,
            SingleCrsItem::Projected(crs) => crs,
            SingleCrsItem::Vertical(crs) => crs,
            SingleCrsItem::Temporal(crs) => crs,
            SingleCrsItem::Engineering(crs) => crs,
            SingleCrsItem::Derived(crs) => crs,
        }
    }
}

impl From<SingleCrsItem> for CoordinateReferenceSystem {
    fn from(single: SingleCrsItem) -> Self {
        match single {
            SingleCrsItem::Geodetic(crs) => CoordinateReferenceSystem::Geodetic(crs),
            SingleCrsItem::Geographic(crs) => CoordinateReferenceSystem::Geographic(crs),
            SingleCrsItem::Projected(crs) => CoordinateReferenceSystem::Projected(crs),
            SingleCrsItem::Vertical(crs) => CoordinateReferenceSystem::Vertical(crs),
            SingleCrsItem::Temporal(crs) => CoordinateReferenceSystem::Temporal(crs),
            SingleCrsItem::Engineering(crs) => CoordinateReferenceSystem::Engineering(crs),
            SingleCrsItem::Derived(crs) => CoordinateReferenceSystem::Derived(crs),
        }
    }
}

/// Reference system cited by identifier only, the shorthand metadata records
/// commonly carry (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataReferenceSystem {
    /// Identifier of the reference system, e.g. an EPSG code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_system_identifier: Option<Identifier>,
    /// Kind of reference system the identifier denotes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_system_type: Option<ReferenceSystemTypeCode>,
}

impl MetadataReferenceSystem {
    pub fn from_identifier(identifier: Identifier) -> Self {
        Self {
            reference_system_identifier: Some(identifier),
            reference_system_type: None,
        }
    }

    pub fn with_type(mut self, reference_system_type: ReferenceSystemTypeCode) -> Self {
        self.reference_system_type = Some(reference_system_type);
        self
    }
}

/// A reference system declared by a resource, either fully described or cited
/// by identifier
///
/// Untagged: the fully described form is tried first because its kind tag
/// makes it unambiguous; anything without a kind tag is read as the cited
/// form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ReferenceSystemItem {
    /// A fully described coordinate reference system
    Coordinate(CoordinateReferenceSystem),
    /// A reference system cited by identifier only
    Metadata(MetadataReferenceSystem),
}

impl ReferenceSystemItem {
    /// Name of the system where described, or the cited code otherwise.
    pub fn name(&self) -> Option<&str> {
        match self {
            ReferenceSystemItem::Coordinate(crs) => Some(crs.name()),
            ReferenceSystemItem::Metadata(cited) => cited
                .reference_system_identifier
                .as_ref()
                .map(|identifier| identifier.code.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referencing::cs::{AxisDirection, CoordinateSystemAxis};
    use crate::referencing::datum::VerticalDatumType;

    fn utm_zone_33n() -> ProjectedCrs {
        let easting = CoordinateSystemAxis::new(
            "Easting".to_string(),
            "E".to_string(),
            AxisDirection::East,
        );
        let northing = CoordinateSystemAxis::new(
            "Northing".to_string(),
            "N".to_string(),
            AxisDirection::North,
        );
        ProjectedCrs::new(
            "WGS 84 / UTM zone 33N".to_string(),
            GeographicCrs::wgs84(),
            Conversion::new(
                "UTM zone 33N".to_string(),
                "Transverse Mercator".to_string(),
            )
            .with_parameter(
                "Longitude of natural origin".to_string(),
                serde_json::json!(15.0),
            ),
            CartesianCs::new("Cartesian 2D".to_string(), vec![easting, northing]),
        )
    }

    fn describe<T: SingleCrs>(crs: &T) -> (String, usize) {
        (
            crs.reference_system().object.name.clone(),
            crs.coordinate_system().dimension(),
        )
    }

    #[test]
    fn test_narrowed_types_satisfy_single_contract() {
        let geographic = GeographicCrs::wgs84();
        // The narrowed field is usable without any downcast.
        assert_eq!(
            geographic.coordinate_system.coordinate_system.axis[0].abbreviation,
            "Lat"
        );
        assert_eq!(describe(&geographic), ("WGS 84".to_string(), 2));

        let projected = utm_zone_33n();
        assert_eq!(describe(&projected), ("WGS 84 / UTM zone 33N".to_string(), 2));
    }

    #[test]
    fn test_projected_datum_comes_from_base() {
        let projected = utm_zone_33n();
        assert_eq!(projected.datum().datum.object.name, "World Geodetic System 1984");
        match SingleCrs::datum(&projected) {
            Some(DatumRef::Geodetic(datum)) => {
                assert_eq!(datum.ellipsoid.object.name, "WGS 84")
            }
            other => panic!("unexpected datum view: {other:?}"),
        }
    }

    #[test]
    fn test_crs_kind_tag_roundtrip() {
        let crs = CoordinateReferenceSystem::Projected(utm_zone_33n());
        let json = serde_json::to_value(&crs).unwrap();
        assert_eq!(json["crsType"], "projected");
        assert_eq!(json["conversionFromBase"]["method"], "Transverse Mercator");
        // The narrowed base carries no kind tag; its kind is fixed by the type.
        assert!(json["baseCrs"].get("crsType").is_none());
        assert_eq!(json["baseCrs"]["datum"]["ellipsoid"]["semiMajorAxis"], 6_378_137.0);

        let back: CoordinateReferenceSystem = serde_json::from_value(json).unwrap();
        assert_eq!(back, crs);
    }

    #[test]
    fn test_compound_dimension_sums_components() {
        let vertical = VerticalCrs::new(
            "EGM2008 height".to_string(),
            VerticalCs::new(
                "Gravity-related height".to_string(),
                CoordinateSystemAxis::new("H".to_string(), "H".to_string(), AxisDirection::Up),
            ),
            VerticalDatum::new("EGM2008 geoid".to_string(), VerticalDatumType::Geoidal),
        );
        let compound = CompoundCrs::new(
            "WGS 84 + EGM2008 height".to_string(),
            vec![
                SingleCrsItem::Geographic(GeographicCrs::wgs84()),
                SingleCrsItem::Vertical(vertical),
            ],
        );
        assert_eq!(compound.dimension(), 3);

        let crs = CoordinateReferenceSystem::Compound(compound);
        assert!(crs.single().is_none());
        assert!(crs.datum().is_none());
    }

    #[test]
    fn test_reference_system_item_forms() {
        let cited: ReferenceSystemItem = serde_json::from_value(serde_json::json!({
            "referenceSystemIdentifier": { "code": "4326", "codeSpace": "EPSG" }
        }))
        .unwrap();
        assert_eq!(cited.name(), Some("4326"));

        let described = ReferenceSystemItem::Coordinate(CoordinateReferenceSystem::Geographic(
            GeographicCrs::wgs84(),
        ));
        let json = serde_json::to_value(&described).unwrap();
        let back: ReferenceSystemItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, described);
        assert_eq!(described.name(), Some("WGS 84"));
    }
}
