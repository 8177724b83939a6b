//! Referencing model tests
//!
//! Exercises assembled coordinate reference systems across module seams:
//! narrowed component types against the general single-system contract,
//! compound composition, the serialized kind tags, and the places where
//! metadata records point into the referencing model.

use chrono::{TimeZone, Utc};

use geo_metadata_sdk::models::citation::Identifier;
use geo_metadata_sdk::models::measure::UnitOfMeasure;
use geo_metadata_sdk::referencing::{
    AxisDirection, CartesianCs, CompoundCrs, Conversion, CoordinateReferenceSystem,
    CoordinateSystemAxis, CoordinateSystemRef, DatumRef, GeographicCrs, MetadataReferenceSystem,
    ProjectedCrs, ReferenceSystemItem, SingleCrs, SingleCrsItem, TemporalCrs, TemporalDatum,
    TimeCs, VerticalCrs, VerticalCs, VerticalDatum, VerticalDatumType,
};

fn utm_zone_32n() -> ProjectedCrs {
    let easting =
        CoordinateSystemAxis::new("Easting".to_string(), "E".to_string(), AxisDirection::East)
            .with_unit(UnitOfMeasure::new("m".to_string()));
    let northing =
        CoordinateSystemAxis::new("Northing".to_string(), "N".to_string(), AxisDirection::North)
            .with_unit(UnitOfMeasure::new("m".to_string()));

    let mut projected = ProjectedCrs::new(
        "ETRS89 / UTM zone 32N".to_string(),
        GeographicCrs::wgs84(),
        Conversion::new("UTM zone 32N".to_string(), "Transverse Mercator".to_string())
            .with_parameter("Longitude of natural origin".to_string(), serde_json::json!(9.0))
            .with_parameter("Scale factor at natural origin".to_string(), serde_json::json!(0.9996)),
        CartesianCs::new("Cartesian 2D".to_string(), vec![easting, northing]),
    );
    projected
        .reference_system
        .object
        .identifier
        .push(Identifier::new("25832".to_string()).with_code_space("EPSG".to_string()));
    projected
}

fn normaal_amsterdams_peil() -> VerticalCrs {
    VerticalCrs::new(
        "NAP height".to_string(),
        VerticalCs::new(
            "Gravity-related height".to_string(),
            CoordinateSystemAxis::new("Height".to_string(), "H".to_string(), AxisDirection::Up),
        ),
        VerticalDatum::new("Normaal Amsterdams Peil".to_string(), VerticalDatumType::Geoidal),
    )
}

mod narrowing_tests {
    use super::*;

    fn summarize(crs: &dyn SingleCrs) -> (String, usize, Option<String>) {
        (
            crs.reference_system().object.name.clone(),
            crs.coordinate_system().dimension(),
            crs.datum().map(|datum| datum.name().to_string()),
        )
    }

    #[test]
    fn test_narrowed_components_are_directly_typed() {
        let projected = utm_zone_32n();
        // The base is a geographic system by type; no downcast involved.
        assert_eq!(projected.base_crs.coordinate_system.coordinate_system.axis.len(), 2);
        assert_eq!(projected.coordinate_system.coordinate_system.axis[0].abbreviation, "E");
        // The inherent accessor returns the concrete geodetic datum.
        assert_eq!(projected.datum().datum.object.name, "World Geodetic System 1984");
    }

    #[test]
    fn test_every_kind_satisfies_the_single_contract() {
        let geographic = GeographicCrs::wgs84();
        let projected = utm_zone_32n();
        let vertical = normaal_amsterdams_peil();

        assert_eq!(
            summarize(&geographic),
            (
                "WGS 84".to_string(),
                2,
                Some("World Geodetic System 1984".to_string())
            )
        );
        assert_eq!(
            summarize(&projected),
            (
                "ETRS89 / UTM zone 32N".to_string(),
                2,
                Some("World Geodetic System 1984".to_string())
            )
        );
        assert_eq!(
            summarize(&vertical),
            (
                "NAP height".to_string(),
                1,
                Some("Normaal Amsterdams Peil".to_string())
            )
        );
    }

    #[test]
    fn test_contract_views_carry_the_narrowed_kind() {
        let vertical = normaal_amsterdams_peil();
        match vertical.coordinate_system() {
            CoordinateSystemRef::Vertical(cs) => {
                assert_eq!(cs.coordinate_system.axis[0].abbreviation, "H")
            }
            other => panic!("unexpected coordinate system view: {other:?}"),
        }
        match SingleCrs::datum(&vertical) {
            Some(DatumRef::Vertical(datum)) => {
                assert_eq!(datum.vertical_datum_type, VerticalDatumType::Geoidal)
            }
            other => panic!("unexpected datum view: {other:?}"),
        }
    }
}

mod compound_tests {
    use super::*;

    fn position_and_time() -> CompoundCrs {
        let temporal = TemporalCrs::new(
            "Acquisition time".to_string(),
            TimeCs::new(
                "Time".to_string(),
                CoordinateSystemAxis::new(
                    "Time".to_string(),
                    "t".to_string(),
                    AxisDirection::Future,
                ),
            ),
            TemporalDatum::new(
                "Unix epoch".to_string(),
                Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
            ),
        );
        CompoundCrs::new(
            "UTM 32N + NAP + time".to_string(),
            vec![
                SingleCrsItem::Projected(utm_zone_32n()),
                SingleCrsItem::Vertical(normaal_amsterdams_peil()),
                SingleCrsItem::Temporal(temporal),
            ],
        )
    }

    #[test]
    fn test_dimension_sums_over_components() {
        assert_eq!(position_and_time().dimension(), 4);
    }

    #[test]
    fn test_compound_has_no_single_datum() {
        let crs = CoordinateReferenceSystem::Compound(position_and_time());
        assert!(crs.single().is_none());
        assert!(crs.datum().is_none());
        assert_eq!(crs.name(), "UTM 32N + NAP + time");
    }
}

mod wire_tests {
    use super::*;

    #[test]
    fn test_kind_tags_follow_the_variant() {
        let geographic =
            CoordinateReferenceSystem::Geographic(GeographicCrs::wgs84());
        let json = serde_json::to_value(&geographic).unwrap();
        assert_eq!(json["crsType"], "geographic");

        let vertical = CoordinateReferenceSystem::Vertical(normaal_amsterdams_peil());
        assert_eq!(serde_json::to_value(&vertical).unwrap()["crsType"], "vertical");
    }

    #[test]
    fn test_projected_roundtrip_keeps_identifier_and_parameters() {
        let crs = CoordinateReferenceSystem::Projected(utm_zone_32n());
        let json = serde_json::to_value(&crs).unwrap();

        assert_eq!(json["identifier"][0]["code"], "25832");
        assert_eq!(json["identifier"][0]["codeSpace"], "EPSG");
        assert_eq!(json["conversionFromBase"]["parameterValue"]["Longitude of natural origin"], 9.0);
        // The narrowed base needs no kind tag.
        assert!(json["baseCrs"].get("crsType").is_none());

        let back: CoordinateReferenceSystem = serde_json::from_value(json).unwrap();
        assert_eq!(back, crs);
    }

    #[test]
    fn test_reference_system_item_prefers_the_described_form() {
        let described: ReferenceSystemItem = serde_json::from_value(serde_json::json!({
            "crsType": "geographic",
            "name": "WGS 84",
            "coordinateSystem": geo_metadata_sdk::referencing::EllipsoidalCs::latitude_longitude(),
            "datum": geo_metadata_sdk::referencing::GeodeticDatum::wgs84(),
        }))
        .unwrap();
        assert!(matches!(described, ReferenceSystemItem::Coordinate(_)));

        let cited: ReferenceSystemItem = serde_json::from_value(serde_json::json!({
            "referenceSystemIdentifier": { "code": "4258", "codeSpace": "EPSG" }
        }))
        .unwrap();
        assert!(matches!(cited, ReferenceSystemItem::Metadata(_)));
        assert_eq!(cited.name(), Some("4258"));
    }

    #[test]
    fn test_cited_reference_system_roundtrip() {
        let cited = ReferenceSystemItem::Metadata(
            MetadataReferenceSystem::from_identifier(
                Identifier::new("4326".to_string()).with_code_space("EPSG".to_string()),
            )
            .with_type(
                geo_metadata_sdk::models::representation::ReferenceSystemTypeCode::GeodeticGeographic2d,
            ),
        );
        let json = serde_json::to_value(&cited).unwrap();
        assert_eq!(json["referenceSystemType"], "geodeticGeographic2D");

        let back: ReferenceSystemItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, cited);
    }
}

mod metadata_seam_tests {
    use super::*;
    use geo_metadata_sdk::geometry::DirectPosition;
    use geo_metadata_sdk::models::extent::VerticalExtent;

    #[test]
    fn test_vertical_extent_carries_its_crs() {
        let extent = VerticalExtent::new(-6.76, 322.2).with_vertical_crs(normaal_amsterdams_peil());
        let json = serde_json::to_value(&extent).unwrap();
        assert_eq!(json["minimumValue"], -6.76);
        assert_eq!(json["verticalCrs"]["datum"]["name"], "Normaal Amsterdams Peil");

        let back: VerticalExtent = serde_json::from_value(json).unwrap();
        assert_eq!(back, extent);
    }

    #[test]
    fn test_direct_position_declares_its_system() {
        let mut position = DirectPosition::xy(691_875.6, 5_335_591.2);
        position.coordinate_reference_system = Some(Box::new(
            CoordinateReferenceSystem::Projected(utm_zone_32n()),
        ));
        assert_eq!(position.dimension(), 2);

        let json = serde_json::to_value(&position).unwrap();
        assert_eq!(json["coordinate"][0], 691_875.6);
        assert_eq!(json["coordinateReferenceSystem"]["crsType"], "projected");
    }
}
