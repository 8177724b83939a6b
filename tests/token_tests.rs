//! Code list token tests
//!
//! The tokens carried by code-list members are interchange values and must
//! match the standards byte for byte, including the historically irregular
//! spellings. These tests pin the tokens that are easy to get wrong.

use geo_metadata_sdk::vocabulary::{package_for, CodeList};

mod token_contract_tests {
    use super::*;
    use geo_metadata_sdk::models::citation::{
        DateTypeCode, OnLineFunctionCode, PresentationFormCode, RoleCode, TelephoneTypeCode,
    };
    use geo_metadata_sdk::models::constraints::{ClassificationCode, RestrictionCode};
    use geo_metadata_sdk::models::content::{
        BandDefinition, CoverageContentTypeCode, ImagingConditionCode,
        PolarisationOrientationCode, TransferFunctionTypeCode,
    };
    use geo_metadata_sdk::models::distribution::MediumFormatCode;
    use geo_metadata_sdk::models::extension::{DatatypeCode, ObligationCode};
    use geo_metadata_sdk::models::identification::{
        AssociationTypeCode, InitiativeTypeCode, KeywordTypeCode, ProgressCode,
        TopicCategoryCode,
    };
    use geo_metadata_sdk::models::maintenance::{MaintenanceFrequencyCode, ScopeCode};
    use geo_metadata_sdk::models::quality::EvaluationMethodTypeCode;
    use geo_metadata_sdk::models::representation::{
        CellGeometryCode, DimensionNameTypeCode, GeometricObjectTypeCode, PixelOrientationCode,
        ReferenceSystemTypeCode, SpatialRepresentationTypeCode, TopologyLevelCode,
    };
    use geo_metadata_sdk::models::service::{CouplingType, DcpList, ParameterDirection};
    use geo_metadata_sdk::referencing::cs::{AxisDirection, RangeMeaning};
    use geo_metadata_sdk::referencing::datum::VerticalDatumType;

    #[test]
    fn test_tokens_are_lower_camel_case_by_default() {
        assert_eq!(RoleCode::PointOfContact.token(), "pointOfContact");
        assert_eq!(DateTypeCode::LastUpdate.token(), "lastUpdate");
        assert_eq!(ScopeCode::NonGeographicDataset.token(), "nonGeographicDataset");
    }

    #[test]
    fn test_every_list_round_trips_over_its_whole_domain() {
        fn round_trips<L: CodeList>() {
            for member in L::all() {
                assert_eq!(
                    L::from_token(member.token()),
                    Some(*member),
                    "{} token {:?}",
                    L::NAME,
                    member.token()
                );
            }
        }

        round_trips::<DateTypeCode>();
        round_trips::<OnLineFunctionCode>();
        round_trips::<PresentationFormCode>();
        round_trips::<RoleCode>();
        round_trips::<TelephoneTypeCode>();
        round_trips::<ClassificationCode>();
        round_trips::<RestrictionCode>();
        round_trips::<MaintenanceFrequencyCode>();
        round_trips::<ScopeCode>();
        round_trips::<AssociationTypeCode>();
        round_trips::<InitiativeTypeCode>();
        round_trips::<KeywordTypeCode>();
        round_trips::<ProgressCode>();
        round_trips::<TopicCategoryCode>();
        round_trips::<CellGeometryCode>();
        round_trips::<DimensionNameTypeCode>();
        round_trips::<GeometricObjectTypeCode>();
        round_trips::<PixelOrientationCode>();
        round_trips::<ReferenceSystemTypeCode>();
        round_trips::<SpatialRepresentationTypeCode>();
        round_trips::<TopologyLevelCode>();
        round_trips::<BandDefinition>();
        round_trips::<CoverageContentTypeCode>();
        round_trips::<ImagingConditionCode>();
        round_trips::<PolarisationOrientationCode>();
        round_trips::<TransferFunctionTypeCode>();
        round_trips::<MediumFormatCode>();
        round_trips::<CouplingType>();
        round_trips::<DcpList>();
        round_trips::<ParameterDirection>();
        round_trips::<DatatypeCode>();
        round_trips::<ObligationCode>();
        round_trips::<EvaluationMethodTypeCode>();
        round_trips::<AxisDirection>();
        round_trips::<RangeMeaning>();
        round_trips::<VerticalDatumType>();
    }

    #[test]
    fn test_variant_names_are_not_tokens() {
        // The Rust identifier is internal; only the token is in the domain.
        assert_eq!(RoleCode::from_token("PointOfContact"), None);
        assert_eq!(TelephoneTypeCode::from_token("Voice"), None);
    }

    #[test]
    fn test_parse_failure_names_the_list() {
        let err = "innovator".parse::<RoleCode>().unwrap_err();
        assert_eq!(err.list, "RoleCode");
        assert_eq!(err.token, "innovator");
        assert_eq!(err.to_string(), "unknown RoleCode token: innovator");
    }

    #[test]
    fn test_display_writes_the_token() {
        assert_eq!(RoleCode::Custodian.to_string(), "custodian");
        assert_eq!("custodian".parse::<RoleCode>().unwrap(), RoleCode::Custodian);
    }
}

mod irregular_token_tests {
    use super::*;
    use geo_metadata_sdk::models::constraints::RestrictionCode;
    use geo_metadata_sdk::models::content::{BandDefinition, CoverageContentTypeCode};
    use geo_metadata_sdk::models::extension::ObligationCode;
    use geo_metadata_sdk::models::service::{DcpList, ParameterDirection};

    #[test]
    fn test_hyphenated_restriction_token() {
        assert_eq!(RestrictionCode::InConfidence.token(), "in-confidence");
        assert_eq!(
            RestrictionCode::from_token("in-confidence"),
            Some(RestrictionCode::InConfidence)
        );
        assert_eq!(RestrictionCode::from_token("inConfidence"), None);
    }

    #[test]
    fn test_band_definition_starts_with_a_digit() {
        assert_eq!(BandDefinition::ThreeDb.token(), "3dB");
        assert_eq!(
            serde_json::to_value(BandDefinition::ThreeDb).unwrap(),
            serde_json::json!("3dB")
        );
    }

    #[test]
    fn test_coverage_content_keeps_historical_spelling() {
        // The standard itself spells the token without the second "i".
        assert_eq!(
            CoverageContentTypeCode::AuxillaryInformation.token(),
            "auxillaryInformation"
        );
        assert_eq!(
            CoverageContentTypeCode::from_token("auxiliaryInformation"),
            None
        );
    }

    #[test]
    fn test_forbidden_obligation_is_the_null_token() {
        assert_eq!(ObligationCode::Forbidden.token(), "null");
        assert_eq!(
            serde_json::to_value(ObligationCode::Forbidden).unwrap(),
            serde_json::json!("null")
        );
    }

    #[test]
    fn test_platform_tokens_keep_their_casing() {
        assert_eq!(DcpList::Xml.token(), "XML");
        assert_eq!(DcpList::Z3950.token(), "Z3950");
        assert_eq!(DcpList::WebServices.token(), "WebServices");
    }

    #[test]
    fn test_bidirectional_parameter_token_contains_a_slash() {
        assert_eq!(ParameterDirection::InOut.token(), "in/out");
        assert_eq!(
            ParameterDirection::from_token("in/out"),
            Some(ParameterDirection::InOut)
        );
    }
}

mod serde_wire_tests {
    use geo_metadata_sdk::models::citation::RoleCode;
    use geo_metadata_sdk::models::identification::{Keywords, TopicCategoryCode};

    #[test]
    fn test_code_lists_serialize_as_bare_tokens() {
        let json = serde_json::to_string(&TopicCategoryCode::ImageryBaseMapsEarthCover).unwrap();
        assert_eq!(json, "\"imageryBaseMapsEarthCover\"");

        let back: TopicCategoryCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TopicCategoryCode::ImageryBaseMapsEarthCover);
    }

    #[test]
    fn test_unknown_tokens_are_rejected_on_deserialize() {
        let result = serde_json::from_str::<RoleCode>("\"maintainer\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_keyword_type_serializes_under_reserved_name() {
        let keywords = Keywords::new(vec!["elevation".to_string()])
            .with_type(geo_metadata_sdk::models::identification::KeywordTypeCode::Theme);
        let json = serde_json::to_value(&keywords).unwrap();
        assert_eq!(json["type"], "theme");
        assert!(json.get("keywordType").is_none());
    }
}

mod vocabulary_registry_tests {
    use super::*;

    #[test]
    fn test_package_prefixes_resolve_to_their_standards() {
        assert_eq!(package_for("CI").unwrap().standard, "ISO 19115-1");
        assert_eq!(package_for("DQ").unwrap().standard, "ISO 19157");
        assert_eq!(package_for("TM").unwrap().standard, "ISO 19108");
        assert!(package_for("QQ").is_none());
    }
}
