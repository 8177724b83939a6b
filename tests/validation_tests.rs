//! Conditional validation tests
//!
//! Builds realistic resource descriptions and checks that the validator
//! accepts complete graphs, pinpoints incomplete records by property path,
//! and reports which at-least-one-of group was violated.

use chrono::{TimeZone, Utc};

use geo_metadata_sdk::models::citation::{
    Citation, CitationDate, DateTypeCode, Organisation, Party, Responsibility, RoleCode,
};
use geo_metadata_sdk::models::constraints::{LegalConstraints, Releasability, RestrictionCode};
use geo_metadata_sdk::models::extent::{
    Extent, GeographicBoundingBox, Period, TemporalElement, TemporalExtent,
};
use geo_metadata_sdk::models::identification::{DataIdentification, KeywordTypeCode, Keywords};
use geo_metadata_sdk::models::lineage::{Lineage, ProcessStep, Source};
use geo_metadata_sdk::models::maintenance::{Scope, ScopeCode};
use geo_metadata_sdk::validation::{conditional_groups, MetadataValidator};

fn sentinel_2_citation() -> Citation {
    Citation::new("Sentinel-2 L2A surface reflectance, Germany".to_string())
        .with_date(CitationDate::new(
            Utc.with_ymd_and_hms(2021, 3, 15, 0, 0, 0).unwrap(),
            DateTypeCode::Publication,
        ))
        .with_responsible_party(Responsibility::new(
            RoleCode::Publisher,
            vec![Party::Organisation(Organisation::new(
                "European Space Agency".to_string(),
            ))],
        ))
}

fn germany_2021() -> Extent {
    let begin = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap();
    Extent::geographic(GeographicBoundingBox::new(5.87, 15.04, 47.27, 55.06))
        .with_temporal_element(TemporalElement::Temporal(TemporalExtent::new(Period::new(
            begin, end,
        ))))
}

fn surface_reflectance_dataset() -> DataIdentification {
    let mut dataset = DataIdentification::new(
        sentinel_2_citation(),
        "Atmospherically corrected surface reflectance tiles over Germany".to_string(),
    );
    dataset.identification = dataset
        .identification
        .with_extent(germany_2021())
        .with_keywords(
            Keywords::new(vec!["surface reflectance".to_string()])
                .with_type(KeywordTypeCode::Theme),
        );
    dataset
}

mod registry_tests {
    use super::*;

    #[test]
    fn test_registry_covers_the_documented_groups() {
        let groups = conditional_groups();
        assert_eq!(groups.len(), 5);

        let restriction = groups
            .iter()
            .find(|g| g.entity == "LegalConstraints")
            .unwrap();
        assert_eq!(restriction.group, "restriction");
        assert!(restriction.members.contains(&"access_constraints"));
        assert!(restriction.members.contains(&"use_limitation"));
    }
}

mod graph_walk_tests {
    use super::*;

    #[test]
    fn test_complete_dataset_description_is_valid() {
        let dataset = surface_reflectance_dataset();
        let report = MetadataValidator::new().validate(&dataset);
        assert!(report.is_valid(), "unexpected violations: {:?}", report.violations);
    }

    #[test]
    fn test_empty_extent_is_located_by_path() {
        let mut dataset = surface_reflectance_dataset();
        dataset.identification = dataset.identification.with_extent(Extent::default());

        let report = MetadataValidator::new().validate(&dataset);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "data_identification.extent[1]");
        assert_eq!(report.violations[0].group.label(), "Extent.element");
    }

    #[test]
    fn test_bare_legal_constraints_are_rejected() {
        let mut dataset = surface_reflectance_dataset();
        dataset.identification = dataset
            .identification
            .with_resource_constraints(LegalConstraints::default());

        let report = MetadataValidator::new().validate(&dataset);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].path,
            "data_identification.resource_constraints[0]"
        );
        assert_eq!(
            report.violations[0].group.label(),
            "LegalConstraints.restriction"
        );
    }

    #[test]
    fn test_restriction_via_flattened_base_counts() {
        let mut constraints = LegalConstraints::default();
        constraints.constraints.releasability = Some(
            Releasability::default().with_statement("Cleared for public release".to_string()),
        );

        let mut dataset = surface_reflectance_dataset();
        dataset.identification = dataset.identification.with_resource_constraints(constraints);

        let report = MetadataValidator::new().validate(&dataset);
        assert!(report.is_valid(), "unexpected violations: {:?}", report.violations);
    }

    #[test]
    fn test_releasability_without_target_is_rejected() {
        let mut constraints = LegalConstraints::default();
        constraints.access_constraints.push(RestrictionCode::Licence);
        constraints.constraints.releasability = Some(Releasability::default());

        let mut dataset = surface_reflectance_dataset();
        dataset.identification = dataset.identification.with_resource_constraints(constraints);

        let report = MetadataValidator::new().validate(&dataset);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].path,
            "data_identification.resource_constraints[0].releasability"
        );
        assert_eq!(report.violations[0].group.label(), "Releasability.target");
    }
}

mod lineage_walk_tests {
    use super::*;

    fn processing_chain() -> Lineage {
        let mut step = ProcessStep::new("Atmospheric correction with Sen2Cor".to_string());
        step.source.push(Source::described("L1C input tiles".to_string()));

        let mut lineage = Lineage::default();
        lineage.process_step.push(step);
        lineage
    }

    #[test]
    fn test_process_steps_alone_satisfy_the_content_group() {
        let report = MetadataValidator::new().validate(&processing_chain());
        assert!(report.is_valid(), "unexpected violations: {:?}", report.violations);
    }

    #[test]
    fn test_incomplete_source_inside_step_is_located() {
        let mut lineage = processing_chain();
        lineage.process_step[0].source.push(Source::default());

        let report = MetadataValidator::new().validate(&lineage);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].path,
            "lineage.process_step[0].source[1]"
        );
        assert_eq!(
            report.violations[0].group.label(),
            "Source.description_or_scope"
        );
    }

    #[test]
    fn test_source_scope_counts_as_presence() {
        let mut source = Source::default();
        source.scope = Some(Scope::new(ScopeCode::Dataset));

        let report = MetadataValidator::new().validate(&source);
        assert!(report.is_valid());
    }
}

mod error_reporting_tests {
    use super::*;

    #[test]
    fn test_into_result_surfaces_every_violation() {
        // No statement, steps or sources, and a scope whose extent is empty:
        // two independent violations at two different paths.
        let mut lineage = Lineage::default();
        lineage.scope = Some(Scope::new(ScopeCode::Dataset).with_extent(Extent::default()));

        let report = MetadataValidator::new().validate(&lineage);
        let err = report.into_result().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert_eq!(err.to_string(), "2 conditional obligation(s) violated");

        let messages: Vec<String> = err.violations.iter().map(|v| v.to_string()).collect();
        assert!(messages[0].starts_with("lineage: Lineage.content requires at least one of"));
        assert_eq!(
            messages[1],
            "lineage.scope.extent[0]: Extent.element requires at least one of description, geographic_element, temporal_element, vertical_element"
        );
    }
}
