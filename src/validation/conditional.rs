//! Walker that checks value graphs against the conditional-group registry.
//!
//! Always-mandatory properties are enforced by constructors; the conditional
//! groups in [`groups`](super::groups) are checked here instead, after a
//! value graph has been assembled. [`MetadataValidator::validate`] walks every
//! property through which a conditionally constrained record is reachable and
//! reports each site where a group's members are all absent, together with
//! the dotted property path leading to it.
//!
//! Absence follows the serialized form: a `None` option and an empty sequence
//! are absent, while an empty string is still a present value.

use tracing::debug;

use super::groups::{
    ConditionalGroup, ConditionalGroupViolation, ValidationReport, EXTENT_ELEMENT,
    LEGAL_CONSTRAINTS_RESTRICTION, LINEAGE_CONTENT, RELEASABILITY_TARGET,
    SOURCE_DESCRIPTION_OR_SCOPE,
};
use crate::models::citation::{
    Citation, Identifier, Individual, Organisation, Party, PartyInfo, Responsibility,
};
use crate::models::constraints::{
    ConstraintItem, Constraints, LegalConstraints, Releasability, SecurityConstraints,
};
use crate::models::content::{
    AttributeGroup, Band, ContentInformationItem, CoverageDescription,
    FeatureCatalogueDescription, ImageDescription, RangeDimension, RangeDimensionItem,
    SampleDimension,
};
use crate::models::distribution::{
    DigitalTransferOptions, Distribution, Distributor, Format, Medium,
};
use crate::models::extent::{Extent, GeographicExtent, TemporalElement, VerticalExtent};
use crate::models::identification::{
    AssociatedResource, BrowseGraphic, DataIdentification, Identification, KeywordClass,
    Keywords, Usage,
};
use crate::models::lineage::{
    Algorithm, Lineage, ProcessParameter, ProcessStep, Processing, Source,
};
use crate::models::maintenance::{MaintenanceInformation, Scope};
use crate::models::quality::{DataQuality, QualityElement, QualityResult};
use crate::models::representation::{
    Gcp, GcpCollection, GeolocationInformation, GeolocationItem, Georectified, Georeferenceable,
    GridSpatialRepresentation, SpatialRepresentation, SpatialRepresentationItem,
    VectorSpatialRepresentation,
};
use crate::models::service::{CoupledResource, ServiceIdentification};
use crate::referencing::crs::ReferenceSystemItem;

/// Checks a value and its reachable children for conditional obligations.
///
/// Implementations check their own groups first, then descend into every
/// property that can lead to another conditionally constrained record.
/// Records embedded through serde flattening are checked without adding a
/// path segment, matching their serialized position.
pub trait ValidateConditional {
    /// Path segment used when this value is the validation root.
    fn root_name(&self) -> &'static str;

    /// Check this value, recording violations into `ctx`.
    fn check(&self, ctx: &mut ValidationContext);
}

/// Tracks the property path during a walk and accumulates violations.
#[derive(Debug)]
pub struct ValidationContext {
    segments: Vec<String>,
    violations: Vec<ConditionalGroupViolation>,
}

impl ValidationContext {
    fn new(root: &'static str) -> Self {
        Self {
            segments: vec![root.to_string()],
            violations: Vec::new(),
        }
    }

    fn path(&self) -> String {
        self.segments.join(".")
    }

    /// Descend into a named property.
    pub fn enter(&mut self, segment: &str) {
        self.segments.push(segment.to_string());
    }

    /// Descend into one element of a sequence-valued property.
    pub fn enter_indexed(&mut self, segment: &str, index: usize) {
        self.segments.push(format!("{segment}[{index}]"));
    }

    /// Leave the current property.
    pub fn exit(&mut self) {
        self.segments.pop();
    }

    /// Record a violation of `group` unless at least one member is present.
    pub fn require_any(&mut self, group: &'static ConditionalGroup, present: &[bool]) {
        if !present.iter().any(|p| *p) {
            self.violations.push(ConditionalGroupViolation {
                path: self.path(),
                group,
            });
        }
    }

    /// Check a child value under its property name.
    pub fn check_field<T: ValidateConditional>(&mut self, name: &str, value: &T) {
        self.enter(name);
        value.check(self);
        self.exit();
    }

    /// Check an optional child value, if present.
    pub fn check_opt<T: ValidateConditional>(&mut self, name: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.check_field(name, value);
        }
    }

    /// Check every element of a sequence-valued property.
    pub fn check_each<T: ValidateConditional>(&mut self, name: &str, values: &[T]) {
        for (index, value) in values.iter().enumerate() {
            self.enter_indexed(name, index);
            value.check(self);
            self.exit();
        }
    }

    fn finish(self) -> ValidationReport {
        ValidationReport {
            violations: self.violations,
        }
    }
}

/// Entry point for conditional-obligation validation.
#[derive(Debug, Default)]
pub struct MetadataValidator;

impl MetadataValidator {
    pub fn new() -> Self {
        Self
    }

    /// Walk `value` and return every conditional-group violation found.
    pub fn validate<T: ValidateConditional>(&self, value: &T) -> ValidationReport {
        let mut ctx = ValidationContext::new(value.root_name());
        value.check(&mut ctx);
        let report = ctx.finish();
        debug!(
            root = value.root_name(),
            violations = report.violations.len(),
            "conditional validation finished"
        );
        report
    }
}

// Citations and parties.

impl ValidateConditional for Identifier {
    fn root_name(&self) -> &'static str {
        "identifier"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt("authority", self.authority.as_deref());
    }
}

impl ValidateConditional for Citation {
    fn root_name(&self) -> &'static str {
        "citation"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("identifier", &self.identifier);
        ctx.check_each("cited_responsible_party", &self.cited_responsible_party);
        ctx.check_each("graphic", &self.graphic);
    }
}

impl ValidateConditional for Responsibility {
    fn root_name(&self) -> &'static str {
        "responsibility"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("extent", &self.extent);
        ctx.check_each("party", &self.party);
    }
}

impl ValidateConditional for PartyInfo {
    fn root_name(&self) -> &'static str {
        "party"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("party_identifier", &self.party_identifier);
    }
}

impl ValidateConditional for Individual {
    fn root_name(&self) -> &'static str {
        "individual"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.party.check(ctx);
    }
}

impl ValidateConditional for Organisation {
    fn root_name(&self) -> &'static str {
        "organisation"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.party.check(ctx);
        ctx.check_each("logo", &self.logo);
        ctx.check_each("individual", &self.individual);
    }
}

impl ValidateConditional for Party {
    fn root_name(&self) -> &'static str {
        "party"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        match self {
            Party::Individual(individual) => individual.check(ctx),
            Party::Organisation(organisation) => organisation.check(ctx),
        }
    }
}

impl ValidateConditional for BrowseGraphic {
    fn root_name(&self) -> &'static str {
        "browse_graphic"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("image_constraints", &self.image_constraints);
    }
}

// Constraints.

impl ValidateConditional for Releasability {
    fn root_name(&self) -> &'static str {
        "releasability"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.require_any(
            &RELEASABILITY_TARGET,
            &[!self.addressee.is_empty(), self.statement.is_some()],
        );
        ctx.check_each("addressee", &self.addressee);
    }
}

impl ValidateConditional for Constraints {
    fn root_name(&self) -> &'static str {
        "constraints"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt(
            "constraint_application_scope",
            self.constraint_application_scope.as_ref(),
        );
        ctx.check_each("graphic", &self.graphic);
        ctx.check_each("reference", &self.reference);
        ctx.check_opt("releasability", self.releasability.as_ref());
        ctx.check_each("responsible_party", &self.responsible_party);
    }
}

impl ValidateConditional for LegalConstraints {
    fn root_name(&self) -> &'static str {
        "legal_constraints"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        // use_limitation and releasability live on the flattened base but
        // count towards the restriction group.
        ctx.require_any(
            &LEGAL_CONSTRAINTS_RESTRICTION,
            &[
                !self.access_constraints.is_empty(),
                !self.use_constraints.is_empty(),
                !self.other_constraints.is_empty(),
                !self.constraints.use_limitation.is_empty(),
                self.constraints.releasability.is_some(),
            ],
        );
        self.constraints.check(ctx);
    }
}

impl ValidateConditional for SecurityConstraints {
    fn root_name(&self) -> &'static str {
        "security_constraints"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.constraints.check(ctx);
    }
}

impl ValidateConditional for ConstraintItem {
    fn root_name(&self) -> &'static str {
        "constraints"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        match self {
            ConstraintItem::Security(security) => security.check(ctx),
            ConstraintItem::Legal(legal) => legal.check(ctx),
            ConstraintItem::General(general) => general.check(ctx),
        }
    }
}

// Scopes and maintenance.

impl ValidateConditional for Scope {
    fn root_name(&self) -> &'static str {
        "scope"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("extent", &self.extent);
    }
}

impl ValidateConditional for MaintenanceInformation {
    fn root_name(&self) -> &'static str {
        "maintenance_information"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("maintenance_scope", &self.maintenance_scope);
        ctx.check_each("contact", &self.contact);
    }
}

// Extents.

impl ValidateConditional for Extent {
    fn root_name(&self) -> &'static str {
        "extent"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.require_any(
            &EXTENT_ELEMENT,
            &[
                self.description.is_some(),
                !self.geographic_element.is_empty(),
                !self.temporal_element.is_empty(),
                !self.vertical_element.is_empty(),
            ],
        );
        ctx.check_each("geographic_element", &self.geographic_element);
        ctx.check_each("temporal_element", &self.temporal_element);
        ctx.check_each("vertical_element", &self.vertical_element);
    }
}

impl ValidateConditional for GeographicExtent {
    fn root_name(&self) -> &'static str {
        "geographic_extent"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        if let GeographicExtent::Description(description) = self {
            ctx.check_field("geographic_identifier", &description.geographic_identifier);
        }
    }
}

impl ValidateConditional for TemporalElement {
    fn root_name(&self) -> &'static str {
        "temporal_element"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        if let TemporalElement::SpatioTemporal(extent) = self {
            ctx.check_opt("vertical_extent", extent.vertical_extent.as_ref());
            ctx.check_each("spatial_extent", &extent.spatial_extent);
        }
    }
}

impl ValidateConditional for VerticalExtent {
    fn root_name(&self) -> &'static str {
        "vertical_extent"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        if let Some(crs) = &self.vertical_crs {
            ctx.enter("vertical_crs");
            ctx.check_opt(
                "domain_of_validity",
                crs.reference_system.domain_of_validity.as_deref(),
            );
            ctx.exit();
        }
    }
}

// Reference systems.

impl ValidateConditional for ReferenceSystemItem {
    fn root_name(&self) -> &'static str {
        "reference_system"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        match self {
            ReferenceSystemItem::Coordinate(crs) => {
                ctx.check_opt(
                    "domain_of_validity",
                    crs.reference_system().domain_of_validity.as_deref(),
                );
            }
            ReferenceSystemItem::Metadata(metadata) => {
                ctx.check_opt(
                    "reference_system_identifier",
                    metadata.reference_system_identifier.as_ref(),
                );
            }
        }
    }
}

// Lineage.

impl ValidateConditional for Source {
    fn root_name(&self) -> &'static str {
        "source"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.require_any(
            &SOURCE_DESCRIPTION_OR_SCOPE,
            &[self.description.is_some(), self.scope.is_some()],
        );
        ctx.check_opt(
            "source_reference_system",
            self.source_reference_system.as_deref(),
        );
        ctx.check_opt("source_citation", self.source_citation.as_ref());
        ctx.check_each("source_metadata", &self.source_metadata);
        ctx.check_opt("scope", self.scope.as_ref());
        ctx.check_each("source_step", &self.source_step);
        ctx.check_opt("processed_level", self.processed_level.as_ref());
    }
}

impl ValidateConditional for ProcessStep {
    fn root_name(&self) -> &'static str {
        "process_step"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("processor", &self.processor);
        ctx.check_each("reference", &self.reference);
        ctx.check_opt("scope", self.scope.as_ref());
        ctx.check_each("source", &self.source);
        ctx.check_each("output", &self.output);
        ctx.check_opt(
            "processing_information",
            self.processing_information.as_ref(),
        );
    }
}

impl ValidateConditional for Algorithm {
    fn root_name(&self) -> &'static str {
        "algorithm"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_field("citation", &self.citation);
    }
}

impl ValidateConditional for Processing {
    fn root_name(&self) -> &'static str {
        "processing"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_field("identifier", &self.identifier);
        ctx.check_each("software_reference", &self.software_reference);
        ctx.check_each("documentation", &self.documentation);
        ctx.check_each("algorithm", &self.algorithm);
        ctx.check_opt("parameter", self.parameter.as_ref());
    }
}

impl ValidateConditional for ProcessParameter {
    fn root_name(&self) -> &'static str {
        "parameter"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt("resource", self.resource.as_deref());
    }
}

impl ValidateConditional for Lineage {
    fn root_name(&self) -> &'static str {
        "lineage"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.require_any(
            &LINEAGE_CONTENT,
            &[
                self.statement.is_some(),
                !self.process_step.is_empty(),
                !self.source.is_empty(),
            ],
        );
        ctx.check_opt("scope", self.scope.as_ref());
        ctx.check_each("additional_documentation", &self.additional_documentation);
        ctx.check_each("process_step", &self.process_step);
        ctx.check_each("source", &self.source);
    }
}

// Identification.

impl ValidateConditional for KeywordClass {
    fn root_name(&self) -> &'static str {
        "keyword_class"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_field("ontology", &self.ontology);
    }
}

impl ValidateConditional for Keywords {
    fn root_name(&self) -> &'static str {
        "keywords"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt("thesaurus_name", self.thesaurus_name.as_ref());
        ctx.check_opt("keyword_class", self.keyword_class.as_ref());
    }
}

impl ValidateConditional for Usage {
    fn root_name(&self) -> &'static str {
        "usage"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("user_contact_info", &self.user_contact_info);
        ctx.check_each("additional_documentation", &self.additional_documentation);
        ctx.check_each("identified_issues", &self.identified_issues);
    }
}

impl ValidateConditional for AssociatedResource {
    fn root_name(&self) -> &'static str {
        "associated_resource"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt("name", self.name.as_ref());
        ctx.check_opt("metadata_reference", self.metadata_reference.as_ref());
    }
}

impl ValidateConditional for Identification {
    fn root_name(&self) -> &'static str {
        "identification"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_field("citation", &self.citation);
        ctx.check_each("point_of_contact", &self.point_of_contact);
        ctx.check_each("extent", &self.extent);
        ctx.check_each("additional_documentation", &self.additional_documentation);
        ctx.check_opt("processing_level", self.processing_level.as_ref());
        ctx.check_each("resource_maintenance", &self.resource_maintenance);
        ctx.check_each("graphic_overview", &self.graphic_overview);
        ctx.check_each("resource_format", &self.resource_format);
        ctx.check_each("descriptive_keywords", &self.descriptive_keywords);
        ctx.check_each("resource_specific_usage", &self.resource_specific_usage);
        ctx.check_each("resource_constraints", &self.resource_constraints);
        ctx.check_each("associated_resource", &self.associated_resource);
    }
}

impl ValidateConditional for DataIdentification {
    fn root_name(&self) -> &'static str {
        "data_identification"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.identification.check(ctx);
    }
}

// Services.

impl ValidateConditional for CoupledResource {
    fn root_name(&self) -> &'static str {
        "coupled_resource"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("resource_reference", &self.resource_reference);
        ctx.check_each("resource", &self.resource);
    }
}

impl ValidateConditional for ServiceIdentification {
    fn root_name(&self) -> &'static str {
        "service_identification"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.identification.check(ctx);
        ctx.check_each("coupled_resource", &self.coupled_resource);
        ctx.check_each("operated_dataset", &self.operated_dataset);
        ctx.check_each("profile", &self.profile);
        ctx.check_each("service_standard", &self.service_standard);
        ctx.check_each("operates_on", &self.operates_on);
    }
}

// Data quality.

impl ValidateConditional for DataQuality {
    fn root_name(&self) -> &'static str {
        "data_quality"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_field("scope", &self.scope);
        ctx.check_each("report", &self.report);
    }
}

impl ValidateConditional for QualityElement {
    fn root_name(&self) -> &'static str {
        "quality_element"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt(
            "measure_identification",
            self.measure_identification.as_ref(),
        );
        ctx.check_opt("evaluation_procedure", self.evaluation_procedure.as_ref());
        ctx.check_each("result", &self.result);
    }
}

impl ValidateConditional for QualityResult {
    fn root_name(&self) -> &'static str {
        "result"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        if let QualityResult::Conformance(conformance) = self {
            ctx.check_field("specification", &conformance.specification);
        }
    }
}

// Distribution.

impl ValidateConditional for Medium {
    fn root_name(&self) -> &'static str {
        "medium"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt("name", self.name.as_ref());
        ctx.check_opt("identifier", self.identifier.as_ref());
    }
}

impl ValidateConditional for Format {
    fn root_name(&self) -> &'static str {
        "format"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_field(
            "format_specification_citation",
            &self.format_specification_citation,
        );
        ctx.check_each("medium", &self.medium);
        ctx.check_each("format_distributor", &self.format_distributor);
    }
}

impl ValidateConditional for Distributor {
    fn root_name(&self) -> &'static str {
        "distributor"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_field("distributor_contact", &self.distributor_contact);
        ctx.check_each("distributor_format", &self.distributor_format);
        ctx.check_each(
            "distributor_transfer_options",
            &self.distributor_transfer_options,
        );
    }
}

impl ValidateConditional for DigitalTransferOptions {
    fn root_name(&self) -> &'static str {
        "transfer_options"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("off_line", &self.off_line);
        ctx.check_each("distribution_format", &self.distribution_format);
    }
}

impl ValidateConditional for Distribution {
    fn root_name(&self) -> &'static str {
        "distribution"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("distribution_format", &self.distribution_format);
        ctx.check_each("distributor", &self.distributor);
        ctx.check_each("transfer_options", &self.transfer_options);
    }
}

// Spatial representation.

impl ValidateConditional for SpatialRepresentation {
    fn root_name(&self) -> &'static str {
        "spatial_representation"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt("scope", self.scope.as_ref());
    }
}

impl ValidateConditional for GridSpatialRepresentation {
    fn root_name(&self) -> &'static str {
        "grid_spatial_representation"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.representation.check(ctx);
    }
}

impl ValidateConditional for VectorSpatialRepresentation {
    fn root_name(&self) -> &'static str {
        "vector_spatial_representation"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.representation.check(ctx);
    }
}

impl ValidateConditional for Gcp {
    fn root_name(&self) -> &'static str {
        "gcp"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("accuracy_report", &self.accuracy_report);
    }
}

impl ValidateConditional for Georectified {
    fn root_name(&self) -> &'static str {
        "georectified"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.grid.check(ctx);
        ctx.check_each("check_point", &self.check_point);
    }
}

impl ValidateConditional for GeolocationInformation {
    fn root_name(&self) -> &'static str {
        "geolocation_information"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("quality_info", &self.quality_info);
    }
}

impl ValidateConditional for GcpCollection {
    fn root_name(&self) -> &'static str {
        "gcp_collection"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.geolocation.check(ctx);
        ctx.check_field(
            "coordinate_reference_system",
            self.coordinate_reference_system.as_ref(),
        );
        ctx.check_each("gcp", &self.gcp);
    }
}

impl ValidateConditional for GeolocationItem {
    fn root_name(&self) -> &'static str {
        "geolocation_information"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        match self {
            GeolocationItem::GcpCollection(collection) => collection.check(ctx),
            GeolocationItem::General(general) => general.check(ctx),
        }
    }
}

impl ValidateConditional for Georeferenceable {
    fn root_name(&self) -> &'static str {
        "georeferenceable"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.grid.check(ctx);
        ctx.check_each("parameter_citation", &self.parameter_citation);
        ctx.check_each("geolocation_information", &self.geolocation_information);
    }
}

impl ValidateConditional for SpatialRepresentationItem {
    fn root_name(&self) -> &'static str {
        "spatial_representation"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        match self {
            SpatialRepresentationItem::Grid(grid) => grid.check(ctx),
            SpatialRepresentationItem::Vector(vector) => vector.check(ctx),
            SpatialRepresentationItem::Georectified(rectified) => rectified.check(ctx),
            SpatialRepresentationItem::Georeferenceable(referenceable) => referenceable.check(ctx),
        }
    }
}

// Content.

impl ValidateConditional for RangeDimension {
    fn root_name(&self) -> &'static str {
        "range_dimension"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("name", &self.name);
    }
}

impl ValidateConditional for SampleDimension {
    fn root_name(&self) -> &'static str {
        "sample_dimension"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.range.check(ctx);
    }
}

impl ValidateConditional for Band {
    fn root_name(&self) -> &'static str {
        "band"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.sample.check(ctx);
    }
}

impl ValidateConditional for RangeDimensionItem {
    fn root_name(&self) -> &'static str {
        "range_dimension"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        match self {
            RangeDimensionItem::Band(band) => band.check(ctx),
            RangeDimensionItem::Sample(sample) => sample.check(ctx),
            RangeDimensionItem::Range(range) => range.check(ctx),
        }
    }
}

impl ValidateConditional for AttributeGroup {
    fn root_name(&self) -> &'static str {
        "attribute_group"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each("attribute", &self.attribute);
    }
}

impl ValidateConditional for CoverageDescription {
    fn root_name(&self) -> &'static str {
        "coverage_description"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_opt("processing_level_code", self.processing_level_code.as_ref());
        ctx.check_each("attribute_group", &self.attribute_group);
    }
}

impl ValidateConditional for ImageDescription {
    fn root_name(&self) -> &'static str {
        "image_description"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        self.coverage.check(ctx);
        ctx.check_opt("image_quality_code", self.image_quality_code.as_ref());
    }
}

impl ValidateConditional for FeatureCatalogueDescription {
    fn root_name(&self) -> &'static str {
        "feature_catalogue_description"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        ctx.check_each(
            "feature_catalogue_citation",
            &self.feature_catalogue_citation,
        );
    }
}

impl ValidateConditional for ContentInformationItem {
    fn root_name(&self) -> &'static str {
        "content_information"
    }

    fn check(&self, ctx: &mut ValidationContext) {
        match self {
            ContentInformationItem::Coverage(coverage) => coverage.check(ctx),
            ContentInformationItem::Image(image) => image.check(ctx),
            ContentInformationItem::FeatureCatalogue(catalogue) => catalogue.check(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::citation::RoleCode;
    use crate::models::extent::GeographicBoundingBox;

    #[test]
    fn test_empty_lineage_violates_content_group() {
        let report = MetadataValidator::new().validate(&Lineage::default());
        assert_eq!(report.violations.len(), 1);
        let violation = &report.violations[0];
        assert_eq!(violation.path, "lineage");
        assert_eq!(violation.group.label(), "Lineage.content");
        assert!(report.clone().into_result().is_err());
    }

    #[test]
    fn test_stated_lineage_is_valid() {
        let lineage = Lineage::stated("Digitised from 1:25000 survey sheets".to_string());
        let report = MetadataValidator::new().validate(&lineage);
        assert!(report.is_valid());
    }

    #[test]
    fn test_single_member_satisfies_source_group() {
        let described = Source::described("Aerial photographs, 2019 campaign".to_string());
        assert!(MetadataValidator::new().validate(&described).is_valid());

        let bare = Source::default();
        let report = MetadataValidator::new().validate(&bare);
        assert_eq!(
            report.violations[0].group.label(),
            "Source.description_or_scope"
        );
    }

    #[test]
    fn test_nested_violations_carry_indexed_paths() {
        let mut lineage = Lineage::stated("Compiled from field surveys".to_string());
        lineage.source.push(Source::described("GPS tracks".to_string()));
        lineage.source.push(Source::default());

        let report = MetadataValidator::new().validate(&lineage);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "lineage.source[1]");
    }

    #[test]
    fn test_extent_with_bounding_box_is_valid() {
        let extent = Extent::geographic(GeographicBoundingBox::new(5.87, 15.04, 47.27, 55.06));
        assert!(MetadataValidator::new().validate(&extent).is_valid());

        let empty = Extent::default();
        let report = MetadataValidator::new().validate(&empty);
        assert_eq!(report.violations[0].group.label(), "Extent.element");
    }

    #[test]
    fn test_walk_reaches_extents_through_responsibilities() {
        let mut responsibility = Responsibility::new(RoleCode::Custodian, Vec::new());
        responsibility = responsibility.with_extent(Extent::default());

        let report = MetadataValidator::new().validate(&responsibility);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "responsibility.extent[0]");
    }

    #[test]
    fn test_legal_constraints_count_flattened_members() {
        let mut legal = LegalConstraints::default();
        let report = MetadataValidator::new().validate(&legal);
        assert_eq!(
            report.violations[0].group.label(),
            "LegalConstraints.restriction"
        );

        legal.constraints.use_limitation.push("No derivatives".to_string());
        assert!(MetadataValidator::new().validate(&legal).is_valid());
    }
}
