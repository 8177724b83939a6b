//! Lineage models
//!
//! Sources and production processes used in producing a resource, derived
//! from the ISO 19115-1:2014 lineage package with the ISO 19115-2 processing
//! extensions. Two records carry conditional obligations: a `Source` needs a
//! description or a scope, and a `Lineage` needs a statement, a process step
//! or a source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::citation::{Citation, Identifier, Responsibility};
use super::identification::Resolution;
use super::maintenance::Scope;
use super::measure::Distance;
use super::naming::{MemberName, Record, RecordType};
use super::service::ParameterDirection;
use crate::referencing::crs::ReferenceSystemItem;

/// Distance between consistent parts of adjacent pixels (ISO 19115-2)
///
/// A union in the standard: the resolution is given either in the scan plane
/// or in the object space, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum NominalResolution {
    /// Distance between adjacent pixels in the scan plane
    ScanningResolution(Distance),
    /// Distance between adjacent pixels in the object space
    GroundResolution(Distance),
}

/// Information about the resource used in creating the described resource
/// (ISO 19115-1)
///
/// Either the description or the scope must be provided; the validator
/// reports the `Source.description_or_scope` group when both are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Detailed description of the level of the source resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Level of detail of the source expressed as scale, distance or angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_spatial_resolution: Option<Resolution>,
    /// Spatial reference system used by the source resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reference_system: Option<Box<ReferenceSystemItem>>,
    /// Recommended reference to be used for the source resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_citation: Option<Citation>,
    /// References to metadata about the source resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_metadata: Vec<Citation>,
    /// Type of resource and/or extent of the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// Process steps by which the source contributed to the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_step: Vec<ProcessStep>,
    /// Processing level of the source data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_level: Option<Identifier>,
    /// Distance between consistent parts of adjacent pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<NominalResolution>,
}

impl Source {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source identified by a description of its level.
    pub fn described(description: String) -> Self {
        Self {
            description: Some(description),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.source_citation = Some(citation);
        self
    }
}

/// Details of the methodology by which geographic information was derived
/// (ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Algorithm {
    /// Information identifying the algorithm and its version or date
    pub citation: Citation,
    /// Information describing the algorithm used to generate the data
    pub description: String,
}

impl Algorithm {
    pub fn new(citation: Citation, description: String) -> Self {
        Self {
            citation,
            description,
        }
    }
}

/// Description of a parameter consumed or produced by a process
/// (ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessParameter {
    /// Name of the parameter
    pub name: MemberName,
    /// Whether the parameter is an input, an output, or both
    pub direction: ParameterDirection,
    /// Narrative description of the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter is required
    pub optionality: bool,
    /// Whether more than one value may be provided
    pub repeatability: bool,
    /// Data type of the parameter value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<RecordType>,
    /// Constant value for the parameter, when fixed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Record>,
    /// Resource to be processed or generated by the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Box<Source>>,
}

impl ProcessParameter {
    pub fn new(name: MemberName, direction: ParameterDirection) -> Self {
        Self {
            name,
            direction,
            description: None,
            optionality: false,
            repeatability: false,
            value_type: None,
            value: None,
            resource: None,
        }
    }
}

/// Comprehensive information about the procedure by which the algorithm was
/// applied to derive geographic data (ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Processing {
    /// Information identifying the processing package
    pub identifier: Identifier,
    /// References to documents describing the processing software
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub software_reference: Vec<Citation>,
    /// Additional details about the processing procedures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_description: Option<String>,
    /// References to documentation describing the processing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documentation: Vec<Citation>,
    /// Parameters to control the processing operations, entered at run time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_time_parameters: Option<String>,
    /// Instance of another property type not included in the standard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_property: Option<Record>,
    /// Type of the other property description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_property_type: Option<RecordType>,
    /// Details of the methodology applied to derive the data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub algorithm: Vec<Algorithm>,
    /// Description of the parameter the process consumes or produces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<ProcessParameter>,
}

impl Processing {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            software_reference: Vec::new(),
            procedure_description: None,
            documentation: Vec::new(),
            run_time_parameters: None,
            other_property: None,
            other_property_type: None,
            algorithm: Vec::new(),
            parameter: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm.push(algorithm);
        self
    }
}

/// Report of what occurred during a process step (ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStepReport {
    /// Name of the processing report
    pub name: String,
    /// Textual description of what occurred during the process step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type of file that contains the processing report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl ProcessStepReport {
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: None,
            file_type: None,
        }
    }
}

/// Information about an event or transformation in the life of a resource
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    /// Description of the event, including related parameters or tolerances
    pub description: String,
    /// Requirement or purpose for the process step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Date and time when the process step occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_date_time: Option<DateTime<Utc>>,
    /// Parties associated with the process step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub processor: Vec<Responsibility>,
    /// Process step documentation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<Citation>,
    /// Type of resource and/or extent the step applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// Information about the source data used in the step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source: Vec<Source>,
    /// Description of the intermediate or final products of the step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<Source>,
    /// Comprehensive information about the procedure performed in the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_information: Option<Processing>,
    /// Reports generated by the process step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub report: Vec<ProcessStepReport>,
}

impl ProcessStep {
    pub fn new(description: String) -> Self {
        Self {
            description,
            rationale: None,
            step_date_time: None,
            processor: Vec::new(),
            reference: Vec::new(),
            scope: None,
            source: Vec::new(),
            output: Vec::new(),
            processing_information: None,
            report: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source.push(source);
        self
    }

    pub fn with_processing_information(mut self, processing: Processing) -> Self {
        self.processing_information = Some(processing);
        self
    }
}

/// Information about the events and sources used in constructing a resource
/// (ISO 19115-1)
///
/// At least one of statement, process step or source must be provided; the
/// validator reports the `Lineage.content` group when all three are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lineage {
    /// General explanation of the producer's knowledge about the lineage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    /// Type of resource and/or extent the lineage applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// Other documentation of the lineage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_documentation: Vec<Citation>,
    /// Information about events in the life of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub process_step: Vec<ProcessStep>,
    /// Information about the source data used to create the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source: Vec<Source>,
}

impl Lineage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lineage summarized by a single statement.
    pub fn stated(statement: String) -> Self {
        Self {
            statement: Some(statement),
            ..Self::default()
        }
    }

    pub fn with_process_step(mut self, step: ProcessStep) -> Self {
        self.process_step.push(step);
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source.push(source);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_resolution_union_serde() {
        let ground = NominalResolution::GroundResolution(Distance::metres(0.25));
        let json = serde_json::to_value(&ground).unwrap();
        assert_eq!(json["groundResolution"]["value"], 0.25);
        assert!(json.get("scanningResolution").is_none());

        let back: NominalResolution = serde_json::from_value(json).unwrap();
        assert_eq!(back, ground);
    }

    #[test]
    fn test_lineage_builders() {
        let lineage = Lineage::stated("Digitized from 1:25 000 sheets".to_string())
            .with_process_step(ProcessStep::new("Scanned and georeferenced".to_string()));

        assert_eq!(lineage.statement.as_deref(), Some("Digitized from 1:25 000 sheets"));
        assert_eq!(lineage.process_step.len(), 1);
    }

    #[test]
    fn test_source_recursion_through_steps() {
        let upstream = Source::described("Aerial photography, 1998".to_string());
        let step = ProcessStep::new("Orthorectification".to_string()).with_source(upstream);
        let source = Source {
            source_step: vec![step],
            ..Source::new()
        };

        assert_eq!(
            source.source_step[0].source[0].description.as_deref(),
            Some("Aerial photography, 1998")
        );
    }
}
