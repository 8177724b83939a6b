//! Data quality records
//!
//! The quality excerpt carried here is the part other entities point at:
//! a quality statement scoped to some part of a resource, made of elements
//! whose results are either measured values or a verdict against a cited
//! specification (ISO 19157).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::citation::{Citation, Identifier};
use super::maintenance::Scope;
use super::measure::UnitOfMeasure;
use super::naming::{Record, RecordType};
use crate::vocabulary::code_list;

code_list! {
    /// How a quality measure was evaluated (ISO 19157)
    pub enum EvaluationMethodTypeCode {
        DirectInternal => "directInternal",
        DirectExternal => "directExternal",
        Indirect => "indirect",
    }
}

/// Quality information for the data specified by a scope (ISO 19157)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataQuality {
    /// Part of the resource the quality statement applies to
    pub scope: Scope,
    /// Quality elements reported for that scope
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub report: Vec<QualityElement>,
}

impl DataQuality {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            report: Vec::new(),
        }
    }

    pub fn with_report(mut self, element: QualityElement) -> Self {
        self.report.push(element);
        self
    }
}

/// One aspect of quality together with its evaluation outcome (ISO 19157)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityElement {
    /// Names of the measures applied, e.g. `"mean value of positional
    /// uncertainties"`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name_of_measure: Vec<String>,
    /// Identifier of a registered measure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_identification: Option<Identifier>,
    /// Description of the measure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_description: Option<String>,
    /// Kind of method used for the evaluation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_method_type: Option<EvaluationMethodTypeCode>,
    /// Description of the evaluation method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_method_description: Option<String>,
    /// Reference to the procedure information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_procedure: Option<Citation>,
    /// When the evaluation was carried out
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_time: Vec<DateTime<Utc>>,
    /// Values or verdicts obtained from applying the measure
    pub result: Vec<QualityResult>,
}

impl QualityElement {
    pub fn new(result: Vec<QualityResult>) -> Self {
        Self {
            name_of_measure: Vec::new(),
            measure_identification: None,
            measure_description: None,
            evaluation_method_type: None,
            evaluation_method_description: None,
            evaluation_procedure: None,
            date_time: Vec::new(),
            result,
        }
    }

    pub fn with_name_of_measure(mut self, name: String) -> Self {
        self.name_of_measure.push(name);
        self
    }
}

/// Outcome of applying a quality measure (ISO 19157)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "resultType", rename_all = "camelCase")]
pub enum QualityResult {
    /// Verdict against a cited specification
    Conformance(ConformanceResult),
    /// Measured value or values
    Quantitative(QuantitativeResult),
}

/// Pass/fail verdict of comparing the data against a specification
/// (ISO 19157)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConformanceResult {
    /// Specification or user requirement the data was evaluated against
    pub specification: Citation,
    /// Explanation of the meaning of the conformance result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Whether the data conforms to the specification
    #[serde(rename = "pass")]
    pub passes: bool,
}

impl ConformanceResult {
    pub fn new(specification: Citation, passes: bool) -> Self {
        Self {
            specification,
            explanation: None,
            passes,
        }
    }
}

/// Measured values obtained from applying a quality measure (ISO 19157)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeResult {
    /// Measured values, one record per measured unit of data
    pub value: Vec<Record>,
    /// Value type of the measured values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<RecordType>,
    /// Unit the measured values are expressed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_unit: Option<UnitOfMeasure>,
}

impl QuantitativeResult {
    pub fn new(value: Vec<Record>) -> Self {
        Self {
            value,
            value_type: None,
            value_unit: None,
        }
    }

    pub fn with_value_unit(mut self, unit: UnitOfMeasure) -> Self {
        self.value_unit = Some(unit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::maintenance::ScopeCode;

    #[test]
    fn test_conformance_result_wire_shape() {
        let result = QualityResult::Conformance(ConformanceResult::new(
            Citation::new("INSPIRE Data Specification on Orthoimagery".to_string()),
            true,
        ));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["resultType"], "conformance");
        assert_eq!(json["pass"], true);
        assert!(json.get("passes").is_none());
    }

    #[test]
    fn test_quantitative_result_roundtrip() {
        let result = QualityResult::Quantitative(
            QuantitativeResult::new(vec![
                Record::new().with_field("rmse".to_string(), serde_json::json!(0.42)),
            ])
            .with_value_unit(UnitOfMeasure::new("m".to_string())),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["resultType"], "quantitative");
        let back: QualityResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_element_scoped_to_dataset() {
        let quality = DataQuality::new(Scope::new(ScopeCode::Dataset)).with_report(
            QualityElement::new(vec![QualityResult::Conformance(ConformanceResult::new(
                Citation::new("ISO 19157 conformance class".to_string()),
                false,
            ))])
            .with_name_of_measure("completeness commission".to_string()),
        );
        assert_eq!(quality.report.len(), 1);
        assert_eq!(quality.report[0].name_of_measure[0], "completeness commission");
    }
}
