//! Maintenance and scope models
//!
//! How often and over what scope a resource is updated, derived from the
//! ISO 19115-1:2014 maintenance package. `Scope` is also the unit other
//! topics use to say what part of a resource a statement applies to.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::vocabulary::code_list;

use super::citation::{CitationDate, Responsibility};
use super::extent::Extent;
use super::measure::duration_option_seconds;

code_list! {
    /// Frequency with which modifications are made to a resource
    /// (ISO 19115-1)
    pub enum MaintenanceFrequencyCode {
        Continual => "continual",
        Daily => "daily",
        Weekly => "weekly",
        Fortnightly => "fortnightly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        Biannually => "biannually",
        Annually => "annually",
        AsNeeded => "asNeeded",
        Irregular => "irregular",
        NotPlanned => "notPlanned",
        Unknown => "unknown",
        Periodic => "periodic",
        Semimonthly => "semimonthly",
        Biennially => "biennially",
    }
}

code_list! {
    /// Class of information the referencing entity applies to (ISO 19115-1)
    pub enum ScopeCode {
        CollectionHardware => "collectionHardware",
        CollectionSession => "collectionSession",
        Series => "series",
        Dataset => "dataset",
        NonGeographicDataset => "nonGeographicDataset",
        DimensionGroup => "dimensionGroup",
        FeatureType => "featureType",
        Feature => "feature",
        AttributeType => "attributeType",
        Attribute => "attribute",
        PropertyType => "propertyType",
        FieldSession => "fieldSession",
        Software => "software",
        Service => "service",
        Model => "model",
        Tile => "tile",
        Metadata => "metadata",
        Initiative => "initiative",
        Sample => "sample",
        Document => "document",
        Repository => "repository",
        Aggregate => "aggregate",
        Product => "product",
        Collection => "collection",
        Coverage => "coverage",
        Application => "application",
    }
}

/// Enumeration of the feature types, attributes or instances a scope level
/// covers (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScopeDescription {
    /// Attribute types to which the information applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Feature types to which the information applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Feature instances to which the information applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_instances: Vec<String>,
    /// Attribute instances to which the information applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_instances: Vec<String>,
    /// Dataset to which the information applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    /// Class of information that does not fall into the other categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

/// The target of a statement about a resource: a level, optionally narrowed
/// by extent and description (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    /// Hierarchical level the statement applies to
    pub level: ScopeCode,
    /// Spatial and temporal limits of the statement
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extent: Vec<Extent>,
    /// Detailed enumeration of the covered types and instances
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub level_description: Vec<ScopeDescription>,
}

impl Scope {
    pub fn new(level: ScopeCode) -> Self {
        Self {
            level,
            extent: Vec::new(),
            level_description: Vec::new(),
        }
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent.push(extent);
        self
    }
}

/// Information about the scope and frequency of updating a resource
/// (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceInformation {
    /// Frequency with which changes and additions are made after completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_and_update_frequency: Option<MaintenanceFrequencyCode>,
    /// Dates of past or scheduled maintenance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintenance_date: Vec<CitationDate>,
    /// Maintenance period when the frequency code is not expressive enough
    #[serde(
        default,
        with = "duration_option_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_defined_maintenance_frequency: Option<Duration>,
    /// Scopes of the resource covered by this maintenance regime
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintenance_scope: Vec<Scope>,
    /// Other requirements specific to maintaining the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintenance_note: Vec<String>,
    /// Parties with responsibility for maintaining the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<Responsibility>,
}

impl MaintenanceInformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frequency(mut self, frequency: MaintenanceFrequencyCode) -> Self {
        self.maintenance_and_update_frequency = Some(frequency);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.maintenance_scope.push(scope);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::CodeList;

    #[test]
    fn test_frequency_tokens() {
        assert_eq!(MaintenanceFrequencyCode::Biannually.token(), "biannually");
        assert_eq!(MaintenanceFrequencyCode::AsNeeded.token(), "asNeeded");
        assert_eq!(
            MaintenanceFrequencyCode::from_token("notPlanned"),
            Some(MaintenanceFrequencyCode::NotPlanned)
        );
    }

    #[test]
    fn test_user_defined_frequency_serde() {
        let info = MaintenanceInformation::new().with_frequency(MaintenanceFrequencyCode::Periodic);
        let info = MaintenanceInformation {
            user_defined_maintenance_frequency: Some(Duration::days(10)),
            ..info
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["userDefinedMaintenanceFrequency"], 864_000);

        let back: MaintenanceInformation = serde_json::from_value(json).unwrap();
        assert_eq!(
            back.user_defined_maintenance_frequency,
            Some(Duration::days(10))
        );
    }

    #[test]
    fn test_scope_level() {
        let scope = Scope::new(ScopeCode::Dataset);
        assert_eq!(scope.level.token(), "dataset");
        assert!(scope.extent.is_empty());
    }
}
