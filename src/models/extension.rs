//! Metadata extension information
//!
//! Community profiles add metadata elements beyond the standard set. These
//! types describe such extensions: the new elements, their obligations and
//! datatypes, and the application schema the dataset was built against
//! (ISO 19115-1).

use serde::{Deserialize, Serialize};

use super::citation::{Citation, OnlineResource, Responsibility};
use crate::vocabulary::code_list;

code_list! {
    /// Datatype of an extended metadata element or entity (ISO 19115-1)
    pub enum DatatypeCode {
        Class => "class",
        CodeList => "codelist",
        Enumeration => "enumeration",
        CodeListElement => "codelistElement",
        AbstractClass => "abstractClass",
        AggregateClass => "aggregateClass",
        SpecifiedClass => "specifiedClass",
        DatatypeClass => "datatypeClass",
        InterfaceClass => "interfaceClass",
        UnionClass => "unionClass",
        MetaClass => "metaClass",
        TypeClass => "typeClass",
        CharacterString => "characterString",
        Integer => "integer",
        Association => "association",
    }
}

code_list! {
    /// Obligation of an extended metadata element (ISO 19115-1)
    ///
    /// The forbidden member carries the literal token `"null"` on the wire.
    pub enum ObligationCode {
        Mandatory => "mandatory",
        Optional => "optional",
        Conditional => "conditional",
        Forbidden => "null",
    }
}

/// Information about the application schema used to build a dataset
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSchemaInformation {
    /// Name of the application schema
    pub name: Citation,
    /// Identification of the schema language used
    pub schema_language: String,
    /// Formal language used in the application schema
    pub constraint_language: String,
    /// Full application schema given as an ASCII file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_ascii: Option<String>,
    /// Full application schema given as a graphics file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphics_file: Option<OnlineResource>,
    /// Full application schema given as a software development file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_development_file: Option<OnlineResource>,
    /// Format of the software development file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_development_file_format: Option<String>,
}

impl ApplicationSchemaInformation {
    pub fn new(name: Citation, schema_language: String, constraint_language: String) -> Self {
        Self {
            name,
            schema_language,
            constraint_language,
            schema_ascii: None,
            graphics_file: None,
            software_development_file: None,
            software_development_file_format: None,
        }
    }
}

/// A metadata element added by a community profile (ISO 19115-1)
///
/// At least one parent entity and one source are expected; the obligation,
/// condition, maximum occurrence and domain value are expected whenever the
/// datatype is not a code list, enumeration or code-list element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedElementInformation {
    /// Name of the extended metadata element
    pub name: String,
    /// Definition of the extended element
    pub definition: String,
    /// Obligation of the extended element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obligation: Option<ObligationCode>,
    /// Condition under which the extended element is mandatory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Kind of value provided in the extended element
    pub data_type: DatatypeCode,
    /// Maximum occurrence of the extended element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_occurrence: Option<u32>,
    /// Valid values that can be assigned to the extended element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_value: Option<String>,
    /// Metadata entities under which the extended element may appear
    pub parent_entity: Vec<String>,
    /// How the extended element relates to existing elements and entities
    pub rule: String,
    /// Reason for creating the extended element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Who created the extended element
    pub source: Vec<Responsibility>,
}

impl ExtendedElementInformation {
    pub fn new(name: String, definition: String, data_type: DatatypeCode, rule: String) -> Self {
        Self {
            name,
            definition,
            obligation: None,
            condition: None,
            data_type,
            maximum_occurrence: None,
            domain_value: None,
            parent_entity: Vec::new(),
            rule,
            rationale: None,
            source: Vec::new(),
        }
    }

    pub fn with_obligation(mut self, obligation: ObligationCode) -> Self {
        self.obligation = Some(obligation);
        self
    }

    pub fn with_parent_entity(mut self, parent_entity: String) -> Self {
        self.parent_entity.push(parent_entity);
        self
    }

    pub fn with_source(mut self, source: Responsibility) -> Self {
        self.source.push(source);
        self
    }
}

/// Description of the metadata extensions applied by a community profile
/// (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataExtensionInformation {
    /// On-line source holding the community profile name and the extended
    /// elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_on_line_resource: Option<OnlineResource>,
    /// The extended elements themselves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_element_information: Vec<ExtendedElementInformation>,
}

impl MetadataExtensionInformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extended_element(mut self, element: ExtendedElementInformation) -> Self {
        self.extended_element_information.push(element);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::CodeList;

    #[test]
    fn test_forbidden_obligation_uses_null_token() {
        assert_eq!(ObligationCode::Forbidden.token(), "null");
        assert_eq!(
            ObligationCode::from_token("null"),
            Some(ObligationCode::Forbidden)
        );
        let json = serde_json::to_value(ObligationCode::Forbidden).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_datatype_tokens() {
        assert_eq!(DatatypeCode::all().len(), 15);
        assert_eq!(DatatypeCode::CodeList.token(), "codelist");
        assert_eq!(DatatypeCode::CodeListElement.token(), "codelistElement");
        assert_eq!(
            DatatypeCode::from_token("characterString"),
            Some(DatatypeCode::CharacterString)
        );
    }

    #[test]
    fn test_extended_element_shape() {
        let element = ExtendedElementInformation::new(
            "sensorCalibrationDate".to_string(),
            "Date the capturing sensor was last calibrated".to_string(),
            DatatypeCode::CharacterString,
            "Appears once per acquisition block".to_string(),
        )
        .with_obligation(ObligationCode::Conditional)
        .with_parent_entity("MD_DataIdentification".to_string());

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["dataType"], "characterString");
        assert_eq!(json["obligation"], "conditional");
        assert_eq!(json["parentEntity"][0], "MD_DataIdentification");
        // Mandatory sequences are serialized even while empty.
        assert_eq!(json["source"], serde_json::json!([]));
    }

    #[test]
    fn test_schema_information_shape() {
        let schema = ApplicationSchemaInformation::new(
            Citation::new("INSPIRE application schema".to_string()),
            "UML".to_string(),
            "OCL".to_string(),
        );
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["name"]["title"], "INSPIRE application schema");
        assert_eq!(json["schemaLanguage"], "UML");
        assert!(json.get("schemaAscii").is_none());
    }
}
