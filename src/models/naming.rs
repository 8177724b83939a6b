//! Name and record types from the general feature model
//!
//! These types come from ISO/TS 19103 and are referenced by the metadata
//! topics for feature-type names, parameter names and loosely structured
//! record values whose schema is only known at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A name qualified by the namespace it lives in (ISO/TS 19103)
///
/// Rendered as `scope:name` when a single string is needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScopedName {
    /// Namespace the local part is resolved against
    pub scope: String,
    /// Local part of the name
    pub name: String,
}

impl ScopedName {
    pub fn new(scope: String, name: String) -> Self {
        Self { scope, name }
    }
}

impl std::fmt::Display for ScopedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.scope, self.name)
    }
}

/// A name that is either local or qualified by a namespace (ISO/TS 19103)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum GenericName {
    /// A bare local name
    Local(String),
    /// A namespace-qualified name
    Scoped(ScopedName),
}

impl GenericName {
    /// The local part, without any namespace qualifier.
    pub fn local_part(&self) -> &str {
        match self {
            GenericName::Local(name) => name,
            GenericName::Scoped(scoped) => &scoped.name,
        }
    }
}

impl std::fmt::Display for GenericName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericName::Local(name) => f.write_str(name),
            GenericName::Scoped(scoped) => scoped.fmt(f),
        }
    }
}

impl From<&str> for GenericName {
    fn from(name: &str) -> Self {
        match name.split_once(':') {
            Some((scope, local)) => {
                GenericName::Scoped(ScopedName::new(scope.to_string(), local.to_string()))
            }
            None => GenericName::Local(name.to_string()),
        }
    }
}

/// The name of a record member together with its value type (ISO/TS 19103)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberName {
    /// Member name within the record
    pub name: String,
    /// Name of the member's value type, e.g. `"Real"` or `"CharacterString"`
    pub attribute_type: String,
}

impl MemberName {
    pub fn new(name: String, attribute_type: String) -> Self {
        Self { name, attribute_type }
    }
}

/// The schema of a [`Record`]: an ordered set of typed members (ISO/TS 19103)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordType {
    /// Name of the record type
    pub type_name: String,
    /// Member declarations, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberName>,
}

impl RecordType {
    pub fn new(type_name: String) -> Self {
        Self {
            type_name,
            members: Vec::new(),
        }
    }

    /// Add a member declaration.
    pub fn with_member(mut self, name: String, attribute_type: String) -> Self {
        self.members.push(MemberName::new(name, attribute_type));
        self
    }

    /// Look up a member declaration by name.
    pub fn member(&self, name: &str) -> Option<&MemberName> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// A language and optionally a country and character encoding (ISO/TS 19103)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Language code, e.g. `"en"` or `"de"`
    pub language: String,
    /// Country code, e.g. `"DE"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Character encoding, e.g. `"UTF-8"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_encoding: Option<String>,
}

impl Locale {
    pub fn new(language: String) -> Self {
        Self {
            language,
            country: None,
            character_encoding: None,
        }
    }

    pub fn with_country(mut self, country: String) -> Self {
        self.country = Some(country);
        self
    }
}

/// A record value: named fields with arbitrary values (ISO/TS 19103)
///
/// The standards pair a `Record` value with a sibling `RecordType` property
/// where the schema matters, so the record itself carries only the values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Field values keyed by member name
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn with_field(mut self, name: String, value: serde_json::Value) -> Self {
        self.fields.insert(name, value);
        self
    }

    /// Read a field value by member name.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_name_from_str() {
        let local = GenericName::from("Road");
        assert_eq!(local, GenericName::Local("Road".to_string()));
        assert_eq!(local.local_part(), "Road");

        let scoped = GenericName::from("transport:Road");
        assert_eq!(scoped.local_part(), "Road");
        assert_eq!(scoped.to_string(), "transport:Road");
    }

    #[test]
    fn test_record_round_trip() {
        let record = Record::new()
            .with_field("gain".to_string(), serde_json::json!(1.5))
            .with_field("offset".to_string(), serde_json::json!(0.0));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["gain"], serde_json::json!(1.5));

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back.get("gain"), Some(&serde_json::json!(1.5)));
    }

    #[test]
    fn test_record_type_member_lookup() {
        let rt = RecordType::new("CalibrationParameters".to_string())
            .with_member("gain".to_string(), "Real".to_string())
            .with_member("offset".to_string(), "Real".to_string());

        assert_eq!(rt.member("gain").unwrap().attribute_type, "Real");
        assert!(rt.member("bias").is_none());
    }
}
