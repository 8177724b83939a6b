//! Constraint models
//!
//! Restrictions on the access and use of a resource or its metadata, derived
//! from the ISO 19115-1:2014 constraints package. `LegalConstraints` and
//! `SecurityConstraints` specialize the shared `Constraints` record.

use serde::{Deserialize, Serialize};

use crate::vocabulary::code_list;

use super::citation::{Citation, Responsibility};
use super::identification::BrowseGraphic;
use super::maintenance::Scope;

code_list! {
    /// Name of the handling restrictions on the resource (ISO 19115-1)
    pub enum ClassificationCode {
        Unclassified => "unclassified",
        Restricted => "restricted",
        Confidential => "confidential",
        Secret => "secret",
        TopSecret => "topSecret",
        SensitiveButUnclassified => "sensitiveButUnclassified",
        ForOfficialUseOnly => "forOfficialUseOnly",
        Protected => "protected",
        LimitedDistribution => "limitedDistribution",
    }
}

code_list! {
    /// Limitations placed upon the access or use of the resource
    /// (ISO 19115-1)
    pub enum RestrictionCode {
        Copyright => "copyright",
        Patent => "patent",
        PatentPending => "patentPending",
        Trademark => "trademark",
        Licence => "licence",
        IntellectualPropertyRights => "intellectualPropertyRights",
        Restricted => "restricted",
        OtherRestrictions => "otherRestrictions",
        Unrestricted => "unrestricted",
        LicenceUnrestricted => "licenceUnrestricted",
        LicenceEndUser => "licenceEndUser",
        LicenceDistributor => "licenceDistributor",
        Private => "private",
        Statutory => "statutory",
        Confidential => "confidential",
        SensitiveButUnclassified => "sensitiveButUnclassified",
        InConfidence => "in-confidence",
    }
}

/// Information about who can release the resource and under which conditions
/// (ISO 19115-1)
///
/// Either the addressee list or the statement must be provided; the validator
/// reports the `Releasability.target` group when both are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Releasability {
    /// Parties to which the release statement applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addressee: Vec<Responsibility>,
    /// Release statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    /// Codes describing the restrictions on releasing the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dissemination_constraints: Vec<RestrictionCode>,
}

impl Releasability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statement(mut self, statement: String) -> Self {
        self.statement = Some(statement);
        self
    }
}

/// Restrictions on the access and use of a resource or its metadata
/// (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Limitations affecting the fitness for use of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_limitation: Vec<String>,
    /// Part of the resource the constraints apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint_application_scope: Option<Scope>,
    /// Graphics or symbols indicating the constraint
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphic: Vec<BrowseGraphic>,
    /// Citations for the limitation or constraint, e.g. a copyright statement
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<Citation>,
    /// Information about who can release the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releasability: Option<Releasability>,
    /// Parties responsible for the resource constraints
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsible_party: Vec<Responsibility>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use_limitation(mut self, limitation: String) -> Self {
        self.use_limitation.push(limitation);
        self
    }

    pub fn with_releasability(mut self, releasability: Releasability) -> Self {
        self.releasability = Some(releasability);
        self
    }
}

/// Restrictions and legal prerequisites for accessing and using the resource
/// (ISO 19115-1)
///
/// At least one of the restriction properties, or an inherited use
/// limitation or releasability, must be provided; the validator reports the
/// `LegalConstraints.restriction` group otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegalConstraints {
    /// Shared constraint properties
    #[serde(flatten)]
    pub constraints: Constraints,
    /// Access constraints to assure the protection of privacy or
    /// intellectual property
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_constraints: Vec<RestrictionCode>,
    /// Constraints to assure the protection of privacy or intellectual
    /// property when using the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_constraints: Vec<RestrictionCode>,
    /// Other restrictions and legal prerequisites, required when an access
    /// or use constraint is `otherRestrictions`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_constraints: Vec<String>,
}

impl LegalConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_constraint(mut self, restriction: RestrictionCode) -> Self {
        self.access_constraints.push(restriction);
        self
    }

    pub fn with_use_constraint(mut self, restriction: RestrictionCode) -> Self {
        self.use_constraints.push(restriction);
        self
    }
}

/// Handling restrictions imposed for national security or similar concerns
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityConstraints {
    /// Shared constraint properties
    #[serde(flatten)]
    pub constraints: Constraints,
    /// Name of the handling restrictions on the resource
    pub classification: ClassificationCode,
    /// Explanation of the application of the legal constraints, or other
    /// restrictions and prerequisites for using the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_note: Option<String>,
    /// Name of the classification system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_system: Option<String>,
    /// Additional information about the restrictions on handling the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_description: Option<String>,
}

impl SecurityConstraints {
    pub fn new(classification: ClassificationCode) -> Self {
        Self {
            constraints: Constraints::new(),
            classification,
            user_note: None,
            classification_system: None,
            handling_description: None,
        }
    }
}

/// A constraint statement at a reference site: the base record or one of its
/// specializations (ISO 19115-1)
///
/// Tagged explicitly because a legal constraint with none of its own
/// properties set has the same shape as the base record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "constraintType", rename_all = "camelCase")]
pub enum ConstraintItem {
    Security(SecurityConstraints),
    Legal(LegalConstraints),
    General(Constraints),
}

impl ConstraintItem {
    /// The properties every constraint variant shares.
    pub fn constraints(&self) -> &Constraints {
        match self {
            ConstraintItem::Security(security) => &security.constraints,
            ConstraintItem::Legal(legal) => &legal.constraints,
            ConstraintItem::General(general) => general,
        }
    }
}

impl From<Constraints> for ConstraintItem {
    fn from(constraints: Constraints) -> Self {
        ConstraintItem::General(constraints)
    }
}

impl From<LegalConstraints> for ConstraintItem {
    fn from(legal: LegalConstraints) -> Self {
        ConstraintItem::Legal(legal)
    }
}

impl From<SecurityConstraints> for ConstraintItem {
    fn from(security: SecurityConstraints) -> Self {
        ConstraintItem::Security(security)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::CodeList;

    #[test]
    fn test_restriction_tokens() {
        assert_eq!(RestrictionCode::InConfidence.token(), "in-confidence");
        assert_eq!(RestrictionCode::OtherRestrictions.token(), "otherRestrictions");
        assert_eq!(
            RestrictionCode::from_token("in-confidence"),
            Some(RestrictionCode::InConfidence)
        );
    }

    #[test]
    fn test_specializations_carry_base_properties() {
        let legal = LegalConstraints::new().with_access_constraint(RestrictionCode::Copyright);
        let legal = LegalConstraints {
            constraints: Constraints::new().with_use_limitation("research only".to_string()),
            ..legal
        };

        let item: ConstraintItem = legal.into();
        assert_eq!(item.constraints().use_limitation[0], "research only");

        let security: ConstraintItem = SecurityConstraints::new(ClassificationCode::Secret).into();
        assert!(security.constraints().use_limitation.is_empty());
    }

    #[test]
    fn test_constraint_item_tag_resolution() {
        let security: ConstraintItem = SecurityConstraints::new(ClassificationCode::Protected).into();
        let json = serde_json::to_value(&security).unwrap();
        assert_eq!(json["constraintType"], "security");
        assert_eq!(json["classification"], "protected");

        let back: ConstraintItem = serde_json::from_value(json).unwrap();
        assert!(matches!(back, ConstraintItem::Security(_)));

        let general: ConstraintItem = Constraints::new()
            .with_use_limitation("navigation is not a permitted use".to_string())
            .into();
        let json = serde_json::to_value(&general).unwrap();
        assert_eq!(json["constraintType"], "general");
        let back: ConstraintItem = serde_json::from_value(json).unwrap();
        assert!(matches!(back, ConstraintItem::General(_)));
    }
}
