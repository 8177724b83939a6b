//! Registry of conditional-mandatory property groups.
//!
//! ISO 19115-1 marks some entity properties neither mandatory nor optional
//! but conditional: at least one property out of a named group must be
//! provided. Constructors cannot enforce those rules, so each group is
//! registered here and checked by the walker in
//! [`conditional`](super::conditional).

use serde::Serialize;
use thiserror::Error;

/// An at-least-one-of obligation over a fixed set of entity properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionalGroup {
    /// Entity the obligation applies to, e.g. `"Lineage"`.
    pub entity: &'static str,
    /// Group name within the entity, e.g. `"content"`.
    pub group: &'static str,
    /// Properties of which at least one must be present.
    pub members: &'static [&'static str],
}

impl ConditionalGroup {
    /// `Entity.group` label used in violation messages.
    pub fn label(&self) -> String {
        format!("{}.{}", self.entity, self.group)
    }
}

/// A source must carry a description, a scope, or both.
pub static SOURCE_DESCRIPTION_OR_SCOPE: ConditionalGroup = ConditionalGroup {
    entity: "Source",
    group: "description_or_scope",
    members: &["description", "scope"],
};

/// A lineage must carry a statement, process steps, or sources.
pub static LINEAGE_CONTENT: ConditionalGroup = ConditionalGroup {
    entity: "Lineage",
    group: "content",
    members: &["statement", "process_step", "source"],
};

/// An extent must carry a description or at least one geographic, temporal,
/// or vertical element.
pub static EXTENT_ELEMENT: ConditionalGroup = ConditionalGroup {
    entity: "Extent",
    group: "element",
    members: &[
        "description",
        "geographic_element",
        "temporal_element",
        "vertical_element",
    ],
};

/// A releasability must name an addressee or carry a statement.
pub static RELEASABILITY_TARGET: ConditionalGroup = ConditionalGroup {
    entity: "Releasability",
    group: "target",
    members: &["addressee", "statement"],
};

/// Legal constraints must state at least one restriction.
pub static LEGAL_CONSTRAINTS_RESTRICTION: ConditionalGroup = ConditionalGroup {
    entity: "LegalConstraints",
    group: "restriction",
    members: &[
        "access_constraints",
        "use_constraints",
        "other_constraints",
        "use_limitation",
        "releasability",
    ],
};

static CONDITIONAL_GROUPS: [&ConditionalGroup; 5] = [
    &SOURCE_DESCRIPTION_OR_SCOPE,
    &LINEAGE_CONTENT,
    &EXTENT_ELEMENT,
    &RELEASABILITY_TARGET,
    &LEGAL_CONSTRAINTS_RESTRICTION,
];

/// Every registered conditional-mandatory group.
pub fn conditional_groups() -> &'static [&'static ConditionalGroup] {
    &CONDITIONAL_GROUPS
}

/// One site in a value graph where all members of a group were absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionalGroupViolation {
    /// Dotted property path from the validation root to the violating
    /// record, with sequence indices, e.g. `"lineage.source[2]"`.
    pub path: String,
    /// The group whose members were all absent.
    pub group: &'static ConditionalGroup,
}

impl std::fmt::Display for ConditionalGroupViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} requires at least one of {}",
            self.path,
            self.group.label(),
            self.group.members.join(", ")
        )
    }
}

/// Outcome of walking one value graph for conditional obligations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Every violation found, in walk order.
    pub violations: Vec<ConditionalGroupViolation>,
}

impl ValidationReport {
    /// True when no conditional obligation was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert the report into a `Result` for callers propagating with `?`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

/// One or more conditional obligations were violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} conditional obligation(s) violated", .violations.len())]
pub struct ValidationError {
    /// The violations, in walk order.
    pub violations: Vec<ConditionalGroupViolation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_every_group() {
        let labels: Vec<String> = conditional_groups().iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Source.description_or_scope",
                "Lineage.content",
                "Extent.element",
                "Releasability.target",
                "LegalConstraints.restriction",
            ]
        );
    }

    #[test]
    fn test_violation_message_names_path_group_and_members() {
        let violation = ConditionalGroupViolation {
            path: "lineage.source[0]".to_string(),
            group: &SOURCE_DESCRIPTION_OR_SCOPE,
        };
        assert_eq!(
            violation.to_string(),
            "lineage.source[0]: Source.description_or_scope requires at least one of description, scope"
        );
    }

    #[test]
    fn test_empty_report_converts_to_ok() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_error_counts_violations() {
        let report = ValidationReport {
            violations: vec![
                ConditionalGroupViolation {
                    path: "extent".to_string(),
                    group: &EXTENT_ELEMENT,
                },
                ConditionalGroupViolation {
                    path: "lineage".to_string(),
                    group: &LINEAGE_CONTENT,
                },
            ],
        };
        let err = report.into_result().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert_eq!(err.to_string(), "2 conditional obligation(s) violated");
    }
}
