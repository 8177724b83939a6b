//! Code-list infrastructure and shared vocabulary tables
//!
//! Every enumerated code list in the crate implements [`CodeList`], which ties
//! each member to the exact string token used by the ISO 19115 family of
//! standards for interchange. The token is the contractual value; the Rust
//! variant name is internal. Tokens are declared once per member (the serde
//! rename and the [`CodeList::token`] result come from the same literal).
//!
//! Also hosts the abbreviation registries from ISO 19115-1 Annex material:
//! general abbreviated terms and the two-letter package prefixes (CI, MD, EX,
//! ...) with the standard each package comes from.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A closed, standards-defined enumeration of string tokens.
///
/// `token` returns the external string exactly as the standard's encodings
/// spell it; `from_token` is its inverse over the closed domain; `all` exposes
/// the domain itself so callers can enumerate or index the list.
pub trait CodeList: Copy + Eq + std::fmt::Debug + Sized + 'static {
    /// Symbolic name of the code list, e.g. `"RoleCode"`.
    const NAME: &'static str;

    /// Every member of the closed domain, in standard declaration order.
    fn all() -> &'static [Self];

    /// The exact external string token for this member.
    fn token(&self) -> &'static str;

    /// Resolve an external token back to its member, if it is in the domain.
    fn from_token(token: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.token() == token)
    }
}

/// A token that is not part of a code list's closed domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {list} token: {token}")]
pub struct UnknownToken {
    /// Which code list rejected the token
    pub list: &'static str,
    /// The rejected token
    pub token: String,
}

/// Declares a code list: the enum, its serde token mapping, the [`CodeList`]
/// impl and string conversions, all from a single `Variant => "token"` table.
macro_rules! code_list {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $crate::vocabulary::CodeList for $name {
            const NAME: &'static str = stringify!($name);

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn token(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::vocabulary::CodeList::token(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::vocabulary::UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::vocabulary::CodeList>::from_token(s).ok_or_else(|| {
                    tracing::trace!(
                        list = <Self as $crate::vocabulary::CodeList>::NAME,
                        token = s,
                        "token not in code list"
                    );
                    $crate::vocabulary::UnknownToken {
                        list: <Self as $crate::vocabulary::CodeList>::NAME,
                        token: s.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use code_list;

/// An abbreviated term and its expansion (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbbreviatedTerm {
    /// The abbreviation as used throughout the standards text
    pub abbreviation: String,
    /// The spelled-out term
    pub term: String,
}

/// A two-letter package prefix, its meaning and the standard defining it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageAbbreviation {
    /// The package prefix, e.g. `"CI"` or `"MD"`
    pub abbreviation: String,
    /// Package subject area
    pub term: String,
    /// The standard the package belongs to
    pub standard: String,
}

fn term(abbreviation: &str, term: &str) -> AbbreviatedTerm {
    AbbreviatedTerm {
        abbreviation: abbreviation.to_string(),
        term: term.to_string(),
    }
}

fn package(abbreviation: &str, term: &str, standard: &str) -> PackageAbbreviation {
    PackageAbbreviation {
        abbreviation: abbreviation.to_string(),
        term: term.to_string(),
        standard: standard.to_string(),
    }
}

static ABBREVIATED_TERMS: Lazy<Vec<AbbreviatedTerm>> = Lazy::new(|| {
    vec![
        term("OCL", "Object Constraint Language"),
        term("OGC", "Open Geospatial Consortium"),
        term("UML", "Unified Modelling Language"),
        term("XML", "Extensible Markup Language"),
    ]
});

static PACKAGE_ABBREVIATIONS: Lazy<Vec<PackageAbbreviation>> = Lazy::new(|| {
    vec![
        package("CI", "Citation", "ISO 19115-1"),
        package("DQ", "Data Quality", "ISO 19157"),
        package("DS", "Dataset", "ISO 19115-1"),
        package("EX", "Extent", "ISO 19115-1"),
        package("FC", "Feature Catalog", "ISO 19110"),
        package("GF", "General Feature", "ISO 19109"),
        package("GM", "Geometry", "ISO 19107"),
        package("LI", "Lineage", "ISO 19115-1"),
        package("LE", "Lineage Extended", "ISO 19115-2"),
        package("MD", "Metadata", "ISO 19115-1"),
        package("PT", "Polylinguistic text", "ISO/TS 19103"),
        package("RS", "Reference System", "ISO 19115-1"),
        package("SC", "Spatial Coordinates", "ISO 19111"),
        package("SV", "Metadata for Services", "ISO 19115-1"),
        package("TM", "Temporal", "ISO 19108"),
    ]
});

static PACKAGE_INDEX: Lazy<HashMap<&'static str, &'static PackageAbbreviation>> =
    Lazy::new(|| {
        PACKAGE_ABBREVIATIONS
            .iter()
            .map(|p| (p.abbreviation.as_str(), p))
            .collect()
    });

/// General abbreviated terms used across the standards text.
pub fn abbreviations() -> &'static [AbbreviatedTerm] {
    &ABBREVIATED_TERMS
}

/// The two-letter package prefixes with their source standards.
pub fn package_abbreviations() -> &'static [PackageAbbreviation] {
    &PACKAGE_ABBREVIATIONS
}

/// Look up a package prefix, e.g. `package_for("EX")`.
pub fn package_for(abbreviation: &str) -> Option<&'static PackageAbbreviation> {
    PACKAGE_INDEX.get(abbreviation).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_lookup() {
        let ex = package_for("EX").unwrap();
        assert_eq!(ex.term, "Extent");
        assert_eq!(ex.standard, "ISO 19115-1");

        let sc = package_for("SC").unwrap();
        assert_eq!(sc.standard, "ISO 19111");

        assert!(package_for("ZZ").is_none());
    }

    #[test]
    fn test_abbreviation_tables_complete() {
        assert_eq!(abbreviations().len(), 4);
        assert_eq!(package_abbreviations().len(), 15);
        assert!(abbreviations().iter().any(|t| t.abbreviation == "OGC"));
    }
}
