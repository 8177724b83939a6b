//! Measure value types
//!
//! Small value-with-unit types from ISO/TS 19103, used by resolution and
//! band descriptions. No unit arithmetic is performed here; the unit is
//! carried as descriptive data.

use serde::{Deserialize, Serialize};

/// A unit of measure identified by its symbol (ISO/TS 19103)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnitOfMeasure {
    /// Unit symbol, e.g. `"m"`, `"deg"` or `"nm"`
    pub symbol: String,
    /// Spelled-out unit name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UnitOfMeasure {
    pub fn new(symbol: String) -> Self {
        Self { symbol, name: None }
    }
}

/// Unit of measure restricted to lengths
pub type UomLength = UnitOfMeasure;

/// A length value with its unit (ISO/TS 19103)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Distance {
    /// Numeric value in the given unit
    pub value: f64,
    /// Unit the value is expressed in
    pub unit: UnitOfMeasure,
}

impl Distance {
    pub fn new(value: f64, unit: UnitOfMeasure) -> Self {
        Self { value, unit }
    }

    /// A distance expressed in metres.
    pub fn metres(value: f64) -> Self {
        Self::new(value, UnitOfMeasure::new("m".to_string()))
    }
}

/// An angular value with its unit (ISO/TS 19103)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Angle {
    /// Numeric value in the given unit
    pub value: f64,
    /// Unit the value is expressed in
    pub unit: UnitOfMeasure,
}

impl Angle {
    pub fn new(value: f64, unit: UnitOfMeasure) -> Self {
        Self { value, unit }
    }

    /// An angle expressed in decimal degrees.
    pub fn degrees(value: f64) -> Self {
        Self::new(value, UnitOfMeasure::new("deg".to_string()))
    }
}

/// Serde adapter for optional duration-valued properties, carried as whole
/// seconds. `chrono::Duration` has no serde support of its own.
pub mod duration_option_seconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(duration) => serializer.serialize_some(&duration.num_seconds()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            Some(seconds) => Duration::try_seconds(seconds)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom("duration out of range")),
            None => Ok(None),
        }
    }
}

/// Serde adapter for sequences of durations, carried as whole seconds.
pub mod duration_vec_seconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(value.iter().map(Duration::num_seconds))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<i64>::deserialize(deserializer)?
            .into_iter()
            .map(|seconds| {
                Duration::try_seconds(seconds)
                    .ok_or_else(|| serde::de::Error::custom("duration out of range"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_metres() {
        let d = Distance::metres(30.0);
        assert_eq!(d.value, 30.0);
        assert_eq!(d.unit.symbol, "m");
    }

    #[test]
    fn test_angle_serde_shape() {
        let a = Angle::degrees(0.5);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["unit"]["symbol"], "deg");
        assert!(json["unit"].get("name").is_none());
    }
}
