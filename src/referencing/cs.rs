//! Coordinate systems and axes
//!
//! A coordinate system is the ordered set of axes that gives meaning to the
//! numbers in a coordinate tuple (ISO 19111). The concrete kinds embed the
//! shared [`CoordinateSystem`] record; reference systems that do not narrow
//! the kind hold the [`CoordinateSystemItem`] enum instead.

use serde::{Deserialize, Serialize};

use super::datum::IdentifiedObject;
use crate::models::measure::UnitOfMeasure;
use crate::vocabulary::code_list;

code_list! {
    /// Direction of positive increase along a coordinate axis (ISO 19111)
    pub enum AxisDirection {
        Other => "other",
        North => "north",
        NorthNorthEast => "northNorthEast",
        NorthEast => "northEast",
        EastNorthEast => "eastNorthEast",
        East => "east",
        EastSouthEast => "eastSouthEast",
        SouthEast => "southEast",
        SouthSouthEast => "southSouthEast",
        South => "south",
        SouthSouthWest => "southSouthWest",
        SouthWest => "southWest",
        WestSouthWest => "westSouthWest",
        West => "west",
        WestNorthWest => "westNorthWest",
        NorthWest => "northWest",
        NorthNorthWest => "northNorthWest",
        Up => "up",
        Down => "down",
        GeocentricX => "geocentricX",
        GeocentricY => "geocentricY",
        GeocentricZ => "geocentricZ",
        ColumnPositive => "columnPositive",
        ColumnNegative => "columnNegative",
        RowPositive => "rowPositive",
        RowNegative => "rowNegative",
        DisplayRight => "displayRight",
        DisplayLeft => "displayLeft",
        DisplayUp => "displayUp",
        DisplayDown => "displayDown",
        Future => "future",
        Past => "past",
    }
}

code_list! {
    /// Meaning of an axis value range (ISO 19111)
    pub enum RangeMeaning {
        Exact => "exact",
        Wraparound => "wraparound",
    }
}

/// One axis of a coordinate system (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystemAxis {
    /// Shared referencing-object properties
    #[serde(flatten)]
    pub object: IdentifiedObject,
    /// Abbreviation used for this axis, e.g. `"Lat"` or `"X"`
    pub abbreviation: String,
    /// Direction of positive axis values
    pub direction: AxisDirection,
    /// Unit the axis values are expressed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitOfMeasure>,
    /// Smallest value normally found on this axis, in the axis unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_value: Option<f64>,
    /// Largest value normally found on this axis, in the axis unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_value: Option<f64>,
    /// Whether the range is a hard bound or wraps around, as longitude does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_meaning: Option<RangeMeaning>,
}

impl CoordinateSystemAxis {
    pub fn new(name: String, abbreviation: String, direction: AxisDirection) -> Self {
        Self {
            object: IdentifiedObject::new(name),
            abbreviation,
            direction,
            unit: None,
            minimum_value: None,
            maximum_value: None,
            range_meaning: None,
        }
    }

    pub fn with_unit(mut self, unit: UnitOfMeasure) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_range(mut self, minimum: f64, maximum: f64, meaning: RangeMeaning) -> Self {
        self.minimum_value = Some(minimum);
        self.maximum_value = Some(maximum);
        self.range_meaning = Some(meaning);
        self
    }

    /// The geodetic latitude axis as registries conventionally define it.
    pub fn geodetic_latitude() -> Self {
        Self::new(
            "Geodetic latitude".to_string(),
            "Lat".to_string(),
            AxisDirection::North,
        )
        .with_unit(UnitOfMeasure::new("deg".to_string()))
        .with_range(-90.0, 90.0, RangeMeaning::Exact)
    }

    /// The geodetic longitude axis as registries conventionally define it.
    pub fn geodetic_longitude() -> Self {
        Self::new(
            "Geodetic longitude".to_string(),
            "Lon".to_string(),
            AxisDirection::East,
        )
        .with_unit(UnitOfMeasure::new("deg".to_string()))
        .with_range(-180.0, 180.0, RangeMeaning::Wraparound)
    }
}

/// Properties shared by every coordinate-system kind (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystem {
    /// Shared referencing-object properties
    #[serde(flatten)]
    pub object: IdentifiedObject,
    /// Axes of the coordinate system, in coordinate-tuple order
    pub axis: Vec<CoordinateSystemAxis>,
}

impl CoordinateSystem {
    pub fn new(name: String, axis: Vec<CoordinateSystemAxis>) -> Self {
        Self {
            object: IdentifiedObject::new(name),
            axis,
        }
    }

    /// Number of axes, which is the dimension of coordinate tuples.
    pub fn dimension(&self) -> usize {
        self.axis.len()
    }
}

/// Coordinate system of straight mutually perpendicular axes (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartesianCs {
    /// Shared coordinate-system properties
    #[serde(flatten)]
    pub coordinate_system: CoordinateSystem,
}

impl CartesianCs {
    pub fn new(name: String, axis: Vec<CoordinateSystemAxis>) -> Self {
        Self {
            coordinate_system: CoordinateSystem::new(name, axis),
        }
    }
}

/// Coordinate system of geodetic latitude, geodetic longitude and optionally
/// ellipsoidal height (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EllipsoidalCs {
    /// Shared coordinate-system properties
    #[serde(flatten)]
    pub coordinate_system: CoordinateSystem,
}

impl EllipsoidalCs {
    pub fn new(name: String, axis: Vec<CoordinateSystemAxis>) -> Self {
        Self {
            coordinate_system: CoordinateSystem::new(name, axis),
        }
    }

    /// The two-dimensional latitude/longitude system used by geographic
    /// reference systems in the EPSG axis order.
    pub fn latitude_longitude() -> Self {
        Self::new(
            "Ellipsoidal 2D".to_string(),
            vec![
                CoordinateSystemAxis::geodetic_latitude(),
                CoordinateSystemAxis::geodetic_longitude(),
            ],
        )
    }
}

/// Single-axis coordinate system for heights or depths (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerticalCs {
    /// Shared coordinate-system properties
    #[serde(flatten)]
    pub coordinate_system: CoordinateSystem,
}

impl VerticalCs {
    pub fn new(name: String, axis: CoordinateSystemAxis) -> Self {
        Self {
            coordinate_system: CoordinateSystem::new(name, vec![axis]),
        }
    }
}

/// Single-axis coordinate system for time (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeCs {
    /// Shared coordinate-system properties
    #[serde(flatten)]
    pub coordinate_system: CoordinateSystem,
}

impl TimeCs {
    pub fn new(name: String, axis: CoordinateSystemAxis) -> Self {
        Self {
            coordinate_system: CoordinateSystem::new(name, vec![axis]),
        }
    }
}

/// Three-dimensional coordinate system of one distance and two angular
/// coordinates (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SphericalCs {
    /// Shared coordinate-system properties
    #[serde(flatten)]
    pub coordinate_system: CoordinateSystem,
}

impl SphericalCs {
    pub fn new(name: String, axis: Vec<CoordinateSystemAxis>) -> Self {
        Self {
            coordinate_system: CoordinateSystem::new(name, axis),
        }
    }
}

/// Single-axis coordinate system of distances along a curve (ISO 19111)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinearCs {
    /// Shared coordinate-system properties
    #[serde(flatten)]
    pub coordinate_system: CoordinateSystem,
}

impl LinearCs {
    pub fn new(name: String, axis: CoordinateSystemAxis) -> Self {
        Self {
            coordinate_system: CoordinateSystem::new(name, vec![axis]),
        }
    }
}

/// Any concrete coordinate-system kind at a reference site (ISO 19111)
///
/// Held by reference systems that do not narrow their coordinate system to a
/// single kind. The kind is spelled out on the wire so readers can
/// reconstruct the variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "csType", rename_all = "camelCase")]
pub enum CoordinateSystemItem {
    Cartesian(CartesianCs),
    Ellipsoidal(EllipsoidalCs),
    Vertical(VerticalCs),
    Time(TimeCs),
    Spherical(SphericalCs),
    Linear(LinearCs),
}

impl CoordinateSystemItem {
    /// Shared coordinate-system properties regardless of kind.
    pub fn coordinate_system(&self) -> &CoordinateSystem {
        match self {
            CoordinateSystemItem::Cartesian(cs) => &cs.coordinate_system,
            CoordinateSystemItem::Ellipsoidal(cs) => &cs.coordinate_system,
            CoordinateSystemItem::Vertical(cs) => &cs.coordinate_system,
            CoordinateSystemItem::Time(cs) => &cs.coordinate_system,
            CoordinateSystemItem::Spherical(cs) => &cs.coordinate_system,
            CoordinateSystemItem::Linear(cs) => &cs.coordinate_system,
        }
    }

    /// Borrowed kind-dispatching view of this coordinate system.
    pub fn as_ref(&self) -> CoordinateSystemRef<'_> {
        match self {
            CoordinateSystemItem::Cartesian(cs) => CoordinateSystemRef::Cartesian(cs),
            CoordinateSystemItem::Ellipsoidal(cs) => CoordinateSystemRef::Ellipsoidal(cs),
            CoordinateSystemItem::Vertical(cs) => CoordinateSystemRef::Vertical(cs),
            CoordinateSystemItem::Time(cs) => CoordinateSystemRef::Time(cs),
            CoordinateSystemItem::Spherical(cs) => CoordinateSystemRef::Spherical(cs),
            CoordinateSystemItem::Linear(cs) => CoordinateSystemRef::Linear(cs),
        }
    }
}

/// Borrowed view over any concrete coordinate-system kind
///
/// Returned by accessors that expose the coordinate system of a reference
/// system without fixing which kind it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateSystemRef<'a> {
    Cartesian(&'a CartesianCs),
    Ellipsoidal(&'a EllipsoidalCs),
    Vertical(&'a VerticalCs),
    Time(&'a TimeCs),
    Spherical(&'a SphericalCs),
    Linear(&'a LinearCs),
}

impl<'a> CoordinateSystemRef<'a> {
    /// Shared coordinate-system properties regardless of kind.
    pub fn coordinate_system(&self) -> &'a CoordinateSystem {
        match self {
            CoordinateSystemRef::Cartesian(cs) => &cs.coordinate_system,
            CoordinateSystemRef::Ellipsoidal(cs) => &cs.coordinate_system,
            CoordinateSystemRef::Vertical(cs) => &cs.coordinate_system,
            CoordinateSystemRef::Time(cs) => &cs.coordinate_system,
            CoordinateSystemRef::Spherical(cs) => &cs.coordinate_system,
            CoordinateSystemRef::Linear(cs) => &cs.coordinate_system,
        }
    }

    /// Number of axes, which is the dimension of coordinate tuples.
    pub fn dimension(&self) -> usize {
        self.coordinate_system().dimension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::CodeList;

    #[test]
    fn test_axis_direction_tokens() {
        assert_eq!(AxisDirection::GeocentricX.token(), "geocentricX");
        assert_eq!(
            AxisDirection::from_token("columnPositive"),
            Some(AxisDirection::ColumnPositive)
        );
        assert_eq!(AxisDirection::all().len(), 32);
    }

    #[test]
    fn test_latitude_longitude_axes() {
        let cs = EllipsoidalCs::latitude_longitude();
        assert_eq!(cs.coordinate_system.dimension(), 2);
        assert_eq!(cs.coordinate_system.axis[0].abbreviation, "Lat");
        assert_eq!(
            cs.coordinate_system.axis[1].range_meaning,
            Some(RangeMeaning::Wraparound)
        );
    }

    #[test]
    fn test_coordinate_system_item_tag() {
        let item = CoordinateSystemItem::Ellipsoidal(EllipsoidalCs::latitude_longitude());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["csType"], "ellipsoidal");
        assert_eq!(json["axis"][0]["direction"], "north");

        let back: CoordinateSystemItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_kind_erased_dimension() {
        let item = CoordinateSystemItem::Vertical(VerticalCs::new(
            "Gravity-related height".to_string(),
            CoordinateSystemAxis::new("H".to_string(), "H".to_string(), AxisDirection::Up),
        ));
        assert_eq!(item.as_ref().dimension(), 1);
    }
}
