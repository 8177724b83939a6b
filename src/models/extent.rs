//! Extent models
//!
//! Spatial and temporal coverage of a resource, derived from the
//! ISO 19115-1:2014 extent package. The geographic element is a closed set of
//! variants: bounding box, identified area, or bounding polygon.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::referencing::crs::VerticalCrs;
use crate::geometry::DirectPosition;

use super::citation::Identifier;

/// Geographic position of the resource as a rectangle (ISO 19115-1)
///
/// The bounding values are given in decimal degrees, longitudes in
/// -180.0..=180.0 and latitudes in -90.0..=90.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeographicBoundingBox {
    /// Western-most coordinate of the limit of the resource's extent
    pub west_bound_longitude: f64,
    /// Eastern-most coordinate of the limit of the resource's extent
    pub east_bound_longitude: f64,
    /// Southern-most coordinate of the limit of the resource's extent
    pub south_bound_latitude: f64,
    /// Northern-most coordinate of the limit of the resource's extent
    pub north_bound_latitude: f64,
    /// Whether the bounding box encompasses an area covered by the resource
    /// (`true`, the default) or excluded from it (`false`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent_type_code: Option<bool>,
}

impl GeographicBoundingBox {
    pub fn new(
        west_bound_longitude: f64,
        east_bound_longitude: f64,
        south_bound_latitude: f64,
        north_bound_latitude: f64,
    ) -> Self {
        Self {
            west_bound_longitude,
            east_bound_longitude,
            south_bound_latitude,
            north_bound_latitude,
            extent_type_code: None,
        }
    }

    pub fn with_extent_type_code(mut self, inclusion: bool) -> Self {
        self.extent_type_code = Some(inclusion);
        self
    }
}

/// Geographic area identified by a code rather than coordinates (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeographicDescription {
    /// Identifier used to represent the geographic area, e.g. a gazetteer code
    pub geographic_identifier: Identifier,
    /// Inclusion (`true`, the default) or exclusion (`false`) indicator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent_type_code: Option<bool>,
}

impl GeographicDescription {
    pub fn new(geographic_identifier: Identifier) -> Self {
        Self {
            geographic_identifier,
            extent_type_code: None,
        }
    }
}

/// Enclosing area of the resource given as a set of polygon vertices
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoundingPolygon {
    /// Vertices of the polygon enclosing the resource
    pub polygon: Vec<DirectPosition>,
    /// Inclusion (`true`, the default) or exclusion (`false`) indicator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent_type_code: Option<bool>,
}

impl BoundingPolygon {
    pub fn new(polygon: Vec<DirectPosition>) -> Self {
        Self {
            polygon,
            extent_type_code: None,
        }
    }
}

/// Geographic area of the resource, one of the closed set of representations
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GeographicExtent {
    BoundingBox(GeographicBoundingBox),
    Description(GeographicDescription),
    Polygon(BoundingPolygon),
}

impl GeographicExtent {
    /// The inclusion/exclusion indicator shared by every variant.
    pub fn extent_type_code(&self) -> Option<bool> {
        match self {
            GeographicExtent::BoundingBox(b) => b.extent_type_code,
            GeographicExtent::Description(d) => d.extent_type_code,
            GeographicExtent::Polygon(p) => p.extent_type_code,
        }
    }

    /// Whether this element describes an included area. Absent means
    /// inclusion per the standard's default.
    pub fn is_inclusion(&self) -> bool {
        self.extent_type_code().unwrap_or(true)
    }
}

impl From<GeographicBoundingBox> for GeographicExtent {
    fn from(bounding_box: GeographicBoundingBox) -> Self {
        GeographicExtent::BoundingBox(bounding_box)
    }
}

impl From<GeographicDescription> for GeographicExtent {
    fn from(description: GeographicDescription) -> Self {
        GeographicExtent::Description(description)
    }
}

impl From<BoundingPolygon> for GeographicExtent {
    fn from(polygon: BoundingPolygon) -> Self {
        GeographicExtent::Polygon(polygon)
    }
}

/// Vertical domain of the resource (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerticalExtent {
    /// Lowest vertical extent contained in the resource
    pub minimum_value: f64,
    /// Highest vertical extent contained in the resource
    pub maximum_value: f64,
    /// Reference system in which the minimum and maximum are measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_crs: Option<Box<VerticalCrs>>,
}

impl VerticalExtent {
    pub fn new(minimum_value: f64, maximum_value: f64) -> Self {
        Self {
            minimum_value,
            maximum_value,
            vertical_crs: None,
        }
    }

    pub fn with_vertical_crs(mut self, crs: VerticalCrs) -> Self {
        self.vertical_crs = Some(Box::new(crs));
        self
    }
}

/// A period in time bounded by a begin and an end instant (ISO 19108)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Beginning instant of the period
    pub begin: DateTime<Utc>,
    /// Ending instant of the period
    pub end: DateTime<Utc>,
}

impl Period {
    pub fn new(begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { begin, end }
    }
}

/// Time period covered by the content of the resource (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemporalExtent {
    /// Period covered by the content of the resource
    pub extent: Period,
}

impl TemporalExtent {
    pub fn new(extent: Period) -> Self {
        Self { extent }
    }
}

/// Extent with respect to date/time and spatial boundaries together
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpatialTemporalExtent {
    /// Temporal properties shared with plain temporal extents
    #[serde(flatten)]
    pub temporal: TemporalExtent,
    /// Vertical extent component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_extent: Option<VerticalExtent>,
    /// Spatial extent components of the composite extent
    pub spatial_extent: Vec<GeographicExtent>,
}

impl SpatialTemporalExtent {
    pub fn new(extent: Period, spatial_extent: Vec<GeographicExtent>) -> Self {
        Self {
            temporal: TemporalExtent::new(extent),
            vertical_extent: None,
            spatial_extent,
        }
    }
}

/// A temporal element of an extent: plain, or combined with space
/// (ISO 19115-1)
///
/// Variant order matters for serde resolution: the spatio-temporal shape is
/// a superset of the plain one, so it is tried first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TemporalElement {
    SpatioTemporal(SpatialTemporalExtent),
    Temporal(TemporalExtent),
}

impl TemporalElement {
    /// The time period, whichever variant carries it.
    pub fn period(&self) -> &Period {
        match self {
            TemporalElement::SpatioTemporal(st) => &st.temporal.extent,
            TemporalElement::Temporal(t) => &t.extent,
        }
    }
}

/// Extent of the resource: description and/or geographic, temporal and
/// vertical elements (ISO 19115-1)
///
/// At least one of the four properties must be provided for the extent to
/// validate; the crate's validator reports the `Extent.element` group when
/// all are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    /// Extent of the resource in words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Geographic components of the extent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geographic_element: Vec<GeographicExtent>,
    /// Temporal components of the extent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub temporal_element: Vec<TemporalElement>,
    /// Vertical components of the extent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertical_element: Vec<VerticalExtent>,
}

impl Extent {
    pub fn new() -> Self {
        Self::default()
    }

    /// An extent consisting of a single geographic element.
    pub fn geographic(element: impl Into<GeographicExtent>) -> Self {
        Self {
            geographic_element: vec![element.into()],
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_geographic_element(mut self, element: impl Into<GeographicExtent>) -> Self {
        self.geographic_element.push(element.into());
        self
    }

    pub fn with_temporal_element(mut self, element: TemporalElement) -> Self {
        self.temporal_element.push(element);
        self
    }

    pub fn with_vertical_element(mut self, element: VerticalExtent) -> Self {
        self.vertical_element.push(element);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_bounding_box_defaults_to_inclusion() {
        let bbox = GeographicBoundingBox::new(-10.0, 10.0, -5.0, 5.0);
        assert_eq!(bbox.west_bound_longitude, -10.0);
        assert_eq!(bbox.north_bound_latitude, 5.0);
        assert_eq!(bbox.extent_type_code, None);

        let element: GeographicExtent = bbox.into();
        assert!(element.is_inclusion());

        let exclusion: GeographicExtent = GeographicBoundingBox::new(-10.0, 10.0, -5.0, 5.0)
            .with_extent_type_code(false)
            .into();
        assert!(!exclusion.is_inclusion());
    }

    #[test]
    fn test_geographic_extent_untagged_serde() {
        let described: GeographicExtent = GeographicDescription::new(
            Identifier::new("DE".to_string()).with_code_space("ISO3166-1".to_string()),
        )
        .into();

        let json = serde_json::to_value(&described).unwrap();
        assert_eq!(json["geographicIdentifier"]["code"], "DE");

        let back: GeographicExtent = serde_json::from_value(json).unwrap();
        assert_eq!(back, described);
    }

    #[test]
    fn test_temporal_element_variant_resolution() {
        let begin = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2019, 12, 31, 23, 59, 59).unwrap();

        let plain = TemporalElement::Temporal(TemporalExtent::new(Period::new(begin, end)));
        let composite = TemporalElement::SpatioTemporal(SpatialTemporalExtent::new(
            Period::new(begin, end),
            vec![GeographicBoundingBox::new(5.0, 15.0, 47.0, 55.0).into()],
        ));

        for element in [&plain, &composite] {
            let json = serde_json::to_value(element).unwrap();
            let back: TemporalElement = serde_json::from_value(json).unwrap();
            assert_eq!(&back, element);
        }

        assert_eq!(plain.period().begin, begin);
        assert_eq!(composite.period().end, end);
    }
}
