//! Spatial representation information
//!
//! How spatial information is expressed in a resource: gridded structures
//! with their dimensions and georeferencing, or vector structures with their
//! topology and geometric objects (ISO 19115-1, extended by ISO 19115-2 for
//! ground control points).

use serde::{Deserialize, Serialize};

use super::citation::Citation;
use super::maintenance::Scope;
use super::naming::Record;
use super::quality::{DataQuality, QualityElement};
use crate::error::{ModelError, ModelResult};
use crate::geometry::DirectPosition;
use crate::referencing::crs::ReferenceSystemItem;
use crate::vocabulary::code_list;

code_list! {
    /// Meaning of a grid cell's value position (ISO 19115-1)
    pub enum CellGeometryCode {
        Point => "point",
        Area => "area",
        Voxel => "voxel",
        Stratum => "stratum",
    }
}

code_list! {
    /// Name of the dimension of a gridded resource (ISO 19115-1)
    pub enum DimensionNameTypeCode {
        Row => "row",
        Column => "column",
        Vertical => "vertical",
        Track => "track",
        CrossTrack => "crossTrack",
        Line => "line",
        Sample => "sample",
        Time => "time",
    }
}

code_list! {
    /// Kind of geometric objects used to represent features (ISO 19115-1)
    pub enum GeometricObjectTypeCode {
        Complex => "complex",
        Composite => "composite",
        Curve => "curve",
        Point => "point",
        Solid => "solid",
        Surface => "surface",
    }
}

code_list! {
    /// Point in a pixel that a georeferenced position refers to
    /// (ISO 19115-1)
    pub enum PixelOrientationCode {
        Centre => "centre",
        LowerLeft => "lowerLeft",
        LowerRight => "lowerRight",
        UpperRight => "upperRight",
        UpperLeft => "upperLeft",
    }
}

code_list! {
    /// Kind of reference system a cited identifier denotes (ISO 19115-1)
    pub enum ReferenceSystemTypeCode {
        CompoundEngineeringParametric => "compoundEngineeringParametric",
        CompoundEngineeringParametricTemporal => "compoundEngineeringParametricTemporal",
        CompoundEngineeringTemporal => "compoundEngineeringTemporal",
        CompoundEngineeringVertical => "compoundEngineeringVertical",
        CompoundEngineeringVerticalTemporal => "compoundEngineeringVerticalTemporal",
        CompoundGeographic2dParametric => "compoundGeographic2DParametric",
        CompoundGeographic2dParametricTemporal => "compoundGeographic2DParametricTemporal",
        CompoundGeographic2dTemporal => "compoundGeographic2DTemporal",
        CompoundGeographic2dVertical => "compoundGeographic2DVertical",
        CompoundGeographic2dVerticalTemporal => "compoundGeographic2DVerticalTemporal",
        CompoundGeographic3dTemporal => "compoundGeographic3DTemporal",
        CompoundProjected2dParametric => "compoundProjected2DParametric",
        CompoundProjected2dParametricTemporal => "compoundProjected2DParametricTemporal",
        CompoundProjectedTemporal => "compoundProjectedTemporal",
        CompoundProjectedVertical => "compoundProjectedVertical",
        CompoundProjectedVerticalTemporal => "compoundProjectedVerticalTemporal",
        Engineering => "engineering",
        EngineeringDesign => "engineeringDesign",
        EngineeringImage => "engineeringImage",
        GeodeticGeocentric => "geodeticGeocentric",
        GeodeticGeographic2d => "geodeticGeographic2D",
        GeodeticGeographic3d => "geodeticGeographic3D",
        GeographicIdentifier => "geographicIdentifier",
        Linear => "linear",
        Parametric => "parametric",
        Projected => "projected",
        Temporal => "temporal",
        Vertical => "vertical",
    }
}

code_list! {
    /// Method used to spatially represent geographic information
    /// (ISO 19115-1)
    pub enum SpatialRepresentationTypeCode {
        Vector => "vector",
        Grid => "grid",
        TextTable => "textTable",
        Tin => "tin",
        StereoModel => "stereoModel",
        Video => "video",
    }
}

code_list! {
    /// Degree of complexity of the spatial relationships (ISO 19115-1)
    pub enum TopologyLevelCode {
        GeometryOnly => "geometryOnly",
        Topology1d => "topology1D",
        PlanarGraph => "planarGraph",
        FullPlanarGraph => "fullPlanarGraph",
        SurfaceGraph => "surfaceGraph",
        FullSurfaceGraph => "fullSurfaceGraph",
        Topology3d => "topology3D",
        FullTopology3d => "fullTopology3D",
        Abstract => "abstract",
    }
}

/// Properties of one axis of a gridded resource (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    /// Which axis this dimension describes
    pub dimension_name: DimensionNameTypeCode,
    /// Number of elements along the axis
    pub dimension_size: u64,
    /// Degree of detail along the axis, in the resource's units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<f64>,
    /// Enhancement of the dimension name, e.g. a band designation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_title: Option<String>,
    /// Description of the axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_description: Option<String>,
}

impl Dimension {
    pub fn new(dimension_name: DimensionNameTypeCode, dimension_size: u64) -> Self {
        Self {
            dimension_name,
            dimension_size,
            resolution: None,
            dimension_title: None,
            dimension_description: None,
        }
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }
}

/// Positional-accuracy information for geolocation data (ISO 19115-2)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeolocationInformation {
    /// Quality assessments of the geolocation information
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quality_info: Vec<DataQuality>,
}

impl GeolocationInformation {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A ground control point (ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gcp {
    /// Coordinates of the control point
    pub geographic_coordinates: DirectPosition,
    /// Accuracy reports for the control point coordinates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accuracy_report: Vec<QualityElement>,
}

impl Gcp {
    pub fn new(geographic_coordinates: DirectPosition) -> Self {
        Self {
            geographic_coordinates,
            accuracy_report: Vec::new(),
        }
    }
}

/// A collection of ground control points sharing one reference system
/// (ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GcpCollection {
    /// Shared geolocation properties
    #[serde(flatten)]
    pub geolocation: GeolocationInformation,
    /// Identifier of the collection
    pub collection_identification: i64,
    /// Name of the collection
    pub collection_name: String,
    /// Reference system the control point coordinates are expressed in
    pub coordinate_reference_system: Box<ReferenceSystemItem>,
    /// The control points of the collection
    pub gcp: Vec<Gcp>,
}

impl GcpCollection {
    pub fn new(
        collection_identification: i64,
        collection_name: String,
        coordinate_reference_system: ReferenceSystemItem,
        gcp: Vec<Gcp>,
    ) -> Self {
        Self {
            geolocation: GeolocationInformation::new(),
            collection_identification,
            collection_name,
            coordinate_reference_system: Box::new(coordinate_reference_system),
            gcp,
        }
    }
}

/// Geolocation data at a reference site (ISO 19115-2)
///
/// Untagged: the control-point collection is tried first because its
/// mandatory properties make it unambiguous; anything else is read as the
/// general form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GeolocationItem {
    /// A ground-control-point collection
    GcpCollection(GcpCollection),
    /// Geolocation information carrying only quality assessments
    General(GeolocationInformation),
}

/// Geometric objects used in a vector representation (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeometricObjects {
    /// Kind of objects used to represent features
    pub geometric_object_type: GeometricObjectTypeCode,
    /// Number of objects of this kind in the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometric_object_count: Option<u64>,
}

impl GeometricObjects {
    pub fn new(geometric_object_type: GeometricObjectTypeCode) -> Self {
        Self {
            geometric_object_type,
            geometric_object_count: None,
        }
    }

    /// Set the object count; the standard requires it to be positive.
    pub fn try_with_count(mut self, count: u64) -> ModelResult<Self> {
        if count == 0 {
            return Err(ModelError::NonPositiveCount {
                entity: "GeometricObjects",
                field: "geometric_object_count",
                value: count,
            });
        }
        self.geometric_object_count = Some(count);
        Ok(self)
    }
}

/// Properties shared by every spatial-representation kind (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpatialRepresentation {
    /// Part of the resource this representation information applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

/// Grid whose cells are addressed by dimension indices (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridSpatialRepresentation {
    /// Shared representation properties
    #[serde(flatten)]
    pub representation: SpatialRepresentation,
    /// Number of independent axes of the grid
    pub number_of_dimensions: u32,
    /// Properties of each axis
    pub axis_dimension_properties: Vec<Dimension>,
    /// What a cell value stands for geometrically
    pub cell_geometry: CellGeometryCode,
    /// Whether parameters to transform between image and geographic
    /// coordinates exist
    pub transformation_parameter_availability: bool,
}

impl GridSpatialRepresentation {
    pub fn new(
        number_of_dimensions: u32,
        axis_dimension_properties: Vec<Dimension>,
        cell_geometry: CellGeometryCode,
        transformation_parameter_availability: bool,
    ) -> Self {
        Self {
            representation: SpatialRepresentation::default(),
            number_of_dimensions,
            axis_dimension_properties,
            cell_geometry,
            transformation_parameter_availability,
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.representation.scope = Some(scope);
        self
    }
}

/// Vector objects used to represent geographic features (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VectorSpatialRepresentation {
    /// Shared representation properties
    #[serde(flatten)]
    pub representation: SpatialRepresentation,
    /// Degree of topological complexity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_level: Option<TopologyLevelCode>,
    /// Geometric objects used, by kind
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geometric_objects: Vec<GeometricObjects>,
}

impl VectorSpatialRepresentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topology_level(mut self, level: TopologyLevelCode) -> Self {
        self.topology_level = Some(level);
        self
    }

    pub fn with_geometric_objects(mut self, objects: GeometricObjects) -> Self {
        self.geometric_objects.push(objects);
        self
    }
}

/// Grid whose cells are regularly spaced in a coordinate reference system,
/// so cell positions follow from the grid origin and spacing (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Georectified {
    /// Shared grid properties
    #[serde(flatten)]
    pub grid: GridSpatialRepresentation,
    /// Whether geographic check points are available
    pub check_point_availability: bool,
    /// Description of the check points; expected when they are available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_point_description: Option<String>,
    /// Grid corner positions in the reference system, in clockwise order
    /// starting from a corner closest to the grid origin
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub corner_points: Vec<DirectPosition>,
    /// Position of the cell half way between opposite corners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centre_point: Option<DirectPosition>,
    /// Point in a cell that the corner and centre positions refer to
    pub point_in_pixel: PixelOrientationCode,
    /// Description of the transformation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformation_dimension_description: Option<String>,
    /// Associations between image and georeferenced dimensions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transformation_dimension_mapping: Vec<String>,
    /// Geographic check points used to test the georectification
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub check_point: Vec<Gcp>,
}

impl Georectified {
    pub fn new(
        grid: GridSpatialRepresentation,
        check_point_availability: bool,
        point_in_pixel: PixelOrientationCode,
    ) -> Self {
        Self {
            grid,
            check_point_availability,
            check_point_description: None,
            corner_points: Vec::new(),
            centre_point: None,
            point_in_pixel,
            transformation_dimension_description: None,
            transformation_dimension_mapping: Vec::new(),
            check_point: Vec::new(),
        }
    }

    /// Set the corner positions; the standard expects two to four, two being
    /// the lower left and upper right corners of a north-up grid.
    pub fn try_with_corner_points(mut self, corner_points: Vec<DirectPosition>) -> ModelResult<Self> {
        if corner_points.len() < 2 || corner_points.len() > 4 {
            return Err(ModelError::CardinalityOutOfRange {
                entity: "Georectified",
                field: "corner_points",
                min: 2,
                max: 4,
                actual: corner_points.len(),
            });
        }
        self.corner_points = corner_points;
        Ok(self)
    }
}

/// Grid whose cell positions must be computed from control points or
/// orientation parameters (ISO 19115-1, ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Georeferenceable {
    /// Shared grid properties
    #[serde(flatten)]
    pub grid: GridSpatialRepresentation,
    /// Whether control points are available
    pub control_point_availability: bool,
    /// Whether orientation parameters are available
    pub orientation_parameter_availability: bool,
    /// Description of the orientation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_parameter_description: Option<String>,
    /// Terms that support grid coverage georeferencing
    pub georeferenced_parameters: Record,
    /// References providing a description of the parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter_citation: Vec<Citation>,
    /// Geolocation data usable to compute cell positions
    pub geolocation_information: Vec<GeolocationItem>,
}

impl Georeferenceable {
    pub fn new(
        grid: GridSpatialRepresentation,
        georeferenced_parameters: Record,
        geolocation_information: Vec<GeolocationItem>,
    ) -> Self {
        Self {
            grid,
            control_point_availability: false,
            orientation_parameter_availability: false,
            orientation_parameter_description: None,
            georeferenced_parameters,
            parameter_citation: Vec::new(),
            geolocation_information,
        }
    }
}

/// Any concrete spatial-representation kind at a reference site
///
/// Tagged explicitly: the georectified and georeferenceable kinds are
/// supersets of the plain grid, so the wire shapes overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "representationType", rename_all = "camelCase")]
pub enum SpatialRepresentationItem {
    Grid(GridSpatialRepresentation),
    Vector(VectorSpatialRepresentation),
    Georectified(Georectified),
    Georeferenceable(Georeferenceable),
}

impl SpatialRepresentationItem {
    /// Part of the resource this representation information applies to.
    pub fn scope(&self) -> Option<&Scope> {
        match self {
            SpatialRepresentationItem::Grid(grid) => grid.representation.scope.as_ref(),
            SpatialRepresentationItem::Vector(vector) => vector.representation.scope.as_ref(),
            SpatialRepresentationItem::Georectified(rectified) => {
                rectified.grid.representation.scope.as_ref()
            }
            SpatialRepresentationItem::Georeferenceable(referenceable) => {
                referenceable.grid.representation.scope.as_ref()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::CodeList;

    fn two_by_two_grid() -> GridSpatialRepresentation {
        GridSpatialRepresentation::new(
            2,
            vec![
                Dimension::new(DimensionNameTypeCode::Row, 1024).with_resolution(10.0),
                Dimension::new(DimensionNameTypeCode::Column, 2048).with_resolution(10.0),
            ],
            CellGeometryCode::Area,
            true,
        )
    }

    #[test]
    fn test_reference_system_type_code_domain() {
        assert_eq!(ReferenceSystemTypeCode::all().len(), 28);
        assert_eq!(
            ReferenceSystemTypeCode::CompoundGeographic2dVertical.token(),
            "compoundGeographic2DVertical"
        );
        assert_eq!(
            ReferenceSystemTypeCode::from_token("geodeticGeographic3D"),
            Some(ReferenceSystemTypeCode::GeodeticGeographic3d)
        );
    }

    #[test]
    fn test_corner_point_cardinality() {
        let rectified = Georectified::new(two_by_two_grid(), false, PixelOrientationCode::Centre);
        let error = rectified
            .clone()
            .try_with_corner_points(vec![DirectPosition::xy(11.0, 48.0)])
            .unwrap_err();
        assert_eq!(
            error,
            ModelError::CardinalityOutOfRange {
                entity: "Georectified",
                field: "corner_points",
                min: 2,
                max: 4,
                actual: 1,
            }
        );

        let rectified = rectified
            .try_with_corner_points(vec![
                DirectPosition::xy(11.0, 48.0),
                DirectPosition::xy(12.0, 49.0),
            ])
            .unwrap();
        assert_eq!(rectified.corner_points.len(), 2);
    }

    #[test]
    fn test_representation_item_tags() {
        let vector = SpatialRepresentationItem::Vector(
            VectorSpatialRepresentation::new()
                .with_topology_level(TopologyLevelCode::GeometryOnly)
                .with_geometric_objects(
                    GeometricObjects::new(GeometricObjectTypeCode::Curve)
                        .try_with_count(1500)
                        .unwrap(),
                ),
        );
        let json = serde_json::to_value(&vector).unwrap();
        assert_eq!(json["representationType"], "vector");
        assert_eq!(json["geometricObjects"][0]["geometricObjectCount"], 1500);

        let rectified = SpatialRepresentationItem::Georectified(Georectified::new(
            two_by_two_grid(),
            false,
            PixelOrientationCode::LowerLeft,
        ));
        let json = serde_json::to_value(&rectified).unwrap();
        assert_eq!(json["representationType"], "georectified");
        assert_eq!(json["cellGeometry"], "area");

        let back: SpatialRepresentationItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, rectified);
    }

    #[test]
    fn test_gcp_collection_geolocation_item() {
        let collection = GeolocationItem::GcpCollection(GcpCollection::new(
            1,
            "Calibration points".to_string(),
            ReferenceSystemItem::Coordinate(crate::referencing::crs::CoordinateReferenceSystem::Geographic(
                crate::referencing::crs::GeographicCrs::wgs84(),
            )),
            vec![Gcp::new(DirectPosition::xy(11.5, 48.1))],
        ));
        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["collectionName"], "Calibration points");
        assert_eq!(json["coordinateReferenceSystem"]["crsType"], "geographic");

        let back: GeolocationItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, collection);
    }
}
