//! Content information
//!
//! What the cells and attributes of a resource contain: coverage range
//! dimensions with their sampling properties, imagery-specific descriptions,
//! and references to feature catalogues (ISO 19115-1, extended by
//! ISO 19115-2 for imagery).

use serde::{Deserialize, Serialize};

use super::citation::{Citation, Identifier};
use super::measure::{UnitOfMeasure, UomLength};
use super::naming::{GenericName, Locale, MemberName, Record, RecordType};
use crate::error::{ModelError, ModelResult};
use crate::vocabulary::code_list;

code_list! {
    /// Criterion for defining the extent of a spectral band (ISO 19115-2)
    pub enum BandDefinition {
        ThreeDb => "3dB",
        HalfMaximum => "halfMaximum",
        FiftyPercent => "fiftyPercent",
        OneOverE => "oneOverE",
        EquivalentWidth => "equivalentWidth",
    }
}

code_list! {
    /// What coverage cell values represent (ISO 19115-1)
    pub enum CoverageContentTypeCode {
        Image => "image",
        ThematicClassification => "thematicClassification",
        PhysicalMeasurement => "physicalMeasurement",
        AuxillaryInformation => "auxillaryInformation",
        QualityInformation => "qualityInformation",
        ReferenceInformation => "referenceInformation",
        ModelResult => "modelResult",
        Coordinate => "coordinate",
    }
}

code_list! {
    /// Condition that affected the image (ISO 19115-1)
    pub enum ImagingConditionCode {
        BlurredImage => "blurredImage",
        Cloud => "cloud",
        DegradingObliquity => "degradingObliquity",
        Fog => "fog",
        HeavySmokeOrDust => "heavySmokeOrDust",
        Night => "night",
        Rain => "rain",
        SemiDarkness => "semiDarkness",
        Shadow => "shadow",
        Snow => "snow",
        TerrainMasking => "terrainMasking",
    }
}

code_list! {
    /// Polarisation of a transmitted or detected radiation (ISO 19115-2)
    pub enum PolarisationOrientationCode {
        Horizontal => "horizontal",
        Vertical => "vertical",
        LeftCircular => "leftCircular",
        RightCircular => "rightCircular",
        Theta => "theta",
        Phi => "phi",
    }
}

code_list! {
    /// Shape of the curve relating cell values to real values (ISO 19115-2)
    pub enum TransferFunctionTypeCode {
        Linear => "linear",
        Logarithmic => "logarithmic",
        Exponential => "exponential",
    }
}

/// Specifics of a range element used by a band (ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RangeElementDescription {
    /// Designation of the range element
    pub name: String,
    /// Definition of the range element
    pub definition: String,
    /// Specific range elements, i.e. the codes and their meanings
    pub range_element: Vec<Record>,
}

impl RangeElementDescription {
    pub fn new(name: String, definition: String, range_element: Vec<Record>) -> Self {
        Self {
            name,
            definition,
            range_element,
        }
    }
}

/// Identification of a range of cell values (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RangeDimension {
    /// Number of the dimension in the resource's member structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_identifier: Option<MemberName>,
    /// Description of the range of the dimension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifiers for each attribute of the dimension
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<Identifier>,
}

impl RangeDimension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}

/// Range dimension whose cells hold sampled values (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SampleDimension {
    /// Shared range-dimension properties
    #[serde(flatten)]
    pub range: RangeDimension,
    /// Maximum cell value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Minimum cell value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// Units of the cell values; expected whenever extreme values are given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitOfMeasure>,
    /// Factor applied to cell values to obtain real values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_factor: Option<f64>,
    /// Offset applied to cell values to obtain real values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Mean of the cell values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_value: Option<f64>,
    /// Number of values used in the statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_values: Option<u64>,
    /// Standard deviation of the cell values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_deviation: Option<f64>,
    /// Structure of any other property carried per cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_property_type: Option<RecordType>,
    /// Other property values carried per cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_property: Option<Record>,
    /// Number of bits used to store each cell value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits_per_value: Option<u32>,
    /// Shape of the curve relating cell values to real values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_function_type: Option<TransferFunctionTypeCode>,
    /// Specifics of the range elements of this dimension
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub range_element_description: Vec<RangeElementDescription>,
    /// Smallest resolvable distance in the sampled ground area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_spatial_resolution: Option<f64>,
}

impl SampleDimension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, min_value: f64, max_value: f64, units: UnitOfMeasure) -> Self {
        self.min_value = Some(min_value);
        self.max_value = Some(max_value);
        self.units = Some(units);
        self
    }
}

/// Sample dimension covering a range of wavelengths (ISO 19115-1,
/// ISO 19115-2)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    /// Shared sample-dimension properties
    #[serde(flatten)]
    pub sample: SampleDimension,
    /// Longest wavelength the band responds to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_max: Option<f64>,
    /// Shortest wavelength the band responds to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_min: Option<f64>,
    /// Unit of the wavelength bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_units: Option<UomLength>,
    /// Wavelength of the band's strongest response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_response: Option<f64>,
    /// Number of discrete numerical values possible per cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_gradation: Option<u32>,
    /// Criterion used to define the band's extent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_boundary_definition: Option<BandDefinition>,
    /// Polarisation of the transmitted radiation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmitted_polarisation: Option<PolarisationOrientationCode>,
    /// Polarisation of the detected radiation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_polarisation: Option<PolarisationOrientationCode>,
}

impl Band {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bound_min: f64, bound_max: f64, bound_units: UomLength) -> Self {
        self.bound_min = Some(bound_min);
        self.bound_max = Some(bound_max);
        self.bound_units = Some(bound_units);
        self
    }
}

/// A range dimension at a reference site (ISO 19115-1)
///
/// Tagged explicitly: the band and sample kinds are supersets of the plain
/// range dimension, so the wire shapes overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "dimensionType", rename_all = "camelCase")]
pub enum RangeDimensionItem {
    Band(Band),
    Sample(SampleDimension),
    Range(RangeDimension),
}

/// Attributes sharing a common content type (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroup {
    /// What the grouped attribute values represent
    pub content_type: Vec<CoverageContentTypeCode>,
    /// The grouped attributes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute: Vec<RangeDimensionItem>,
}

impl AttributeGroup {
    pub fn new(content_type: Vec<CoverageContentTypeCode>) -> Self {
        Self {
            content_type,
            attribute: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: RangeDimensionItem) -> Self {
        self.attribute.push(attribute);
        self
    }
}

/// Description of what a coverage's cell values contain (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoverageDescription {
    /// Description of the attribute described by the cell values
    pub attribute_description: RecordType,
    /// Identifier of the processing level applied to the coverage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_level_code: Option<Identifier>,
    /// Attribute groups of the coverage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_group: Vec<AttributeGroup>,
    /// Specifics of range elements of the coverage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub range_element_description: Vec<RangeElementDescription>,
}

impl CoverageDescription {
    pub fn new(attribute_description: RecordType) -> Self {
        Self {
            attribute_description,
            processing_level_code: None,
            attribute_group: Vec::new(),
            range_element_description: Vec::new(),
        }
    }

    pub fn with_attribute_group(mut self, group: AttributeGroup) -> Self {
        self.attribute_group.push(group);
        self
    }
}

/// Coverage description specific to imagery (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescription {
    /// Shared coverage properties
    #[serde(flatten)]
    pub coverage: CoverageDescription,
    /// Elevation of the illumination over the sensed surface, in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illumination_elevation_angle: Option<f64>,
    /// Azimuth of the illumination measured from north, in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illumination_azimuth_angle: Option<f64>,
    /// Condition that affected the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imaging_condition: Option<ImagingConditionCode>,
    /// Image quality grade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_quality_code: Option<Identifier>,
    /// Area obscured by clouds, as a percentage of the spatial extent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_cover_percentage: Option<f64>,
    /// How many lossy compression cycles the image went through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_generation_quantity: Option<u32>,
    /// Whether triangulation has been performed on the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangulation_indicator: Option<bool>,
    /// Whether the radiometric calibration data is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radiometric_calibration_data_availability: Option<bool>,
    /// Whether the camera calibration information is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_calibration_information_availability: Option<bool>,
    /// Whether the film distortion information is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_distortion_information_availability: Option<bool>,
    /// Whether the lens distortion information is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lens_distortion_information_availability: Option<bool>,
}

impl ImageDescription {
    pub fn new(attribute_description: RecordType) -> Self {
        Self {
            coverage: CoverageDescription::new(attribute_description),
            illumination_elevation_angle: None,
            illumination_azimuth_angle: None,
            imaging_condition: None,
            image_quality_code: None,
            cloud_cover_percentage: None,
            compression_generation_quantity: None,
            triangulation_indicator: None,
            radiometric_calibration_data_availability: None,
            camera_calibration_information_availability: None,
            film_distortion_information_availability: None,
            lens_distortion_information_availability: None,
        }
    }

    pub fn with_cloud_cover_percentage(mut self, percentage: f64) -> Self {
        self.cloud_cover_percentage = Some(percentage);
        self
    }
}

/// One feature type occurring in a dataset (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTypeInfo {
    /// Name of the feature type
    pub feature_type_name: GenericName,
    /// Number of instances of this feature type in the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_instance_count: Option<u64>,
}

impl FeatureTypeInfo {
    pub fn new(feature_type_name: GenericName) -> Self {
        Self {
            feature_type_name,
            feature_instance_count: None,
        }
    }

    /// Set the instance count; the standard requires it to be positive.
    pub fn try_with_instance_count(mut self, count: u64) -> ModelResult<Self> {
        if count == 0 {
            return Err(ModelError::NonPositiveCount {
                entity: "FeatureTypeInfo",
                field: "feature_instance_count",
                value: count,
            });
        }
        self.feature_instance_count = Some(count);
        Ok(self)
    }
}

/// Reference to the feature catalogue describing a resource's feature types
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCatalogueDescription {
    /// Whether the cited catalogue complies with ISO 19110
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_code: Option<bool>,
    /// Languages used in the catalogue
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locale: Vec<Locale>,
    /// Whether the catalogue is shipped with the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_with_dataset: Option<bool>,
    /// Feature types described by the catalogue and present in the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_types: Vec<FeatureTypeInfo>,
    /// Citations of the catalogue itself
    pub feature_catalogue_citation: Vec<Citation>,
}

impl FeatureCatalogueDescription {
    pub fn new(feature_catalogue_citation: Vec<Citation>) -> Self {
        Self {
            compliance_code: None,
            locale: Vec::new(),
            included_with_dataset: None,
            feature_types: Vec::new(),
            feature_catalogue_citation,
        }
    }

    pub fn with_feature_type(mut self, feature_type: FeatureTypeInfo) -> Self {
        self.feature_types.push(feature_type);
        self
    }
}

/// Any concrete content description at a reference site (ISO 19115-1)
///
/// Tagged explicitly: the image kind is a superset of the coverage kind, so
/// the wire shapes overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "contentType", rename_all = "camelCase")]
pub enum ContentInformationItem {
    Coverage(CoverageDescription),
    Image(ImageDescription),
    FeatureCatalogue(FeatureCatalogueDescription),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::CodeList;

    #[test]
    fn test_irregular_band_definition_token() {
        assert_eq!(BandDefinition::ThreeDb.token(), "3dB");
        assert_eq!(
            BandDefinition::from_token("3dB"),
            Some(BandDefinition::ThreeDb)
        );
        assert_eq!(BandDefinition::all().len(), 5);
    }

    #[test]
    fn test_coverage_content_type_keeps_upstream_spelling() {
        // The standard itself spells this member without the double "i".
        assert_eq!(
            CoverageContentTypeCode::AuxillaryInformation.token(),
            "auxillaryInformation"
        );
        assert_eq!(CoverageContentTypeCode::all().len(), 8);
    }

    #[test]
    fn test_band_flattens_through_sample_and_range() {
        let band = Band::new().with_bounds(
            0.45,
            0.52,
            UomLength::new("micrometre".to_string()),
        );
        let mut band = band;
        band.sample.range.description = Some("Blue band".to_string());
        band.sample.bits_per_value = Some(12);

        let json = serde_json::to_value(&band).unwrap();
        assert_eq!(json["description"], "Blue band");
        assert_eq!(json["bitsPerValue"], 12);
        assert_eq!(json["boundUnits"]["symbol"], "micrometre");
    }

    #[test]
    fn test_content_item_tags_roundtrip() {
        let image = ContentInformationItem::Image(
            ImageDescription::new(RecordType::new("Radiance".to_string()))
                .with_cloud_cover_percentage(12.5),
        );
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["contentType"], "image");
        assert_eq!(json["attributeDescription"]["typeName"], "Radiance");
        let back: ContentInformationItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, image);

        let catalogue = ContentInformationItem::FeatureCatalogue(
            FeatureCatalogueDescription::new(vec![Citation::new(
                "Feature catalogue of topographic objects".to_string(),
            )])
            .with_feature_type(
                FeatureTypeInfo::new(GenericName::from("topo:Building"))
                    .try_with_instance_count(240_000)
                    .unwrap(),
            ),
        );
        let json = serde_json::to_value(&catalogue).unwrap();
        assert_eq!(json["contentType"], "featureCatalogue");
        assert_eq!(json["featureTypes"][0]["featureInstanceCount"], 240_000);
    }
}
