//! Identification models
//!
//! Basic information required to uniquely identify a resource, derived from
//! the ISO 19115-1:2014 identification package. `Identification` is the
//! shared record; data and service resources specialize it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::vocabulary::code_list;

use super::citation::{Citation, Identifier, OnlineResource, Responsibility};
use super::constraints::ConstraintItem;
use super::distribution::Format;
use super::extent::Extent;
use super::maintenance::MaintenanceInformation;
use super::measure::{duration_vec_seconds, Angle, Distance};
use super::naming::Locale;
use super::representation::SpatialRepresentationTypeCode;

code_list! {
    /// Justification for the correlation of two resources (ISO 19115-1)
    pub enum AssociationTypeCode {
        CrossReference => "crossReference",
        LargerWorkCitation => "largerWorkCitation",
        PartOfSeamlessDatabase => "partOfSeamlessDatabase",
        Source => "source",
        StereoMate => "stereoMate",
        IsComposedOf => "isComposedOf",
        CollectiveTitle => "collectiveTitle",
        Series => "series",
        Dependency => "dependency",
        RevisionOf => "revisionOf",
    }
}

code_list! {
    /// Type of aggregation activity in which resources are related
    /// (ISO 19115-1)
    pub enum InitiativeTypeCode {
        Campaign => "campaign",
        Collection => "collection",
        Exercise => "exercise",
        Experiment => "experiment",
        Investigation => "investigation",
        Mission => "mission",
        Sensor => "sensor",
        Operation => "operation",
        Platform => "platform",
        Process => "process",
        Program => "program",
        Project => "project",
        Study => "study",
        Task => "task",
        Trial => "trial",
    }
}

code_list! {
    /// Methods used to group similar keywords (ISO 19115-1)
    pub enum KeywordTypeCode {
        Discipline => "discipline",
        Place => "place",
        Stratum => "stratum",
        Temporal => "temporal",
        Theme => "theme",
        DataCentre => "dataCentre",
        FeatureType => "featureType",
        Instrument => "instrument",
        Platform => "platform",
        Process => "process",
        Project => "project",
        Service => "service",
        Product => "product",
        SubTopicCategory => "subTopicCategory",
        Taxon => "taxon",
    }
}

code_list! {
    /// Status of the resource (ISO 19115-1)
    pub enum ProgressCode {
        Completed => "completed",
        HistoricalArchive => "historicalArchive",
        Obsolete => "obsolete",
        OnGoing => "onGoing",
        Planned => "planned",
        Required => "required",
        UnderDevelopment => "underDevelopment",
        Final => "final",
        Pending => "pending",
        Retired => "retired",
        Superseded => "superseded",
        Tentative => "tentative",
        Valid => "valid",
        Accepted => "accepted",
        NotAccepted => "notAccepted",
        Withdrawn => "withdrawn",
        Proposed => "proposed",
        Deprecated => "deprecated",
    }
}

code_list! {
    /// High-level geographic data thematic classification (ISO 19115-1)
    pub enum TopicCategoryCode {
        Farming => "farming",
        Biota => "biota",
        Boundaries => "boundaries",
        ClimatologyMeteorologyAtmosphere => "climatologyMeteorologyAtmosphere",
        Economy => "economy",
        Elevation => "elevation",
        Environment => "environment",
        GeoscientificInformation => "geoscientificInformation",
        Health => "health",
        ImageryBaseMapsEarthCover => "imageryBaseMapsEarthCover",
        IntelligenceMilitary => "intelligenceMilitary",
        InlandWaters => "inlandWaters",
        Location => "location",
        Oceans => "oceans",
        PlanningCadastre => "planningCadastre",
        Society => "society",
        Structure => "structure",
        Transportation => "transportation",
        UtilitiesCommunication => "utilitiesCommunication",
        ExtraTerrestrial => "extraTerrestrial",
        Disaster => "disaster",
    }
}

/// Graphic that illustrates the resource, e.g. a dataset thumbnail
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowseGraphic {
    /// Name of the file that contains the graphic
    pub file_name: String,
    /// Text description of the illustration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_description: Option<String>,
    /// Format in which the illustration is encoded, e.g. `"PNG"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Restrictions on the access and use of the graphic
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_constraints: Vec<ConstraintItem>,
    /// Links to the graphic
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linkage: Vec<OnlineResource>,
}

impl BrowseGraphic {
    pub fn new(file_name: String) -> Self {
        Self {
            file_name,
            file_description: None,
            file_type: None,
            image_constraints: Vec::new(),
            linkage: Vec::new(),
        }
    }

    pub fn with_file_type(mut self, file_type: String) -> Self {
        self.file_type = Some(file_type);
        self
    }
}

/// Specification of a class to categorize keywords in a domain-specific
/// vocabulary (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordClass {
    /// Character string used to identify the keyword category or class
    pub class_name: String,
    /// URI of the concept in the ontology the class is taken from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_identifier: Option<String>,
    /// Reference to the formal conceptualization of the keyword class
    pub ontology: Citation,
}

impl KeywordClass {
    pub fn new(class_name: String, ontology: Citation) -> Self {
        Self {
            class_name,
            concept_identifier: None,
            ontology,
        }
    }
}

/// Keywords, their type and a reference to their source (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Keywords {
    /// Commonly used words or phrases describing the resource
    pub keyword: Vec<String>,
    /// Subject matter used to group similar keywords
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub keyword_type: Option<KeywordTypeCode>,
    /// Name of the formally registered thesaurus the keywords come from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thesaurus_name: Option<Citation>,
    /// Association of the keywords with a domain-specific vocabulary class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_class: Option<KeywordClass>,
}

impl Keywords {
    pub fn new(keyword: Vec<String>) -> Self {
        Self {
            keyword,
            keyword_type: None,
            thesaurus_name: None,
            keyword_class: None,
        }
    }

    pub fn with_type(mut self, keyword_type: KeywordTypeCode) -> Self {
        self.keyword_type = Some(keyword_type);
        self
    }

    pub fn with_thesaurus_name(mut self, thesaurus_name: Citation) -> Self {
        self.thesaurus_name = Some(thesaurus_name);
        self
    }
}

/// Brief description of ways the resource is currently or has been used
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    /// Brief description of the resource usage
    pub specific_usage: String,
    /// Dates and times of the usage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usage_date_time: Vec<DateTime<Utc>>,
    /// Applications for which the resource was found unfit, and why
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_determined_limitations: Option<String>,
    /// Identification of and means to contact the users of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_contact_info: Vec<Responsibility>,
    /// Responses to the user-determined limitations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response: Vec<String>,
    /// Publications that describe the usage of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_documentation: Vec<Citation>,
    /// Citations of a description of known issues with the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identified_issues: Vec<Citation>,
}

impl Usage {
    pub fn new(specific_usage: String) -> Self {
        Self {
            specific_usage,
            usage_date_time: Vec::new(),
            user_determined_limitations: None,
            user_contact_info: Vec::new(),
            response: Vec::new(),
            additional_documentation: Vec::new(),
            identified_issues: Vec::new(),
        }
    }
}

/// A scale as the level of detail of a resource, e.g. 1:50 000 (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepresentativeFraction {
    /// The number below the line in the vulgar fraction
    pub denominator: u64,
}

impl RepresentativeFraction {
    pub fn new(denominator: u64) -> Self {
        Self { denominator }
    }
}

/// Level of detail expressed as a scale factor, a distance or an angle
/// (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Level of detail expressed as the scale of a comparable hardcopy map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalent_scale: Option<RepresentativeFraction>,
    /// Horizontal ground sample distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
    /// Vertical sampling distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<Distance>,
    /// Angular sampling measure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angular_distance: Option<Angle>,
    /// Brief textual description of the spatial resolution of the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_of_detail: Option<String>,
}

impl Resolution {
    /// A resolution given as an equivalent scale denominator.
    pub fn equivalent_scale(denominator: u64) -> Self {
        Self {
            equivalent_scale: Some(RepresentativeFraction::new(denominator)),
            ..Self::default()
        }
    }

    /// A resolution given as a ground sample distance.
    pub fn ground_distance(distance: Distance) -> Self {
        Self {
            distance: Some(distance),
            ..Self::default()
        }
    }
}

/// Associated resource information (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedResource {
    /// Citation information about the associated resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Citation>,
    /// Type of relation between the resources
    pub association_type: AssociationTypeCode,
    /// Type of initiative under which the resources were produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiative_type: Option<InitiativeTypeCode>,
    /// Reference to the metadata of the associated resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_reference: Option<Citation>,
}

impl AssociatedResource {
    pub fn new(association_type: AssociationTypeCode) -> Self {
        Self {
            name: None,
            association_type,
            initiative_type: None,
            metadata_reference: None,
        }
    }

    pub fn with_name(mut self, name: Citation) -> Self {
        self.name = Some(name);
        self
    }
}

/// Basic information required to identify a resource (ISO 19115-1)
///
/// The shared record for every resource kind; `DataIdentification` and the
/// service identification record build on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    /// Citation for the resource
    pub citation: Citation,
    /// Brief narrative summary of the content of the resource
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Summary of the intentions for which the resource was developed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Recognition of those who contributed to the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credit: Vec<String>,
    /// Status of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<ProgressCode>,
    /// Means of communication with the parties associated with the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub point_of_contact: Vec<Responsibility>,
    /// Methods used to spatially represent geographic information
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spatial_representation_type: Vec<SpatialRepresentationTypeCode>,
    /// Factor providing a general understanding of the density of the data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spatial_resolution: Vec<Resolution>,
    /// Smallest resolvable temporal periods in the resource
    #[serde(
        default,
        with = "duration_vec_seconds",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub temporal_resolution: Vec<Duration>,
    /// Main themes of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topic_category: Vec<TopicCategoryCode>,
    /// Spatial and temporal extent of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extent: Vec<Extent>,
    /// Other documentation associated with the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_documentation: Vec<Citation>,
    /// Code identifying the level of processing of the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_level: Option<Identifier>,
    /// Information about the frequency and scope of resource updates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_maintenance: Vec<MaintenanceInformation>,
    /// Graphics illustrating the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphic_overview: Vec<BrowseGraphic>,
    /// Formats in which the resource is available
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_format: Vec<Format>,
    /// Keywords describing the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptive_keywords: Vec<Keywords>,
    /// Information about how the resource has been used
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_specific_usage: Vec<Usage>,
    /// Constraints on the access and use of the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_constraints: Vec<ConstraintItem>,
    /// Other resources associated with this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated_resource: Vec<AssociatedResource>,
}

impl Identification {
    pub fn new(citation: Citation, abstract_text: String) -> Self {
        Self {
            citation,
            abstract_text,
            purpose: None,
            credit: Vec::new(),
            status: Vec::new(),
            point_of_contact: Vec::new(),
            spatial_representation_type: Vec::new(),
            spatial_resolution: Vec::new(),
            temporal_resolution: Vec::new(),
            topic_category: Vec::new(),
            extent: Vec::new(),
            additional_documentation: Vec::new(),
            processing_level: None,
            resource_maintenance: Vec::new(),
            graphic_overview: Vec::new(),
            resource_format: Vec::new(),
            descriptive_keywords: Vec::new(),
            resource_specific_usage: Vec::new(),
            resource_constraints: Vec::new(),
            associated_resource: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ProgressCode) -> Self {
        self.status.push(status);
        self
    }

    pub fn with_point_of_contact(mut self, contact: Responsibility) -> Self {
        self.point_of_contact.push(contact);
        self
    }

    pub fn with_topic_category(mut self, category: TopicCategoryCode) -> Self {
        self.topic_category.push(category);
        self
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent.push(extent);
        self
    }

    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.descriptive_keywords.push(keywords);
        self
    }

    pub fn with_resource_constraints(mut self, constraints: impl Into<ConstraintItem>) -> Self {
        self.resource_constraints.push(constraints.into());
        self
    }
}

/// Information required to identify a dataset (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataIdentification {
    /// Shared identification properties
    #[serde(flatten)]
    pub identification: Identification,
    /// Language and character set used within the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<Locale>,
    /// Alternate languages used within the dataset
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_locale: Vec<Locale>,
    /// Description of the dataset's processing environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_description: Option<String>,
    /// Any other descriptive information about the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplemental_information: Option<String>,
}

impl DataIdentification {
    pub fn new(citation: Citation, abstract_text: String) -> Self {
        Self {
            identification: Identification::new(citation, abstract_text),
            default_locale: None,
            other_locale: Vec::new(),
            environment_description: None,
            supplemental_information: None,
        }
    }

    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }
}
