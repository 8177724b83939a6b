//! Citation and responsible-party models
//!
//! Reference information for a resource and the parties responsible for it,
//! derived from the ISO 19115-1:2014 citation package: citations, dates,
//! identifiers, contacts and the individual/organisation party hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vocabulary::code_list;

use super::extent::Extent;
use super::identification::BrowseGraphic;

code_list! {
    /// Identification of when a given event occurred (ISO 19115-1)
    pub enum DateTypeCode {
        Creation => "creation",
        Publication => "publication",
        Revision => "revision",
        Expiry => "expiry",
        LastUpdate => "lastUpdate",
        LastRevision => "lastRevision",
        NextUpdate => "nextUpdate",
        Unavailable => "unavailable",
        InForce => "inForce",
        Adopted => "adopted",
        Deprecated => "deprecated",
        Superseded => "superseded",
        ValidityBegins => "validityBegins",
        ValidityExpires => "validityExpires",
        Released => "released",
        Distribution => "distribution",
    }
}

code_list! {
    /// Function performed by an online resource (ISO 19115-1)
    pub enum OnLineFunctionCode {
        Download => "download",
        Information => "information",
        OfflineAccess => "offlineAccess",
        Order => "order",
        Search => "search",
        CompleteMetadata => "completeMetadata",
        BrowseGraphic => "browseGraphic",
        Upload => "upload",
        EmailService => "emailService",
        Browsing => "browsing",
        FileAccess => "fileAccess",
    }
}

code_list! {
    /// Mode in which the resource is represented (ISO 19115-1)
    pub enum PresentationFormCode {
        DocumentDigital => "documentDigital",
        DocumentHardcopy => "documentHardcopy",
        ImageDigital => "imageDigital",
        ImageHardcopy => "imageHardcopy",
        MapDigital => "mapDigital",
        MapHardcopy => "mapHardcopy",
        ModelDigital => "modelDigital",
        ModelHardcopy => "modelHardcopy",
        ProfileDigital => "profileDigital",
        ProfileHardcopy => "profileHardcopy",
        TableDigital => "tableDigital",
        TableHardcopy => "tableHardcopy",
        VideoDigital => "videoDigital",
        VideoHardcopy => "videoHardcopy",
        AudioDigital => "audioDigital",
        AudioHardcopy => "audioHardcopy",
        MultimediaDigital => "multimediaDigital",
        MultimediaHardcopy => "multimediaHardcopy",
        PhysicalObject => "physicalObject",
        DiagramDigital => "diagramDigital",
        DiagramHardcopy => "diagramHardcopy",
    }
}

code_list! {
    /// Function performed by the responsible party (ISO 19115-1)
    pub enum RoleCode {
        ResourceProvider => "resourceProvider",
        Custodian => "custodian",
        Owner => "owner",
        User => "user",
        Distributor => "distributor",
        Originator => "originator",
        PointOfContact => "pointOfContact",
        PrincipalInvestigator => "principalInvestigator",
        Processor => "processor",
        Publisher => "publisher",
        Author => "author",
        Sponsor => "sponsor",
        CoAuthor => "coAuthor",
        Collaborator => "collaborator",
        Editor => "editor",
        Mediator => "mediator",
        RightsHolder => "rightsHolder",
        Contributor => "contributor",
        Funder => "funder",
        Stakeholder => "stakeholder",
    }
}

code_list! {
    /// Type of telephone number (ISO 19115-1)
    pub enum TelephoneTypeCode {
        Voice => "voice",
        Facsimile => "facsimile",
        Sms => "sms",
    }
}

/// Information about the series the cited resource is part of (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Name of the series or aggregate dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Information identifying the issue of the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_identification: Option<String>,
    /// Details on which pages of the publication the article was published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// Location of the responsible individual or organisation (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address lines for the location (as described in ISO 11180, Annex A)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delivery_point: Vec<String>,
    /// City of the location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province of the location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,
    /// ZIP or other postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country of the physical address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Addresses of the electronic mailboxes of the responsible party
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub electronic_mail_address: Vec<String>,
}

/// Telephone numbers for contacting the responsible party (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Telephone {
    /// Telephone number by which individuals can contact the party
    pub number: String,
    /// Type of telephone responded to by this number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_type: Option<TelephoneTypeCode>,
}

impl Telephone {
    pub fn new(number: String) -> Self {
        Self {
            number,
            number_type: None,
        }
    }

    pub fn with_number_type(mut self, number_type: TelephoneTypeCode) -> Self {
        self.number_type = Some(number_type);
        self
    }
}

/// Information about an online source from which the resource or related
/// information can be obtained (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnlineResource {
    /// Location for online access, a URL or similar addressing scheme
    pub linkage: String,
    /// Connection protocol to be used, e.g. `"http"` or `"ftp"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Name of an application profile that can be used with the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_profile: Option<String>,
    /// Name of the online resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Detailed text description of what the online resource is or does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Code for the function performed by the online resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<OnLineFunctionCode>,
    /// Request used to access the resource, depending on the protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_request: Option<String>,
}

impl OnlineResource {
    pub fn new(linkage: String) -> Self {
        Self {
            linkage,
            protocol: None,
            application_profile: None,
            name: None,
            description: None,
            function: None,
            protocol_request: None,
        }
    }

    pub fn with_function(mut self, function: OnLineFunctionCode) -> Self {
        self.function = Some(function);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

/// Information required to enable contact with the responsible party
/// (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Telephone numbers at which the party can be contacted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone: Vec<Telephone>,
    /// Physical addresses at which the party can be contacted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,
    /// Online information that can be used to contact the party
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub online_resource: Vec<OnlineResource>,
    /// Time periods when the party can be contacted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hours_of_service: Vec<String>,
    /// Supplemental instructions on how or when to contact the party
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_instructions: Option<String>,
    /// Type of the contact, e.g. `"office"` or `"home"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
}

/// Properties shared by every party variant (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyInfo {
    /// Name of the party; required when no other identification is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact information for the party
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_info: Vec<Contact>,
    /// Identifiers for the party, e.g. an ORCID or ISNI
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub party_identifier: Vec<Identifier>,
}

impl PartyInfo {
    pub fn named(name: String) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }
}

/// Information about an individual acting as a party (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    /// Shared party properties
    #[serde(flatten)]
    pub party: PartyInfo,
    /// Position of the individual in the organisation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_name: Option<String>,
}

impl Individual {
    pub fn new(name: String) -> Self {
        Self {
            party: PartyInfo::named(name),
            position_name: None,
        }
    }

    pub fn with_position_name(mut self, position_name: String) -> Self {
        self.position_name = Some(position_name);
        self
    }
}

/// Information about an organisation acting as a party (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    /// Shared party properties
    #[serde(flatten)]
    pub party: PartyInfo,
    /// Graphics identifying the organisation, e.g. a logo
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logo: Vec<BrowseGraphic>,
    /// Individuals belonging to the organisation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub individual: Vec<Individual>,
}

impl Organisation {
    pub fn new(name: String) -> Self {
        Self {
            party: PartyInfo::named(name),
            logo: Vec::new(),
            individual: Vec::new(),
        }
    }

    pub fn with_individual(mut self, individual: Individual) -> Self {
        self.individual.push(individual);
        self
    }
}

/// A party responsible for a resource: an individual or an organisation
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "partyType", rename_all = "camelCase")]
pub enum Party {
    Individual(Individual),
    Organisation(Organisation),
}

impl Party {
    /// The properties every party variant shares.
    pub fn info(&self) -> &PartyInfo {
        match self {
            Party::Individual(individual) => &individual.party,
            Party::Organisation(organisation) => &organisation.party,
        }
    }

    /// The party's name, whichever variant it is.
    pub fn name(&self) -> Option<&str> {
        self.info().name.as_deref()
    }
}

impl From<Individual> for Party {
    fn from(individual: Individual) -> Self {
        Party::Individual(individual)
    }
}

impl From<Organisation> for Party {
    fn from(organisation: Organisation) -> Self {
        Party::Organisation(organisation)
    }
}

/// A party and the role it plays for the resource (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Responsibility {
    /// Function performed by the responsible party
    pub role: RoleCode,
    /// Spatial or temporal extent over which the role applies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extent: Vec<Extent>,
    /// The parties playing the role
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub party: Vec<Party>,
}

impl Responsibility {
    pub fn new(role: RoleCode, party: Vec<Party>) -> Self {
        Self {
            role,
            extent: Vec::new(),
            party,
        }
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent.push(extent);
        self
    }
}

/// Reference date and the event it refers to (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CitationDate {
    /// Reference date for the cited resource
    pub date: DateTime<Utc>,
    /// Event used for the reference date
    pub date_type: DateTypeCode,
}

impl CitationDate {
    pub fn new(date: DateTime<Utc>, date_type: DateTypeCode) -> Self {
        Self { date, date_type }
    }
}

/// Standardized resource reference (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Name by which the cited resource is known
    pub title: String,
    /// Short names or other language names by which the resource is known
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_title: Vec<String>,
    /// Reference dates for the cited resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date: Vec<CitationDate>,
    /// Version of the cited resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    /// Date of the edition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_date: Option<DateTime<Utc>>,
    /// Values uniquely identifying the resource within its namespaces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    /// Parties responsible for the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cited_responsible_party: Vec<Responsibility>,
    /// Modes in which the resource is represented
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presentation_form: Vec<PresentationFormCode>,
    /// Series the cited resource is part of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
    /// Other details required to complete the citation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_citation_details: Vec<String>,
    /// International Standard Book Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// International Standard Serial Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    /// Online references to the cited resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub online_resource: Vec<OnlineResource>,
    /// Citation graphics, e.g. the cover of the cited document
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphic: Vec<BrowseGraphic>,
}

impl Citation {
    pub fn new(title: String) -> Self {
        Self {
            title,
            alternate_title: Vec::new(),
            date: Vec::new(),
            edition: None,
            edition_date: None,
            identifier: Vec::new(),
            cited_responsible_party: Vec::new(),
            presentation_form: Vec::new(),
            series: None,
            other_citation_details: Vec::new(),
            isbn: None,
            issn: None,
            online_resource: Vec::new(),
            graphic: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: CitationDate) -> Self {
        self.date.push(date);
        self
    }

    pub fn with_identifier(mut self, identifier: Identifier) -> Self {
        self.identifier.push(identifier);
        self
    }

    pub fn with_responsible_party(mut self, responsibility: Responsibility) -> Self {
        self.cited_responsible_party.push(responsibility);
        self
    }

    pub fn with_edition(mut self, edition: String) -> Self {
        self.edition = Some(edition);
        self
    }
}

/// Value uniquely identifying an object within a namespace (ISO 19115-1)
///
/// The authority back-reference points at the citation for the organisation
/// responsible for the namespace. It is an independent owned value, not a
/// link into a containing citation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Citation for the party responsible for the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<Box<Citation>>,
    /// Alphanumeric value identifying an instance in the namespace
    pub code: String,
    /// Identifier or namespace in which the code is valid, e.g. `"EPSG"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_space: Option<String>,
    /// Version identifier for the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Natural-language description of the meaning of the code value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Identifier {
    pub fn new(code: String) -> Self {
        Self {
            authority: None,
            code,
            code_space: None,
            version: None,
            description: None,
        }
    }

    pub fn with_code_space(mut self, code_space: String) -> Self {
        self.code_space = Some(code_space);
        self
    }

    pub fn with_authority(mut self, authority: Citation) -> Self {
        self.authority = Some(Box::new(authority));
        self
    }

    pub fn with_version(mut self, version: String) -> Self {
        self.version = Some(version);
        self
    }
}
