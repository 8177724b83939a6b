//! Distribution information
//!
//! How a resource can be obtained: the formats it is issued in, the parties
//! that distribute it, ordering terms, and the online or offline channels the
//! data moves over (ISO 19115-1).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::citation::{Citation, Identifier, OnlineResource, Responsibility};
use super::measure::duration_option_seconds;
use super::naming::{GenericName, Record, RecordType};
use crate::error::{ModelError, ModelResult};
use crate::vocabulary::code_list;

code_list! {
    /// Method used to write to the medium (ISO 19115-1)
    pub enum MediumFormatCode {
        Cpio => "cpio",
        Tar => "tar",
        HighSierra => "highSierra",
        Iso9660 => "iso9660",
        Iso9660RockRidge => "iso9660RockRidge",
        Iso9660AppleHfs => "iso9660AppleHFS",
        Udf => "udf",
    }
}

/// Medium on which a resource can be obtained offline (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medium {
    /// Name of the medium, cited like any other resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Citation>,
    /// Density the data is recorded at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// Unit the density is expressed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_units: Option<String>,
    /// Number of items of the medium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<u32>,
    /// Methods used to write to the medium
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medium_format: Vec<MediumFormatCode>,
    /// Description of other limitations or requirements for using the medium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_note: Option<String>,
    /// Identifier of the medium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
}

impl Medium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: Citation) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the recording density; the standard requires it to be positive.
    pub fn try_with_density(mut self, density: f64) -> ModelResult<Self> {
        if density <= 0.0 {
            return Err(ModelError::NonPositiveMeasure {
                entity: "Medium",
                field: "density",
                value: density,
            });
        }
        self.density = Some(density);
        Ok(self)
    }

    /// Set the number of medium items; the standard requires at least one.
    pub fn try_with_volumes(mut self, volumes: u32) -> ModelResult<Self> {
        if volumes == 0 {
            return Err(ModelError::NonPositiveCount {
                entity: "Medium",
                field: "volumes",
                value: u64::from(volumes),
            });
        }
        self.volumes = Some(volumes);
        Ok(self)
    }
}

/// Format in which a resource is issued (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    /// Citation of the format specification, carrying name and version
    pub format_specification_citation: Citation,
    /// Amendment number of the format version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amendment_number: Option<String>,
    /// Recommended technique for decompressing the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_decompression_technique: Option<String>,
    /// Media the resource is available on in this format
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medium: Vec<Medium>,
    /// Distributors offering the resource in this format
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub format_distributor: Vec<Distributor>,
}

impl Format {
    pub fn new(format_specification_citation: Citation) -> Self {
        Self {
            format_specification_citation,
            amendment_number: None,
            file_decompression_technique: None,
            medium: Vec::new(),
            format_distributor: Vec::new(),
        }
    }

    /// A format cited by name only, the common case for well-known formats.
    pub fn named(name: String) -> Self {
        Self::new(Citation::new(name))
    }

    pub fn with_format_distributor(mut self, distributor: Distributor) -> Self {
        self.format_distributor.push(distributor);
        self
    }
}

/// Description of a transfer data file (ISO 19115-2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataFile {
    /// Name of the file
    pub file_name: String,
    /// Textual description of the file
    pub file_description: String,
    /// Format in which the file is encoded, e.g. a file suffix
    pub file_type: String,
    /// Feature types carried in the file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_types: Vec<GenericName>,
}

impl DataFile {
    pub fn new(file_name: String, file_description: String, file_type: String) -> Self {
        Self {
            file_name,
            file_description,
            file_type,
            feature_types: Vec::new(),
        }
    }
}

/// How and when a resource can be ordered (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandardOrderProcess {
    /// Fees and terms for retrieving the resource, including the currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<String>,
    /// Date and time when the resource will be available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_available_date_time: Option<DateTime<Utc>>,
    /// Instructions on how to order the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering_instructions: Option<String>,
    /// Typical turnaround time for filling an order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnaround: Option<String>,
    /// Structure of the ordering options record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_options_type: Option<RecordType>,
    /// Ordering options offered by the distributor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_options: Option<Record>,
}

impl StandardOrderProcess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fees(mut self, fees: String) -> Self {
        self.fees = Some(fees);
        self
    }
}

/// Party from which a resource can be obtained (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Distributor {
    /// Contact for the party distributing the resource
    pub distributor_contact: Responsibility,
    /// Ordering terms offered by this distributor
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distribution_order_process: Vec<StandardOrderProcess>,
    /// Formats this distributor issues the resource in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distributor_format: Vec<Format>,
    /// Transfer channels this distributor offers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distributor_transfer_options: Vec<DigitalTransferOptions>,
}

impl Distributor {
    pub fn new(distributor_contact: Responsibility) -> Self {
        Self {
            distributor_contact,
            distribution_order_process: Vec::new(),
            distributor_format: Vec::new(),
            distributor_transfer_options: Vec::new(),
        }
    }
}

/// How a resource is distributed (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    /// General description of the distribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Formats the resource is issued in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distribution_format: Vec<Format>,
    /// Parties distributing the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distributor: Vec<Distributor>,
    /// Channels the resource can be obtained over
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transfer_options: Vec<DigitalTransferOptions>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distribution_format(mut self, format: Format) -> Self {
        self.distribution_format.push(format);
        self
    }

    pub fn with_distributor(mut self, distributor: Distributor) -> Self {
        self.distributor.push(distributor);
        self
    }
}

/// Means and media by which a resource is obtained (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DigitalTransferOptions {
    /// Tiles, layers, geographic areas or other units the resource is split
    /// into for distribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_of_distribution: Option<String>,
    /// Estimated size of one unit in the transfer format, in megabytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_size: Option<f64>,
    /// Online sources the resource can be obtained from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_line: Vec<OnlineResource>,
    /// Offline media the resource can be obtained on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub off_line: Vec<Medium>,
    /// Rate of occurrence of the distribution
    #[serde(
        default,
        with = "duration_option_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_frequency: Option<Duration>,
    /// Formats offered over these channels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distribution_format: Vec<Format>,
}

impl DigitalTransferOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_line(mut self, resource: OnlineResource) -> Self {
        self.on_line.push(resource);
        self
    }

    /// Set the unit transfer size; the standard requires it to be positive.
    pub fn try_with_transfer_size(mut self, megabytes: f64) -> ModelResult<Self> {
        if megabytes <= 0.0 {
            return Err(ModelError::NonPositiveMeasure {
                entity: "DigitalTransferOptions",
                field: "transfer_size",
                value: megabytes,
            });
        }
        self.transfer_size = Some(megabytes);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::CodeList;

    #[test]
    fn test_medium_format_tokens() {
        assert_eq!(MediumFormatCode::Iso9660AppleHfs.token(), "iso9660AppleHFS");
        assert_eq!(
            MediumFormatCode::from_token("highSierra"),
            Some(MediumFormatCode::HighSierra)
        );
        assert_eq!(MediumFormatCode::all().len(), 7);
    }

    #[test]
    fn test_medium_rejects_nonpositive_density() {
        let error = Medium::new().try_with_density(0.0).unwrap_err();
        assert_eq!(
            error,
            ModelError::NonPositiveMeasure {
                entity: "Medium",
                field: "density",
                value: 0.0,
            }
        );

        let medium = Medium::new()
            .try_with_density(1.44)
            .unwrap()
            .try_with_volumes(2)
            .unwrap();
        assert_eq!(medium.volumes, Some(2));
    }

    #[test]
    fn test_transfer_options_duration_as_seconds() {
        let mut options = DigitalTransferOptions::new()
            .try_with_transfer_size(250.0)
            .unwrap();
        options.transfer_frequency = Some(Duration::try_days(7).unwrap());

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["transferFrequency"], 604_800);
        assert_eq!(json["transferSize"], 250.0);

        let back: DigitalTransferOptions = serde_json::from_value(json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_format_cited_by_name() {
        let format = Format::named("GeoTIFF".to_string());
        let json = serde_json::to_value(&format).unwrap();
        assert_eq!(json["formatSpecificationCitation"]["title"], "GeoTIFF");
        assert!(json.get("medium").is_none());
    }
}
