//! Service metadata
//!
//! Identification of capabilities a service provider makes available through
//! a set of operations, and how those operations couple to the datasets they
//! act on (ISO 19115-1, drawing on ISO 19119).

use serde::{Deserialize, Serialize};

use super::citation::{Citation, OnlineResource};
use super::distribution::StandardOrderProcess;
use super::identification::{DataIdentification, Identification};
use super::naming::{GenericName, MemberName, ScopedName};
use crate::vocabulary::code_list;

code_list! {
    /// Type of coupling between a service and its data (ISO 19115-1)
    pub enum CouplingType {
        Loose => "loose",
        Mixed => "mixed",
        Tight => "tight",
    }
}

code_list! {
    /// Distributed computing platform an operation is implemented on
    /// (ISO 19115-1)
    pub enum DcpList {
        Xml => "XML",
        Corba => "CORBA",
        Java => "JAVA",
        Com => "COM",
        Sql => "SQL",
        Soap => "SOAP",
        Z3950 => "Z3950",
        Http => "HTTP",
        Ftp => "FTP",
        WebServices => "WebServices",
    }
}

code_list! {
    /// Whether a parameter carries data into or out of an operation
    /// (ISO 19115-1)
    pub enum ParameterDirection {
        In => "in",
        Out => "out",
        InOut => "in/out",
    }
}

/// One parameter required by a service operation (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceParameter {
    /// Name and value type of the parameter
    pub name: MemberName,
    /// Direction the parameter carries data in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<ParameterDirection>,
    /// Narrative explanation of the role of the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter may be omitted
    pub optionality: bool,
    /// Whether the parameter may be repeated
    pub repeatability: bool,
}

impl ServiceParameter {
    pub fn new(name: MemberName, optionality: bool, repeatability: bool) -> Self {
        Self {
            name,
            direction: None,
            description: None,
            optionality,
            repeatability,
        }
    }

    pub fn with_direction(mut self, direction: ParameterDirection) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// Signature of one method provided by a service (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationMetadata {
    /// Unique identifier for the interface
    pub operation_name: String,
    /// Distributed computing platforms the operation is implemented on
    pub distributed_computing_platform: Vec<DcpList>,
    /// Free-text description of the intent and results of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_description: Option<String>,
    /// Name used to invoke the interface, identical across platforms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_name: Option<String>,
    /// Handles for accessing the service interface
    pub connect_point: Vec<OnlineResource>,
    /// Parameters required by the interface
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter: Vec<ServiceParameter>,
    /// Operations that must complete immediately before this one is invoked
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<OperationMetadata>,
}

impl OperationMetadata {
    pub fn new(
        operation_name: String,
        distributed_computing_platform: Vec<DcpList>,
        connect_point: Vec<OnlineResource>,
    ) -> Self {
        Self {
            operation_name,
            distributed_computing_platform,
            operation_description: None,
            invocation_name: None,
            connect_point,
            parameter: Vec::new(),
            depends_on: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: ServiceParameter) -> Self {
        self.parameter.push(parameter);
        self
    }

    pub fn with_depends_on(mut self, operation: OperationMetadata) -> Self {
        self.depends_on.push(operation);
        self
    }
}

/// An ordered chain of operations offered by the service (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationChainMetadata {
    /// Name the service uses for this chain
    pub name: String,
    /// Narrative explanation of the chain and its resulting output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operations making up the chain
    pub operation: Vec<OperationMetadata>,
}

impl OperationChainMetadata {
    pub fn new(name: String, operation: Vec<OperationMetadata>) -> Self {
        Self {
            name,
            description: None,
            operation,
        }
    }
}

/// Link between an operation and the dataset it acts on (ISO 19115-1)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoupledResource {
    /// Name of the resource as the service instance uses it, e.g. a layer
    /// name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoped_name: Option<ScopedName>,
    /// References to the dataset the service operates on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_reference: Vec<Citation>,
    /// The operation being coupled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<OperationMetadata>,
    /// Identification of the coupled data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<DataIdentification>,
}

impl CoupledResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoped_name(mut self, scoped_name: ScopedName) -> Self {
        self.scoped_name = Some(scoped_name);
        self
    }
}

/// Identification of the capabilities a service provider makes available
/// (ISO 19115-1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIdentification {
    /// Shared identification properties
    #[serde(flatten)]
    pub identification: Identification,
    /// Kind of service, e.g. `"discovery"`, `"view"` or `"download"`
    pub service_type: GenericName,
    /// Versions of the service type, for version-aware searching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_type_version: Vec<String>,
    /// Availability of the service, including fees and ordering instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_properties: Option<StandardOrderProcess>,
    /// Coupling between the service and its data; expected whenever coupled
    /// resources are given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupling_type: Option<CouplingType>,
    /// Data coupling details for tightly coupled services
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coupled_resource: Vec<CoupledResource>,
    /// References to the datasets the service operates on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operated_dataset: Vec<Citation>,
    /// Profiles to which the service adheres
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<Citation>,
    /// Standards to which the service adheres
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_standard: Vec<Citation>,
    /// Operations provided by the service
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains_operations: Vec<OperationMetadata>,
    /// Identification of the data the service operates on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operates_on: Vec<DataIdentification>,
    /// Operation chains provided by the service
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains_chain: Vec<OperationChainMetadata>,
}

impl ServiceIdentification {
    pub fn new(citation: Citation, abstract_text: String, service_type: GenericName) -> Self {
        Self {
            identification: Identification::new(citation, abstract_text),
            service_type,
            service_type_version: Vec::new(),
            access_properties: None,
            coupling_type: None,
            coupled_resource: Vec::new(),
            operated_dataset: Vec::new(),
            profile: Vec::new(),
            service_standard: Vec::new(),
            contains_operations: Vec::new(),
            operates_on: Vec::new(),
            contains_chain: Vec::new(),
        }
    }

    pub fn with_coupling(mut self, coupling_type: CouplingType) -> Self {
        self.coupling_type = Some(coupling_type);
        self
    }

    pub fn with_coupled_resource(mut self, resource: CoupledResource) -> Self {
        self.coupled_resource.push(resource);
        self
    }

    pub fn with_operation(mut self, operation: OperationMetadata) -> Self {
        self.contains_operations.push(operation);
        self
    }
}
