use serde::{Deserialize, Serialize};

use crate::remote::{ApiStem, Method, Property, Resource, Schema};
use crate::types::Guid;

const PROPERTIES: &[Property] = &[
    Property::optional("ContactID", None),
    Property::required("Name", None),
    Property::optional("FirstName", None),
    Property::optional("LastName", None),
    Property::optional("EmailAddress", None),
    Property::optional("ContactStatus", None),
];

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    Active,
    Archived,
    #[serde(rename = "GDPRREQUEST")]
    GdprRequest,
    #[serde(untagged)]
    Other(String)
}

/// A customer or supplier. Bank transactions reference one as their counterparty; only the
/// identifying details are modelled here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(rename = "ContactID", default, skip_serializing_if = "Option::is_none")]
    contact_id: Option<Guid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact_status: Option<ContactStatus>
}

impl Contact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact_id(&self) -> Option<&str> {
        self.contact_id.as_deref()
    }

    pub fn set_contact_id(&mut self, value: impl Into<Guid>) -> &mut Self {
        self.contact_id = Some(value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.name = Some(value.into());
        self
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    pub fn set_email_address(&mut self, value: impl Into<String>) -> &mut Self {
        self.email_address = Some(value.into());
        self
    }

    pub fn contact_status(&self) -> Option<&ContactStatus> {
        self.contact_status.as_ref()
    }

    pub fn set_contact_status(&mut self, value: ContactStatus) -> &mut Self {
        self.contact_status = Some(value);
        self
    }
}

impl Schema for Contact {
    fn properties() -> &'static [Property] {
        PROPERTIES
    }

    fn has_property(&self, name: &str) -> bool {
        match name {
            "ContactID" => self.contact_id.is_some(),
            "Name" => self.name.is_some(),
            "FirstName" => self.first_name.is_some(),
            "LastName" => self.last_name.is_some(),
            "EmailAddress" => self.email_address.is_some(),
            "ContactStatus" => self.contact_status.is_some(),
            _ => false
        }
    }
}

impl Resource for Contact {
    fn resource_uri() -> &'static str {
        "Contacts"
    }

    fn root_node_name() -> &'static str {
        "Contact"
    }

    fn guid_property() -> &'static str {
        "ContactID"
    }

    fn api_stem() -> ApiStem {
        ApiStem::Core
    }

    fn supported_methods() -> &'static [Method] {
        &[Method::Get, Method::Put, Method::Post]
    }

    fn guid(&self) -> Option<&str> {
        self.contact_id()
    }
}
