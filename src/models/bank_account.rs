use serde::{Deserialize, Serialize};

use crate::remote::{Property, Schema};
use crate::types::Guid;

const PROPERTIES: &[Property] = &[
    Property::optional("Code", None),
    Property::optional("AccountID", None),
    Property::optional("Name", None),
];

/// Reference to the bank account a transaction is posted against. Either `Code` or `AccountID`
/// identifies it on writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(rename = "AccountID", default, skip_serializing_if = "Option::is_none")]
    account_id: Option<Guid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>
}

impl BankAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn set_code(&mut self, value: impl Into<String>) -> &mut Self {
        self.code = Some(value.into());
        self
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn set_account_id(&mut self, value: impl Into<Guid>) -> &mut Self {
        self.account_id = Some(value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.name = Some(value.into());
        self
    }
}

impl Schema for BankAccount {
    fn properties() -> &'static [Property] {
        PROPERTIES
    }

    fn has_property(&self, name: &str) -> bool {
        match name {
            "Code" => self.code.is_some(),
            "AccountID" => self.account_id.is_some(),
            "Name" => self.name.is_some(),
            _ => false
        }
    }
}
