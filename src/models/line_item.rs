use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::remote::{Property, Schema};
use crate::types::{Guid, Monetary};

const PROPERTIES: &[Property] = &[
    Property::required("Description", None),
    Property::optional("Quantity", None),
    Property::optional("UnitAmount", None),
    Property::optional("AccountCode", None),
    Property::optional("ItemCode", None),
    Property::optional("LineItemID", None),
    Property::optional("TaxType", None),
    Property::optional("TaxAmount", None),
    Property::optional("LineAmount", None),
];

/// One line of a bank transaction.
///
/// `LineAmount` is `Quantity * UnitAmount` as computed by the platform; it is never derived here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    quantity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit_amount: Option<Monetary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    item_code: Option<String>,
    #[serde(rename = "LineItemID", default, skip_serializing_if = "Option::is_none")]
    line_item_id: Option<Guid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tax_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tax_amount: Option<Monetary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    line_amount: Option<Monetary>
}

impl LineItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: impl Into<String>) -> &mut Self {
        self.description = Some(value.into());
        self
    }

    pub fn quantity(&self) -> Option<Decimal> {
        self.quantity
    }

    pub fn set_quantity(&mut self, value: Decimal) -> &mut Self {
        self.quantity = Some(value);
        self
    }

    pub fn unit_amount(&self) -> Option<Monetary> {
        self.unit_amount
    }

    pub fn set_unit_amount(&mut self, value: Monetary) -> &mut Self {
        self.unit_amount = Some(value);
        self
    }

    pub fn account_code(&self) -> Option<&str> {
        self.account_code.as_deref()
    }

    pub fn set_account_code(&mut self, value: impl Into<String>) -> &mut Self {
        self.account_code = Some(value.into());
        self
    }

    pub fn item_code(&self) -> Option<&str> {
        self.item_code.as_deref()
    }

    pub fn set_item_code(&mut self, value: impl Into<String>) -> &mut Self {
        self.item_code = Some(value.into());
        self
    }

    pub fn line_item_id(&self) -> Option<&str> {
        self.line_item_id.as_deref()
    }

    pub fn set_line_item_id(&mut self, value: impl Into<Guid>) -> &mut Self {
        self.line_item_id = Some(value.into());
        self
    }

    pub fn tax_type(&self) -> Option<&str> {
        self.tax_type.as_deref()
    }

    pub fn set_tax_type(&mut self, value: impl Into<String>) -> &mut Self {
        self.tax_type = Some(value.into());
        self
    }

    pub fn tax_amount(&self) -> Option<Monetary> {
        self.tax_amount
    }

    pub fn set_tax_amount(&mut self, value: Monetary) -> &mut Self {
        self.tax_amount = Some(value);
        self
    }

    pub fn line_amount(&self) -> Option<Monetary> {
        self.line_amount
    }

    pub fn set_line_amount(&mut self, value: Monetary) -> &mut Self {
        self.line_amount = Some(value);
        self
    }
}

impl Schema for LineItem {
    fn properties() -> &'static [Property] {
        PROPERTIES
    }

    fn has_property(&self, name: &str) -> bool {
        match name {
            "Description" => self.description.is_some(),
            "Quantity" => self.quantity.is_some(),
            "UnitAmount" => self.unit_amount.is_some(),
            "AccountCode" => self.account_code.is_some(),
            "ItemCode" => self.item_code.is_some(),
            "LineItemID" => self.line_item_id.is_some(),
            "TaxType" => self.tax_type.is_some(),
            "TaxAmount" => self.tax_amount.is_some(),
            "LineAmount" => self.line_amount.is_some(),
            _ => false
        }
    }
}
