use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BankAccount, BankTransactionStatus, BankTransactionType, Contact, LineAmountType, LineItem};
use crate::remote::{missing_properties, ApiStem, Method, Property, Resource, Schema, TypeHint};
use crate::types::date::{date_option, timestamp_option};
use crate::types::{Guid, Monetary};

const PROPERTIES: &[Property] = &[
    Property::required("Type", None),
    Property::required("Contact", Some(TypeHint::Contact)),
    Property::required("Lineitems", Some(TypeHint::LineItem)),
    Property::required("BankAccount", Some(TypeHint::BankAccount)),
    Property::optional("IsReconciled", None),
    Property::optional("Date", Some(TypeHint::DateTime)),
    Property::optional("Reference", None),
    Property::optional("CurrencyCode", None),
    Property::optional("CurrencyRate", None),
    Property::optional("Url", None),
    Property::optional("Status", None),
    Property::optional("LineAmountTypes", None),
    Property::optional("SubTotal", None),
    Property::optional("TotalTax", None),
    Property::optional("Total", None),
    Property::optional("BankTransactionID", None),
    Property::optional("UpdatedDateUTC", Some(TypeHint::DateTime)),
    Property::optional("HasAttachments", None),
];

/// A spend or receive money transaction posted against a bank account.
///
/// Every field is absent until set or decoded. The platform assigns `BankTransactionID` and
/// computes the totals; they are only set locally when hydrating from a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankTransaction {
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    transaction_type: Option<BankTransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact: Option<Contact>,
    #[serde(rename = "LineItems", alias = "Lineitems", default, skip_serializing_if = "Vec::is_empty")]
    line_items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank_account: Option<BankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_reconciled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "date_option")]
    date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    currency_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<BankTransactionStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "line_amount_types")]
    line_amount_types: Vec<LineAmountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub_total: Option<Monetary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_tax: Option<Monetary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total: Option<Monetary>,
    #[serde(rename = "BankTransactionID", default, skip_serializing_if = "Option::is_none")]
    bank_transaction_id: Option<Guid>,
    #[serde(rename = "UpdatedDateUTC", default, skip_serializing_if = "Option::is_none", with = "timestamp_option")]
    updated_date_utc: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_attachments: Option<bool>
}

impl BankTransaction {
    /// Creates an empty transaction, ready to be populated and submitted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction_type(&self) -> Option<&BankTransactionType> {
        self.transaction_type.as_ref()
    }

    pub fn set_transaction_type(&mut self, value: BankTransactionType) -> &mut Self {
        self.transaction_type = Some(value);
        self
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    pub fn set_contact(&mut self, value: Contact) -> &mut Self {
        self.contact = Some(value);
        self
    }

    /// Line items in the order they were added.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn add_line_item(&mut self, value: LineItem) -> &mut Self {
        self.line_items.push(value);
        self
    }

    pub fn bank_account(&self) -> Option<&BankAccount> {
        self.bank_account.as_ref()
    }

    pub fn set_bank_account(&mut self, value: BankAccount) -> &mut Self {
        self.bank_account = Some(value);
        self
    }

    pub fn is_reconciled(&self) -> Option<bool> {
        self.is_reconciled
    }

    pub fn set_is_reconciled(&mut self, value: bool) -> &mut Self {
        self.is_reconciled = Some(value);
        self
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn set_date(&mut self, value: NaiveDate) -> &mut Self {
        self.date = Some(value);
        self
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn set_reference(&mut self, value: impl Into<String>) -> &mut Self {
        self.reference = Some(value.into());
        self
    }

    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    pub fn set_currency_code(&mut self, value: impl Into<String>) -> &mut Self {
        self.currency_code = Some(value.into());
        self
    }

    /// Rate to the base currency, only meaningful for foreign currency transactions. When unset
    /// the platform applies the organisation's preferred or daily rate.
    pub fn currency_rate(&self) -> Option<Decimal> {
        self.currency_rate
    }

    pub fn set_currency_rate(&mut self, value: Decimal) -> &mut Self {
        self.currency_rate = Some(value);
        self
    }

    /// Link to the source document.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, value: impl Into<String>) -> &mut Self {
        self.url = Some(value.into());
        self
    }

    pub fn status(&self) -> Option<&BankTransactionStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, value: BankTransactionStatus) -> &mut Self {
        self.status = Some(value);
        self
    }

    pub fn line_amount_types(&self) -> &[LineAmountType] {
        &self.line_amount_types
    }

    pub fn add_line_amount_type(&mut self, value: LineAmountType) -> &mut Self {
        self.line_amount_types.push(value);
        self
    }

    pub fn sub_total(&self) -> Option<Monetary> {
        self.sub_total
    }

    pub fn set_sub_total(&mut self, value: Monetary) -> &mut Self {
        self.sub_total = Some(value);
        self
    }

    pub fn total_tax(&self) -> Option<Monetary> {
        self.total_tax
    }

    pub fn set_total_tax(&mut self, value: Monetary) -> &mut Self {
        self.total_tax = Some(value);
        self
    }

    pub fn total(&self) -> Option<Monetary> {
        self.total
    }

    pub fn set_total(&mut self, value: Monetary) -> &mut Self {
        self.total = Some(value);
        self
    }

    pub fn bank_transaction_id(&self) -> Option<&str> {
        self.bank_transaction_id.as_deref()
    }

    pub fn set_bank_transaction_id(&mut self, value: impl Into<Guid>) -> &mut Self {
        self.bank_transaction_id = Some(value.into());
        self
    }

    pub fn updated_date_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_date_utc
    }

    pub fn set_updated_date_utc(&mut self, value: DateTime<Utc>) -> &mut Self {
        self.updated_date_utc = Some(value);
        self
    }

    pub fn has_attachments(&self) -> Option<bool> {
        self.has_attachments
    }

    pub fn set_has_attachments(&mut self, value: bool) -> &mut Self {
        self.has_attachments = Some(value);
        self
    }
}

impl Schema for BankTransaction {
    fn properties() -> &'static [Property] {
        PROPERTIES
    }

    fn has_property(&self, name: &str) -> bool {
        match name {
            "Type" => self.transaction_type.is_some(),
            "Contact" => self.contact.is_some(),
            "Lineitems" => !self.line_items.is_empty(),
            "BankAccount" => self.bank_account.is_some(),
            "IsReconciled" => self.is_reconciled.is_some(),
            "Date" => self.date.is_some(),
            "Reference" => self.reference.is_some(),
            "CurrencyCode" => self.currency_code.is_some(),
            "CurrencyRate" => self.currency_rate.is_some(),
            "Url" => self.url.is_some(),
            "Status" => self.status.is_some(),
            "LineAmountTypes" => !self.line_amount_types.is_empty(),
            "SubTotal" => self.sub_total.is_some(),
            "TotalTax" => self.total_tax.is_some(),
            "Total" => self.total.is_some(),
            "BankTransactionID" => self.bank_transaction_id.is_some(),
            "UpdatedDateUTC" => self.updated_date_utc.is_some(),
            "HasAttachments" => self.has_attachments.is_some(),
            _ => false
        }
    }

    //NOTE: the contact and bank account are references to existing records, so only line items
    //      are checked for their own mandatory properties
    fn missing_nested_properties(&self) -> Vec<String> {
        self.line_items
            .iter()
            .enumerate()
            .flat_map(|(index, line_item)| {
                missing_properties(line_item).into_iter().map(move |name| format!("Lineitems[{index}].{name}"))
            })
            .collect()
    }
}

impl Resource for BankTransaction {
    fn resource_uri() -> &'static str {
        "BankTransactions"
    }

    fn root_node_name() -> &'static str {
        "BankTransaction"
    }

    fn guid_property() -> &'static str {
        "BankTransactionID"
    }

    fn api_stem() -> ApiStem {
        ApiStem::Core
    }

    fn supported_methods() -> &'static [Method] {
        &[Method::Get, Method::Put, Method::Post]
    }

    fn guid(&self) -> Option<&str> {
        self.bank_transaction_id()
    }
}

/// `LineAmountTypes` arrives as a single string; a list is also accepted and `null` reads as empty.
/// One entry is written back as a single string.
mod line_amount_types {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::models::LineAmountType;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(LineAmountType),
        Many(Vec<LineAmountType>)
    }

    pub fn serialize<S>(value: &[LineAmountType], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            [single] => single.serialize(serializer),
            many => many.serialize(serializer)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<LineAmountType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<OneOrMany>::deserialize(deserializer)? {
            Some(OneOrMany::One(value)) => Ok(vec![value]),
            Some(OneOrMany::Many(values)) => Ok(values),
            None => Ok(Vec::new())
        }
    }
}
