mod bank_account;
mod bank_transaction;
mod contact;
mod line_item;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use bank_account::BankAccount;
pub use bank_transaction::BankTransaction;
pub use contact::{Contact, ContactStatus};
pub use line_item::LineItem;

/// Direction and nature of a bank transaction.
///
/// The platform is the authority on which codes it accepts; codes this crate does not know are
/// kept verbatim in `Other` so a response is never rejected over one record.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum BankTransactionType {
    Receive,
    ReceiveOverpayment,
    ReceivePrepayment,
    Spend,
    SpendOverpayment,
    SpendPrepayment,
    ReceiveTransfer,
    SpendTransfer,
    #[serde(untagged)]
    Other(String)
}

impl BankTransactionType {
    pub const ALL: [BankTransactionType; 8] = [
        BankTransactionType::Receive,
        BankTransactionType::ReceiveOverpayment,
        BankTransactionType::ReceivePrepayment,
        BankTransactionType::Spend,
        BankTransactionType::SpendOverpayment,
        BankTransactionType::SpendPrepayment,
        BankTransactionType::ReceiveTransfer,
        BankTransactionType::SpendTransfer
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BankTransactionType::Receive => "RECEIVE",
            BankTransactionType::ReceiveOverpayment => "RECEIVE-OVERPAYMENT",
            BankTransactionType::ReceivePrepayment => "RECEIVE-PREPAYMENT",
            BankTransactionType::Spend => "SPEND",
            BankTransactionType::SpendOverpayment => "SPEND-OVERPAYMENT",
            BankTransactionType::SpendPrepayment => "SPEND-PREPAYMENT",
            BankTransactionType::ReceiveTransfer => "RECEIVE-TRANSFER",
            BankTransactionType::SpendTransfer => "SPEND-TRANSFER",
            BankTransactionType::Other(code) => code
        }
    }

    /// Transfer legs are created through bank transfers and can only be read through this resource.
    pub fn get_only(&self) -> bool {
        matches!(self, BankTransactionType::ReceiveTransfer | BankTransactionType::SpendTransfer)
    }
}

impl Display for BankTransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankTransactionStatus {
    Authorised,
    Deleted,
    #[serde(untagged)]
    Other(String)
}

impl BankTransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BankTransactionStatus::Authorised => "AUTHORISED",
            BankTransactionStatus::Deleted => "DELETED",
            BankTransactionStatus::Other(code) => code
        }
    }
}

impl Display for BankTransactionStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// How line amounts treat tax. Amounts are tax exclusive when unspecified.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LineAmountType {
    Exclusive,
    Inclusive,
    NoTax
}

impl LineAmountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineAmountType::Exclusive => "Exclusive",
            LineAmountType::Inclusive => "Inclusive",
            LineAmountType::NoTax => "NoTax"
        }
    }
}
