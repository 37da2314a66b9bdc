pub mod date;
mod errors;
mod monetary;
#[cfg(test)]
mod tests;

pub use errors::{DateError, MonetaryError};
pub use monetary::Monetary;

/// Platform-assigned identifier of a record, e.g. `BankTransactionID`.
pub type Guid = String;
