use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 4;
const DISPLAY_PLACES: u32 = 2;

/// A monetary amount as exchanged with the accounting platform.
///
/// Amounts carry at most four decimal places (unit amounts may use four, totals use two).
/// On the wire they are JSON numbers; numeric strings are accepted when reading. Both forms go
/// through the same parser, so excess precision is rejected rather than rounded.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    /// Wraps a decimal, rejecting values with more precision than the platform stores.
    pub fn new(value: Decimal) -> Result<Self, MonetaryError> {
        if value.scale() > DECIMAL_PLACES {
            return Err(MonetaryError::InvalidFormat(format!("Value {value} has too many decimal places")));
        }

        Ok(Monetary(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let places = self.0.scale().max(DISPLAY_PLACES) as usize;
        write!(formatter, "{:.places$}", self.0)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str_exact(value).map_err(|error| match error {
            rust_decimal::Error::ExceedsMaximumPossibleValue
            | rust_decimal::Error::LessThanMinimumPossibleValue => MonetaryError::Overflow,
            error => MonetaryError::InvalidFormat(format!("Value [{value}] is not a decimal: {error}"))
        })?;

        Monetary::new(decimal)
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

struct MonetaryVisitor;

impl de::Visitor<'_> for MonetaryVisitor {
    type Value = Monetary;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a monetary amount as a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Monetary::new(Decimal::from(value)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Monetary::new(Decimal::from(value)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        //NOTE: f64 Display prints the shortest text that reads back as the same float, which is the
        //      number's JSON text for any amount within f64 precision
        Monetary::from_str(&value.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Monetary::from_str(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MonetaryVisitor)
    }
}
