//! The surface a transport layer consumes from resource models.
//!
//! Models describe themselves through [`Schema`] and [`Resource`]; everything in this module is
//! generic over those traits so a single codec serves every resource type.

mod envelope;
mod errors;
mod schema;
mod url;

use std::fmt;
use std::fmt::{Display, Formatter};

use tracing::error;

pub use envelope::{decode, encode};
pub use errors::RemoteError;
pub use schema::{missing_properties, validate, Property, Schema, TypeHint};
pub use url::{resource_path, ApiStem};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE"
        }
    }
}

impl Display for Method {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A top-level resource addressable through its own endpoint.
pub trait Resource: Schema {
    /// Endpoint path segment, e.g. `BankTransactions`.
    fn resource_uri() -> &'static str;

    /// Wire root element name, e.g. `BankTransaction`.
    fn root_node_name() -> &'static str;

    /// Name of the property holding the platform-assigned identifier.
    fn guid_property() -> &'static str;

    fn api_stem() -> ApiStem;

    fn supported_methods() -> &'static [Method];

    /// The platform-assigned identifier, once the record exists remotely.
    fn guid(&self) -> Option<&str>;

    fn supports(method: Method) -> bool {
        Self::supported_methods().contains(&method)
    }
}

/// Refuses any verb the resource does not declare, before a request is built.
pub fn ensure_supported<R: Resource>(method: Method) -> Result<(), RemoteError> {
    if R::supports(method) {
        return Ok(())
    }

    error!("Method [{method}] rejected for resource [{}]", R::resource_uri());

    Err(RemoteError::unsupported_method::<R>(method))
}
