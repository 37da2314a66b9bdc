use crate::remote::{Method, Resource};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Method [{method}] is not supported by resource [{resource}]")]
    UnsupportedMethod {
        resource: &'static str,
        method: Method
    },
    #[error("Resource [{resource}] is missing mandatory properties: {properties:?}")]
    MissingProperties {
        resource: &'static str,
        properties: Vec<String>
    },
    #[error("Response does not contain a [{resource}] collection")]
    MissingCollection {
        resource: &'static str
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error)
}

impl RemoteError {
    pub fn unsupported_method<R: Resource>(method: Method) -> Self {
        Self::UnsupportedMethod { resource: R::resource_uri(), method }
    }

    pub fn missing_properties<R: Resource>(properties: Vec<String>) -> Self {
        Self::MissingProperties { resource: R::root_node_name(), properties }
    }

    pub fn missing_collection<R: Resource>() -> Self {
        Self::MissingCollection { resource: R::resource_uri() }
    }
}
