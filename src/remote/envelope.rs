use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::remote::{RemoteError, Resource};

/// Wraps resources in the collection envelope used for writes: `{"<resource_uri>": [...]}`.
pub fn encode<R: Resource + Serialize>(resources: &[R]) -> Result<String, RemoteError> {
    let mut envelope = Map::new();
    envelope.insert(R::resource_uri().to_string(), serde_json::to_value(resources)?);

    debug!("Encoded {} [{}] resources", resources.len(), R::root_node_name());

    Ok(serde_json::to_string(&Value::Object(envelope))?)
}

/// Reads resources from a response body.
///
/// The collection under `resource_uri()` is preferred; a single object under `root_node_name()`
/// is accepted as a one-element collection. Other top-level keys (status, ids) are ignored.
pub fn decode<R: Resource + DeserializeOwned>(body: &str) -> Result<Vec<R>, RemoteError> {
    let mut envelope: Map<String, Value> = serde_json::from_str(body)?;

    if let Some(collection) = envelope.remove(R::resource_uri()) {
        let resources: Vec<R> = serde_json::from_value(collection)?;
        debug!("Decoded {} [{}] resources", resources.len(), R::root_node_name());
        return Ok(resources)
    }

    if let Some(single) = envelope.remove(R::root_node_name()) {
        debug!("Decoded a single [{}] resource", R::root_node_name());
        return Ok(vec![serde_json::from_value(single)?])
    }

    Err(RemoteError::missing_collection::<R>())
}
