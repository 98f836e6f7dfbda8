//! Helpers shared by the models to pull typed values out of a copy of an
//! incoming mapping.

use crate::error::{ClientError, ClientResult};
use crate::models::extra_fields::ExtraFields;
use crate::models::model::Model;
use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};
use uuid::Uuid;

pub type Fields = IndexMap<String, Value>;

/// Copies `map` so that keys can be taken out without touching the caller's
/// mapping. Order is kept for whatever ends up as extra fields.
pub fn copy_fields(map: &Map<String, Value>) -> Fields {
    map.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

pub fn take_required(fields: &mut Fields, key: &str) -> ClientResult<Value> {
    fields
        .shift_remove(key)
        .ok_or_else(|| ClientError::missing_field(key))
}

/// `None` only when the key is absent; an explicit `null` comes back as
/// `Some(Value::Null)` so it can be written out again.
pub fn take_optional(fields: &mut Fields, key: &str) -> Option<Value> {
    fields.shift_remove(key)
}

pub fn take_string(fields: &mut Fields, key: &str) -> ClientResult<String> {
    match take_required(fields, key)? {
        Value::String(s) => Ok(s),
        _ => Err(ClientError::invalid_field(key, "a string")),
    }
}

pub fn take_uuid(fields: &mut Fields, key: &str) -> ClientResult<Uuid> {
    match take_required(fields, key)? {
        Value::String(s) => {
            Uuid::parse_str(&s).map_err(|_| ClientError::invalid_field(key, "a UUID string"))
        }
        _ => Err(ClientError::invalid_field(key, "a UUID string")),
    }
}

/// Absent gives `None`, `null` gives `Some(None)`.
pub fn take_nullable_u64(fields: &mut Fields, key: &str) -> ClientResult<Option<Option<u64>>> {
    match take_optional(fields, key) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(value) => value
            .as_u64()
            .map(|n| Some(Some(n)))
            .ok_or_else(|| ClientError::invalid_field(key, "an unsigned integer")),
    }
}

/// Takes a nested model stored under `key`, delegating to its own
/// `from_map`.
pub fn take_model<M>(fields: &mut Fields, key: &str) -> ClientResult<M>
where
    M: Model,
{
    match take_required(fields, key)? {
        Value::Object(map) => M::from_map(&map),
        _ => Err(ClientError::invalid_field(key, "an object")),
    }
}

/// Absent gives `None`, `null` gives `Some(None)`.
pub fn take_nullable_model<M>(fields: &mut Fields, key: &str) -> ClientResult<Option<Option<M>>>
where
    M: Model,
{
    match take_optional(fields, key) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::Object(map)) => M::from_map(&map).map(|model| Some(Some(model))),
        Some(_) => Err(ClientError::invalid_field(key, "an object")),
    }
}

/// Whatever is left after the named fields were taken.
pub fn into_extra_fields(fields: Fields, model: &str) -> ExtraFields {
    if !fields.is_empty() {
        debug!(
            "{}: retaining {} unknown field(s): {:?}",
            model,
            fields.len(),
            fields.keys().collect::<Vec<_>>()
        );
    }
    ExtraFields::from(fields)
}
