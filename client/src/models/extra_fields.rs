use crate::error::{ClientError, ClientResult};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Keys received on the wire that are not part of a model's schema.
///
/// Entries keep their insertion order so a payload is re-emitted the way
/// it was received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraFields {
    fields: IndexMap<String, Value>,
}

impl ExtraFields {
    pub fn new() -> Self {
        ExtraFields {
            fields: IndexMap::new(),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn get(&self, key: &str) -> ClientResult<&Value> {
        self.fields
            .get(key)
            .ok_or_else(|| ClientError::key_not_found(key))
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn delete(&mut self, key: &str) -> ClientResult<Value> {
        self.fields
            .shift_remove(key)
            .ok_or_else(|| ClientError::key_not_found(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Starts a fresh mapping holding a copy of every extra entry. Models
    /// insert their named fields on top of it.
    pub fn to_map(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl From<IndexMap<String, Value>> for ExtraFields {
    fn from(fields: IndexMap<String, Value>) -> Self {
        ExtraFields { fields }
    }
}

impl From<Map<String, Value>> for ExtraFields {
    fn from(map: Map<String, Value>) -> Self {
        ExtraFields {
            fields: map.into_iter().collect(),
        }
    }
}
