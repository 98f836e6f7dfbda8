use crate::error::{ClientError, ClientResult};
use crate::models::extra_fields::ExtraFields;
use serde_json::{Map, Value};

/// A request or response body of the pipeline manager API.
///
/// Every model converts to and from a generic JSON mapping. Keys the model
/// does not know about are kept in its [`ExtraFields`] and written back
/// unchanged, so payloads from a newer server survive a round trip.
pub trait Model: Sized {
    fn to_map(&self) -> Map<String, Value>;

    /// Builds the model from `map` without modifying it. Fails if a required
    /// key is absent or holds a value of the wrong type.
    fn from_map(map: &Map<String, Value>) -> ClientResult<Self>;

    fn extra_fields(&self) -> &ExtraFields;

    fn extra_fields_mut(&mut self) -> &mut ExtraFields;

    fn extra_keys(&self) -> Vec<String> {
        self.extra_fields().keys()
    }

    fn get(&self, key: &str) -> ClientResult<&Value> {
        self.extra_fields().get(key)
    }

    fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra_fields_mut().set(key, value)
    }

    fn delete(&mut self, key: &str) -> ClientResult<Value> {
        self.extra_fields_mut().delete(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.extra_fields().contains(key)
    }

    fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    fn from_value(value: &Value) -> ClientResult<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Err(ClientError::invalid_field("<root>", "an object")),
        }
    }

    fn to_json_string(&self) -> ClientResult<String> {
        Ok(serde_json::to_string(&self.to_map())?)
    }

    fn from_json_str(s: &str) -> ClientResult<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }

    fn from_yaml_str(s: &str) -> ClientResult<Self> {
        let value: Value = serde_yaml::from_str(s)?;
        Self::from_value(&value)
    }
}

/// Implements `Serialize` and `Deserialize` for a [`Model`] by going through
/// its mapping conversion.
macro_rules! impl_serde_via_map {
    ($model:ty) => {
        impl serde::Serialize for $model {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&$crate::models::model::Model::to_map(self), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $model {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let map: serde_json::Map<String, serde_json::Value> =
                    serde::Deserialize::deserialize(deserializer)?;
                <$model as $crate::models::model::Model>::from_map(&map)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_serde_via_map;
