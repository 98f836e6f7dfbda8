use crate::error::ClientResult;
use crate::models::convert::{copy_fields, into_extra_fields, take_optional, take_string};
use crate::models::extra_fields::ExtraFields;
use crate::models::model::{impl_serde_via_map, Model};
use serde_json::{Map, Value};

/// Data format spoken over a connector's transport, e.g. `csv` or `json`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    pub name: String,
    /// Encoder or parser settings, passed through untouched. An explicit `null` is kept as
    /// `Some(Value::Null)`.
    pub config: Option<Value>,
    pub extra_fields: ExtraFields,
}

impl FormatConfig {
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        FormatConfig {
            name: name.into(),
            config: None,
            extra_fields: ExtraFields::new(),
        }
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }
}

impl Model for FormatConfig {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra_fields.to_map();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(config) = &self.config {
            map.insert("config".to_string(), config.clone());
        }
        map
    }

    fn from_map(map: &Map<String, Value>) -> ClientResult<Self> {
        let mut fields = copy_fields(map);
        let name = take_string(&mut fields, "name")?;
        let config = take_optional(&mut fields, "config");

        Ok(FormatConfig {
            name,
            config,
            extra_fields: into_extra_fields(fields, "FormatConfig"),
        })
    }

    fn extra_fields(&self) -> &ExtraFields {
        &self.extra_fields
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra_fields
    }
}

impl_serde_via_map!(FormatConfig);
