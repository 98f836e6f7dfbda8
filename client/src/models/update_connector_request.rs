use crate::error::ClientResult;
use crate::models::connector_config::ConnectorConfig;
use crate::models::convert::{
    copy_fields, into_extra_fields, take_nullable_model, take_string, take_uuid,
};
use crate::models::extra_fields::ExtraFields;
use crate::models::model::{impl_serde_via_map, Model};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Request to update an existing data connector.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateConnectorRequest {
    pub connector_id: Uuid,
    /// New connector name.
    pub name: String,
    /// New connector description.
    pub description: String,
    /// New config. If absent, the existing config is kept unmodified.
    /// `Some(None)` is an explicit `null` on the wire.
    pub config: Option<Option<ConnectorConfig>>,
    pub extra_fields: ExtraFields,
}

impl UpdateConnectorRequest {
    pub fn new<N, D>(connector_id: Uuid, name: N, description: D) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        UpdateConnectorRequest {
            connector_id,
            name: name.into(),
            description: description.into(),
            config: None,
            extra_fields: ExtraFields::new(),
        }
    }

    pub fn with_config(mut self, config: ConnectorConfig) -> Self {
        self.config = Some(Some(config));
        self
    }
}

impl Model for UpdateConnectorRequest {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra_fields.to_map();
        map.insert(
            "connector_id".to_string(),
            Value::String(self.connector_id.to_string()),
        );
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        if let Some(config) = &self.config {
            map.insert(
                "config".to_string(),
                config.as_ref().map_or(Value::Null, |config| config.to_value()),
            );
        }
        map
    }

    fn from_map(map: &Map<String, Value>) -> ClientResult<Self> {
        let mut fields = copy_fields(map);
        let connector_id = take_uuid(&mut fields, "connector_id")?;
        let name = take_string(&mut fields, "name")?;
        let description = take_string(&mut fields, "description")?;
        let config = take_nullable_model(&mut fields, "config")?;

        Ok(UpdateConnectorRequest {
            connector_id,
            name,
            description,
            config,
            extra_fields: into_extra_fields(fields, "UpdateConnectorRequest"),
        })
    }

    fn extra_fields(&self) -> &ExtraFields {
        &self.extra_fields
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra_fields
    }
}

impl_serde_via_map!(UpdateConnectorRequest);
