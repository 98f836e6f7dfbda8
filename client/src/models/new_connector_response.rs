use crate::error::ClientResult;
use crate::models::convert::{copy_fields, into_extra_fields, take_uuid};
use crate::models::extra_fields::ExtraFields;
use crate::models::model::{impl_serde_via_map, Model};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Response to a connector creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConnectorResponse {
    /// Unique id assigned to the new connector.
    pub connector_id: Uuid,
    pub extra_fields: ExtraFields,
}

impl NewConnectorResponse {
    pub fn new(connector_id: Uuid) -> Self {
        NewConnectorResponse {
            connector_id,
            extra_fields: ExtraFields::new(),
        }
    }
}

impl Model for NewConnectorResponse {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra_fields.to_map();
        map.insert(
            "connector_id".to_string(),
            Value::String(self.connector_id.to_string()),
        );
        map
    }

    fn from_map(map: &Map<String, Value>) -> ClientResult<Self> {
        let mut fields = copy_fields(map);
        let connector_id = take_uuid(&mut fields, "connector_id")?;

        Ok(NewConnectorResponse {
            connector_id,
            extra_fields: into_extra_fields(fields, "NewConnectorResponse"),
        })
    }

    fn extra_fields(&self) -> &ExtraFields {
        &self.extra_fields
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra_fields
    }
}

impl_serde_via_map!(NewConnectorResponse);
