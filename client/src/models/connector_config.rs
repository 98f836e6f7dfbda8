use crate::error::ClientResult;
use crate::models::convert::{copy_fields, into_extra_fields, take_model, take_nullable_u64};
use crate::models::extra_fields::ExtraFields;
use crate::models::format_config::FormatConfig;
use crate::models::model::{impl_serde_via_map, Model};
use crate::models::transport_config::TransportConfig;
use serde_json::{Map, Value};

/// A data connector's configuration: where the data moves and how it is
/// encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    pub transport: TransportConfig,
    pub format: FormatConfig,
    /// Backpressure threshold; the server default applies when unset.
    /// `Some(None)` is an explicit `null` on the wire.
    pub max_buffered_records: Option<Option<u64>>,
    pub extra_fields: ExtraFields,
}

impl ConnectorConfig {
    pub fn new(transport: TransportConfig, format: FormatConfig) -> Self {
        ConnectorConfig {
            transport,
            format,
            max_buffered_records: None,
            extra_fields: ExtraFields::new(),
        }
    }

    pub fn with_max_buffered_records(mut self, max_buffered_records: u64) -> Self {
        self.max_buffered_records = Some(Some(max_buffered_records));
        self
    }
}

impl Model for ConnectorConfig {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra_fields.to_map();
        map.insert("transport".to_string(), self.transport.to_value());
        map.insert("format".to_string(), self.format.to_value());
        if let Some(max) = self.max_buffered_records {
            map.insert(
                "max_buffered_records".to_string(),
                max.map_or(Value::Null, Value::from),
            );
        }
        map
    }

    fn from_map(map: &Map<String, Value>) -> ClientResult<Self> {
        let mut fields = copy_fields(map);
        let transport = take_model(&mut fields, "transport")?;
        let format = take_model(&mut fields, "format")?;
        let max_buffered_records = take_nullable_u64(&mut fields, "max_buffered_records")?;

        Ok(ConnectorConfig {
            transport,
            format,
            max_buffered_records,
            extra_fields: into_extra_fields(fields, "ConnectorConfig"),
        })
    }

    fn extra_fields(&self) -> &ExtraFields {
        &self.extra_fields
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra_fields
    }
}

impl_serde_via_map!(ConnectorConfig);
