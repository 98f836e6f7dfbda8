use crate::error::ClientResult;
use crate::models::connector_config::ConnectorConfig;
use crate::models::convert::{copy_fields, into_extra_fields, take_model, take_string};
use crate::models::extra_fields::ExtraFields;
use crate::models::model::{impl_serde_via_map, Model};
use serde_json::{Map, Value};

/// Request to create a new connector.
///
/// ```json
/// {
///   "config": { "transport": { "name": "file" }, "format": { "name": "csv" } },
///   "description": "Reads orders from disk",
///   "name": "orders"
/// }
/// ```
///
/// Named fields and extra fields are stored separately: setting an extra
/// field called `name` never changes [`NewConnectorRequest::name`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewConnectorRequest {
    /// A data connector's configuration.
    pub config: ConnectorConfig,
    /// Connector description.
    pub description: String,
    /// Connector name.
    pub name: String,
    pub extra_fields: ExtraFields,
}

impl NewConnectorRequest {
    pub fn new<D, N>(config: ConnectorConfig, description: D, name: N) -> Self
    where
        D: Into<String>,
        N: Into<String>,
    {
        NewConnectorRequest {
            config,
            description: description.into(),
            name: name.into(),
            extra_fields: ExtraFields::new(),
        }
    }
}

impl Model for NewConnectorRequest {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra_fields.to_map();
        map.insert("config".to_string(), self.config.to_value());
        map.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map
    }

    fn from_map(map: &Map<String, Value>) -> ClientResult<Self> {
        let mut fields = copy_fields(map);
        let config = take_model(&mut fields, "config")?;
        let description = take_string(&mut fields, "description")?;
        let name = take_string(&mut fields, "name")?;

        Ok(NewConnectorRequest {
            config,
            description,
            name,
            extra_fields: into_extra_fields(fields, "NewConnectorRequest"),
        })
    }

    fn extra_fields(&self) -> &ExtraFields {
        &self.extra_fields
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra_fields
    }
}

impl_serde_via_map!(NewConnectorRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::models::format_config::FormatConfig;
    use crate::models::transport_config::TransportConfig;
    use serde_json::json;

    fn config_value() -> Value {
        json!({
            "transport": {"name": "file", "config": {"path": "orders.csv"}},
            "format": {"name": "csv"},
        })
    }

    fn request_value() -> Value {
        json!({
            "config": config_value(),
            "description": "d",
            "name": "n",
        })
    }

    fn new_request() -> NewConnectorRequest {
        let config = ConnectorConfig::new(TransportConfig::new("file"), FormatConfig::new("csv"));
        NewConnectorRequest::new(config, "d", "n")
    }

    #[test]
    fn test_new_connector_request_new() {
        let request = new_request();
        assert_eq!(request.description, "d");
        assert_eq!(request.name, "n");
        assert!(request.extra_keys().is_empty());
    }

    #[test]
    fn test_from_map_extracts_named_fields() {
        let request = NewConnectorRequest::from_value(&request_value()).unwrap();

        assert_eq!(request.name, "n");
        assert_eq!(request.description, "d");
        assert_eq!(request.config.transport.name, "file");
        assert_eq!(request.config.format.name, "csv");
        assert!(request.extra_fields.is_empty());
    }

    #[test]
    fn test_from_map_missing_config() {
        let result = NewConnectorRequest::from_value(&json!({"description": "d", "name": "n"}));
        match result {
            Err(ClientError::MissingField(e)) => assert_eq!(e.field_name, "config"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_map_missing_description() {
        let result =
            NewConnectorRequest::from_value(&json!({"config": config_value(), "name": "n"}));
        match result {
            Err(ClientError::MissingField(e)) => assert_eq!(e.field_name, "description"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_map_missing_name() {
        let result =
            NewConnectorRequest::from_value(&json!({"config": config_value(), "description": "d"}));
        match result {
            Err(ClientError::MissingField(e)) => assert_eq!(e.field_name, "name"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_map_does_not_mutate_input() {
        let value = json!({
            "config": config_value(),
            "description": "d",
            "name": "n",
            "foo": 1,
        });
        let map = value.as_object().unwrap().clone();
        NewConnectorRequest::from_map(&map).unwrap();

        assert_eq!(Value::Object(map), value);
    }

    #[test]
    fn test_extra_field_isolation() {
        let request = NewConnectorRequest::from_value(&json!({
            "config": config_value(),
            "description": "d",
            "name": "n",
            "foo": 1,
        }))
        .unwrap();

        assert_eq!(request.extra_keys(), vec!["foo".to_string()]);
        assert_eq!(request.get("foo").unwrap(), &json!(1));
        assert!(request.contains("foo"));
        assert!(!request.contains("name"));
    }

    #[test]
    fn test_named_field_wins_over_extra_field() {
        let mut request = new_request();
        request.set("name", "x");

        assert_eq!(request.name, "n");
        assert_eq!(request.get("name").unwrap(), &json!("x"));
        assert_eq!(request.to_map().get("name"), Some(&json!("n")));
    }

    #[test]
    fn test_absent_extra_key() {
        let mut request = new_request();
        assert!(matches!(
            request.get("missing"),
            Err(ClientError::KeyNotFound(_))
        ));
        assert!(matches!(
            request.delete("missing"),
            Err(ClientError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_set_then_delete() {
        let mut request = new_request();
        request.set("labels", json!(["a", "b"]));
        assert_eq!(request.delete("labels").unwrap(), json!(["a", "b"]));
        assert!(!request.contains("labels"));
        assert_eq!(request.to_value(), request_value_without_path());
    }

    fn request_value_without_path() -> Value {
        json!({
            "config": {"transport": {"name": "file"}, "format": {"name": "csv"}},
            "description": "d",
            "name": "n",
        })
    }

    #[test]
    fn test_to_map_puts_extra_fields_first() {
        let mut request = new_request();
        request.set("zzz", true);

        let map = request.to_map();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["zzz", "config", "description", "name"]);
    }

    #[test]
    fn test_round_trip() {
        let value = json!({
            "config": config_value(),
            "description": "d",
            "name": "n",
            "foo": 1,
            "bar": {"nested": [1.5, null, "s"]},
        });
        let request = NewConnectorRequest::from_value(&value).unwrap();
        assert_eq!(request.to_value(), value);
    }

    #[test]
    fn test_serde_json_matches_map_conversion() {
        let value = request_value();
        let request: NewConnectorRequest = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), value);
    }

    #[test]
    fn test_serde_json_reports_missing_field() {
        let result: Result<NewConnectorRequest, _> =
            serde_json::from_str(r#"{"description": "d", "name": "n"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Missing required field 'config'"));
    }
}
