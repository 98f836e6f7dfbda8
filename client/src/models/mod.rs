pub mod connector_config;
pub mod convert;
pub mod extra_fields;
pub mod format_config;
pub mod model;
pub mod new_connector_request;
pub mod new_connector_response;
pub mod transport_config;
pub mod update_connector_request;

pub use connector_config::ConnectorConfig;
pub use extra_fields::ExtraFields;
pub use format_config::FormatConfig;
pub use model::Model;
pub use new_connector_request::NewConnectorRequest;
pub use new_connector_response::NewConnectorResponse;
pub use transport_config::TransportConfig;
pub use update_connector_request::UpdateConnectorRequest;
