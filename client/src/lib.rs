//! Request and response models for the pipeline manager's connector API.
//!
//! Each model converts to and from a JSON mapping through the [`Model`]
//! trait and keeps unknown keys so that newer server payloads round-trip.

pub mod error;
pub mod models;

pub use error::{ClientError, ClientResult};
pub use models::{
    ConnectorConfig, ExtraFields, FormatConfig, Model, NewConnectorRequest, NewConnectorResponse,
    TransportConfig, UpdateConnectorRequest,
};
