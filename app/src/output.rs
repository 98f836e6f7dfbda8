use crate::args::OutputFormat;
use anyhow::Result;
use connector_client::{Model, NewConnectorRequest};

pub fn render(request: &NewConnectorRequest, format: OutputFormat, pretty: bool) -> Result<String> {
    let map = request.to_map();
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&map)?,
        OutputFormat::Json => serde_json::to_string(&map)?,
        OutputFormat::Yaml => serde_yaml::to_string(&map)?,
    };
    Ok(rendered)
}
