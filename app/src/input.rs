use anyhow::{Context, Result};
use connector_client::{Model, NewConnectorRequest};
use std::fs;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

pub fn load_request(path: &Path) -> Result<NewConnectorRequest> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let request = if is_yaml(path) {
        NewConnectorRequest::from_yaml_str(&contents)
    } else {
        NewConnectorRequest::from_json_str(&contents)
    };
    request.with_context(|| format!("invalid connector request in {}", path.display()))
}
