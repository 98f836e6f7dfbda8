use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Validate a connector creation request and print its normalized body.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Request file; `.yaml`/`.yml` is read as YAML, anything else as JSON
    pub input: PathBuf,

    #[arg(short, long, value_enum, default_value = "json")]
    pub output: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["connector-request", "request.json"]);
        assert_eq!(args.input, PathBuf::from("request.json"));
        assert_eq!(args.output, OutputFormat::Json);
        assert!(!args.pretty);
    }

    #[test]
    fn test_args_yaml_pretty() {
        let args = Args::parse_from([
            "connector-request",
            "request.yaml",
            "--output",
            "yaml",
            "--pretty",
        ]);
        assert_eq!(args.output, OutputFormat::Yaml);
        assert!(args.pretty);
    }
}
