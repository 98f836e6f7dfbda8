mod args;
mod input;
mod output;

use anyhow::Result;
use args::Args;
use clap::Parser;
use connector_client::Model;
use log::{info, warn};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    info!("loading connector request from {}", args.input.display());

    let request = input::load_request(&args.input)?;
    info!("connector '{}' is valid", request.name);
    for key in request.extra_keys() {
        warn!("preserving unknown field '{}'", key);
    }

    println!("{}", output::render(&request, args.output, args.pretty)?);
    Ok(())
}
