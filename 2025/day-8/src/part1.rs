use miette::*;
use tracing::info;

use crate::config::Config;
use crate::{parser, planner, summary};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    process_with(input, Config::default())
}

/// Connects the `config.connections` closest pairs and multiplies the sizes
/// of the three largest circuits.
#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, config: Config) -> Result<String> {
    let boxes = parser::parse(input)?;
    info!(boxes = boxes.len(), "parsed junction boxes");

    let mut dsu = planner::connect_closest(&boxes, config.connections)?;
    let result = summary::largest_circuits_product(&mut dsu)?;

    Ok(result.to_string())
}
