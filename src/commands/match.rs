use anyhow::Result;
use tracing::info;

use fieldprobe::engine::{EngineOptions, ResolutionEngine};
use fieldprobe::errors::FieldprobeError;

use crate::commands::utils;

pub fn handle_match(
    snapshot: String,
    index: usize,
    cutoff: f64,
    limit: usize,
    pretty: bool,
) -> Result<()> {
    let snapshot = utils::load_snapshot(&snapshot)?;
    let count = snapshot.elements.len();
    let element = snapshot
        .elements
        .get(index)
        .ok_or(FieldprobeError::ElementIndex { index, count })?;

    info!("Matching element #{} of {}", index, count);

    let engine = ResolutionEngine::with_options(EngineOptions {
        score_cutoff: cutoff,
        result_limit: limit,
        ..Default::default()
    });
    let matches = engine.match_element(element);
    utils::print_json(&matches, pretty)
}
