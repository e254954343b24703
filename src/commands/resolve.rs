use anyhow::Result;
use tracing::info;

use fieldprobe::engine::{EngineOptions, ResolutionEngine};
use fieldprobe::types::OutputFormat;

use crate::commands::utils;

pub fn handle_resolve(
    snapshot: String,
    cutoff: f64,
    limit: usize,
    tolerance: f64,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let snapshot = utils::load_snapshot(&snapshot)?;
    info!("Resolving {} element(s)", snapshot.elements.len());

    let engine = ResolutionEngine::with_options(EngineOptions {
        score_cutoff: cutoff,
        result_limit: limit,
        score_tolerance: tolerance,
    });
    let outcome = engine.resolve_snapshot(&snapshot);

    match format {
        OutputFormat::Json => utils::print_json(&outcome, pretty)?,
        OutputFormat::Simple => {
            if outcome.resolutions.is_empty() {
                println!("No fields resolved");
            }
            for (field, resolution) in &outcome.resolutions {
                println!(
                    "{}: element #{} (score {:.2}, {})",
                    field, resolution.candidate_index, resolution.score, resolution.resolved_by
                );
            }
        }
    }

    Ok(())
}
