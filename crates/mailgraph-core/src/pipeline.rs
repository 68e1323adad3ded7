//! Sequential phase orchestrator with timing.

use std::collections::HashMap;
use std::time::Instant;

use crate::analyzer::Analyzer;
use crate::config::{AnalysisConfig, AnalysisResult};
use crate::dataset;
use crate::error::{Error, Result};
use crate::output::build_result;

/// Phase labels for progress reporting.
const PHASE_LABELS: &[(&str, &str)] = &[
    ("mail", "Reading mail log"),
    ("edges", "Adding friendship edges"),
    ("connectors", "Finding connectors"),
];

/// Progress callback type: (phase_name, label).
pub type ProgressCallback = Box<dyn FnMut(&str, &str)>;

/// Type alias for phase function closures to keep signatures readable.
type PhaseFn = Box<dyn FnOnce(&AnalysisConfig, &mut Analyzer) -> Result<()>>;

/// Everything a run produced. Input failures are recoverable and collected
/// in `warnings`; the phases after them still run.
#[derive(Debug)]
pub struct Session {
    pub analyzer: Analyzer,
    pub result: AnalysisResult,
    pub warnings: Vec<Error>,
}

/// Execute the three-phase analysis pipeline.
pub fn run_pipeline(config: &AnalysisConfig, mut progress_callback: Option<ProgressCallback>) -> Session {
    let mut analyzer = Analyzer::with_options(config.analyzer_options());
    let mut timings: HashMap<String, f64> = HashMap::new();
    let mut warnings = Vec::new();
    let total_start = Instant::now();

    let phase_fns: Vec<(&str, PhaseFn)> = vec![
        (
            "mail",
            Box::new(|config, analyzer| {
                dataset::load_mail_file(&config.dataset_path, analyzer)?;
                Ok(())
            }),
        ),
        (
            "edges",
            Box::new(|config, analyzer| {
                if let Some(path) = &config.edges_path {
                    dataset::load_edge_file(path, analyzer)?;
                }
                Ok(())
            }),
        ),
        (
            "connectors",
            Box::new(|_config, analyzer| {
                analyzer.compute_connectors();
                Ok(())
            }),
        ),
    ];

    for (name, phase_fn) in phase_fns {
        // Report progress
        if let Some(ref mut cb) = progress_callback {
            let label = PHASE_LABELS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, l)| *l)
                .unwrap_or(name);
            cb(name, label);
        }

        let start = Instant::now();
        if let Err(e) = phase_fn(config, &mut analyzer) {
            log::warn!("Phase {name} did not complete: {e}");
            warnings.push(e);
        }
        timings.insert(name.to_string(), start.elapsed().as_secs_f64());
        log::debug!("Phase {name} finished in {:.3}s", timings[name]);
    }

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    let result = build_result(config, &analyzer, &timings, total_ms);

    Session {
        analyzer,
        result,
        warnings,
    }
}
