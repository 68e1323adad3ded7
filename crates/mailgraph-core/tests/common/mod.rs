//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use mailgraph_core::analyzer::Analyzer;
use mailgraph_core::config::{AnalysisConfig, AnalyzerOptions, MailRecord};
use mailgraph_core::dataset;

// ---------------------------------------------------------------------------
// Fixture path resolution
// ---------------------------------------------------------------------------

/// Resolve `tests/fixtures/{name}` relative to the workspace root.
pub fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .join("../../tests/fixtures")
        .join(name)
        .canonicalize()
        .unwrap_or_else(|_| {
            Path::new(manifest_dir)
                .join("../../tests/fixtures")
                .join(name)
        })
}

/// Config pointing at a fixture mail log.
pub fn fixture_config(name: &str) -> AnalysisConfig {
    AnalysisConfig {
        dataset_path: fixture_path(name).to_string_lossy().to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Analyzer builders
// ---------------------------------------------------------------------------

/// Load a fixture mail log into a fresh analyzer.
pub fn load_fixture(name: &str, options: AnalyzerOptions) -> Analyzer {
    let mut analyzer = Analyzer::with_options(options);
    dataset::load_mail_file(fixture_path(name), &mut analyzer).unwrap();
    analyzer
}

/// Analyzer built from explicit friendship edges only.
pub fn from_edges(edges: &[(&str, &str)]) -> Analyzer {
    let mut analyzer = Analyzer::new();
    for (a, b) in edges {
        analyzer.submit_edge(a, b);
    }
    analyzer
}

/// Analyzer built from `(sender, recipients)` pairs.
pub fn from_mail(mails: &[(&str, &[&str])], options: AnalyzerOptions) -> Analyzer {
    let mut analyzer = Analyzer::with_options(options);
    for (sender, recipients) in mails {
        analyzer.submit_mail(&MailRecord::new(*sender, recipients.iter().copied()));
    }
    analyzer
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
