//! Connector sinks and the JSON report.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::Utc;

use crate::analyzer::Analyzer;
use crate::config::{AnalysisConfig, AnalysisResult, PersonOutput};
use crate::error::{Error, Result};

/// Write connectors one per line to any writer.
pub fn write_connector_lines<W: Write>(connectors: &[String], mut out: W) -> std::io::Result<()> {
    for connector in connectors {
        writeln!(out, "{connector}")?;
    }
    out.flush()
}

/// Write connectors one per line to a file, creating parent directories.
pub fn write_connectors(connectors: &[String], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        write_connector_lines(connectors, BufWriter::new(file))
    };
    write().map_err(|e| Error::sink(path, e))
}

/// Read back a connector file written by [`write_connectors`].
pub fn read_connectors(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(Error::from)
}

/// Build the AnalysisResult from the analyzer's current state.
pub fn build_result(
    config: &AnalysisConfig,
    analyzer: &Analyzer,
    timings: &HashMap<String, f64>,
    total_ms: f64,
) -> AnalysisResult {
    let graph = analyzer.graph();
    let ledger = analyzer.ledger();
    let connectors = analyzer.connectors().to_vec();

    // Build metadata
    let mut metadata = HashMap::new();
    metadata.insert(
        "dataset_path".to_string(),
        serde_json::Value::String(config.dataset_path.clone()),
    );
    metadata.insert(
        "analysed_at".to_string(),
        serde_json::Value::String(Utc::now().to_rfc3339()),
    );
    metadata.insert(
        "mailgraph_version".to_string(),
        serde_json::Value::String(env!("CARGO_PKG_VERSION").to_string()),
    );
    metadata.insert(
        "root_rule".to_string(),
        serde_json::Value::String(analyzer.options().root_rule.as_str().to_string()),
    );
    metadata.insert(
        "analysis_duration_ms".to_string(),
        serde_json::json!(((total_ms * 10.0).round() / 10.0)),
    );
    metadata.insert(
        "phase_timings".to_string(),
        serde_json::to_value(timings).unwrap_or_default(),
    );

    // Build stats
    let mut stats = HashMap::new();
    stats.insert("people".to_string(), serde_json::json!(graph.person_count()));
    stats.insert("edges".to_string(), serde_json::json!(graph.edge_count()));
    stats.insert("mails".to_string(), serde_json::json!(ledger.mail_count()));
    stats.insert("connectors".to_string(), serde_json::json!(connectors.len()));
    stats.insert(
        "components".to_string(),
        serde_json::json!(graph.component_count()),
    );

    // Build people, sorted by address
    let mut people: Vec<PersonOutput> = analyzer
        .snapshots()
        .into_iter()
        .map(|(address, snap)| PersonOutput {
            friends: graph.neighbors(&address).len(),
            address,
            sent: snap.sent,
            received: snap.received,
            team_size: snap.team_size,
        })
        .collect();
    people.sort_by(|a, b| a.address.cmp(&b.address));

    AnalysisResult {
        version: "1.0".to_string(),
        metadata,
        stats,
        connectors,
        people,
    }
}

/// Write the analysis result to a JSON file.
pub fn write_output(result: &AnalysisResult, output_path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    let path = Path::new(output_path);
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
    };
    write().map_err(|e| Error::sink(path, e))
}
