//! Core data types and configuration for mailgraph analysis.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the connector search treats the root of each DFS tree.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RootRule {
    /// Never report a traversal root, even when it separates its subtrees.
    #[default]
    Omit,
    /// Report a traversal root that has two or more DFS-tree children.
    Textbook,
}

impl RootRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omit => "omit",
            Self::Textbook => "textbook",
        }
    }

    /// Parse from a CLI/config value (case-insensitive).
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "omit" => Some(Self::Omit),
            "textbook" => Some(Self::Textbook),
            _ => None,
        }
    }
}

impl std::fmt::Display for RootRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the mail log: a sender and the ordered recipient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailRecord {
    pub sender: String,
    #[serde(default)]
    pub recipients: Vec<String>,
}

impl MailRecord {
    pub fn new<S, I, R>(sender: S, recipients: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            sender: sender.into(),
            recipients: recipients.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-person statistics returned by a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSnapshot {
    pub sent: usize,
    pub received: usize,
    pub team_size: usize,
}

/// Behaviour switches for an [`crate::analyzer::Analyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    /// Insert a friendship edge between the sender and every recipient of each mail.
    #[serde(default = "default_link_correspondents")]
    pub link_correspondents: bool,
    #[serde(default)]
    pub root_rule: RootRule,
    /// Keep only the first occurrence of each connector.
    #[serde(default)]
    pub unique_connectors: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            link_correspondents: default_link_correspondents(),
            root_rule: RootRule::default(),
            unique_connectors: false,
        }
    }
}

/// Configuration for an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    pub connectors_path: Option<String>,
    pub edges_path: Option<String>,
    pub json_path: Option<String>,
    #[serde(default)]
    pub root_rule: RootRule,
    #[serde(default = "default_link_correspondents")]
    pub link_correspondents: bool,
    #[serde(default)]
    pub unique_connectors: bool,
    #[serde(default = "default_exit_sentinel")]
    pub exit_sentinel: String,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub quiet: bool,
}

fn default_dataset_path() -> String {
    "dataset.txt".to_string()
}
fn default_link_correspondents() -> bool {
    true
}
fn default_exit_sentinel() -> String {
    "EXIT".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            connectors_path: None,
            edges_path: None,
            json_path: None,
            root_rule: RootRule::default(),
            link_correspondents: default_link_correspondents(),
            unique_connectors: false,
            exit_sentinel: default_exit_sentinel(),
            verbose: false,
            quiet: false,
        }
    }
}

impl AnalysisConfig {
    /// Analyzer switches carried by this configuration.
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            link_correspondents: self.link_correspondents,
            root_rule: self.root_rule,
            unique_connectors: self.unique_connectors,
        }
    }
}

/// Result of an analysis run, serialised as the JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub stats: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub connectors: Vec<String>,
    #[serde(default)]
    pub people: Vec<PersonOutput>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            version: default_version(),
            metadata: HashMap::new(),
            stats: HashMap::new(),
            connectors: Vec::new(),
            people: Vec::new(),
        }
    }
}

/// Person in the output JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonOutput {
    pub address: String,
    pub sent: usize,
    pub received: usize,
    pub team_size: usize,
    pub friends: usize,
}
