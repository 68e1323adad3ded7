//! Facade tying the friendship graph, the mail ledger and the connector search together.

use crate::config::{AnalyzerOptions, MailRecord, PersonSnapshot};
use crate::graph::acquaintance::AcquaintanceGraph;
use crate::graph::connectors::{dedup_connectors, find_connectors};
use crate::ledger::MailLedger;

/// Single owner of all analysis state for one session.
///
/// Not synchronised: share across threads only behind an external lock.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    graph: AcquaintanceGraph,
    ledger: MailLedger,
    connectors: Vec<String>,
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Add an explicit friendship edge.
    pub fn submit_edge(&mut self, a: &str, b: &str) {
        self.graph.add_edge(a, b);
    }

    /// Record one mail in the ledger.
    ///
    /// With `link_correspondents` on, the sender also becomes a vertex and is
    /// linked to every recipient, so a mail with no recipients still registers
    /// its sender.
    pub fn submit_mail(&mut self, mail: &MailRecord) {
        self.ledger.record(mail);

        if self.options.link_correspondents {
            self.graph.add_person(&mail.sender);
            for recipient in &mail.recipients {
                self.graph.add_edge(&mail.sender, recipient);
            }
        }
    }

    /// Recompute the connector sequence from the current graph.
    pub fn compute_connectors(&mut self) -> &[String] {
        self.connectors.clear();
        let found = find_connectors(&self.graph, self.options.root_rule);
        self.connectors = if self.options.unique_connectors {
            dedup_connectors(found)
        } else {
            found
        };
        log::info!(
            "Found {} connectors among {} people",
            self.connectors.len(),
            self.graph.person_count()
        );
        &self.connectors
    }

    /// Result of the last [`Analyzer::compute_connectors`] call.
    pub fn connectors(&self) -> &[String] {
        &self.connectors
    }

    /// Statistics for a person, or `None` if they are not in the friendship graph.
    pub fn person_snapshot(&self, person: &str) -> Option<PersonSnapshot> {
        if !self.graph.contains(person) {
            return None;
        }
        Some(PersonSnapshot {
            sent: self.ledger.sent_count(person),
            received: self.ledger.received_count(person),
            team_size: self.ledger.team_size(person),
        })
    }

    /// Snapshots for every person in the graph, in first-seen order.
    pub fn snapshots(&self) -> Vec<(String, PersonSnapshot)> {
        self.graph
            .people()
            .into_iter()
            .filter_map(|p| self.person_snapshot(p).map(|s| (p.to_string(), s)))
            .collect()
    }

    pub fn people(&self) -> Vec<&str> {
        self.graph.people()
    }

    pub fn graph(&self) -> &AcquaintanceGraph {
        &self.graph
    }

    pub fn ledger(&self) -> &MailLedger {
        &self.ledger
    }
}
