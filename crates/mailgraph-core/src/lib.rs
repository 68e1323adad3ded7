//! mailgraph core: acquaintance analysis over an email log.
//!
//! This crate holds all analysis logic: the friendship graph, the mail ledger,
//! connector (articulation point) detection, dataset reading, reporting and the
//! interactive lookup loop.

pub mod analyzer;
pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod ledger;
pub mod output;
pub mod pipeline;
pub mod query;
