//! Reading the mail log and the optional friendship-edge file.
//!
//! Mail lines are `sender,recipient1,recipient2,...` with no quoting and no
//! whitespace trimming. Blank lines are skipped and trailing empty fields are
//! dropped, so `a,b,` reads as `a → [b]`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::analyzer::Analyzer;
use crate::config::MailRecord;
use crate::error::{Error, Result};

/// Parse one mail line. Returns `None` for a blank line.
pub fn parse_mail_line(line: &str) -> Option<MailRecord> {
    let fields = split_fields(line);
    let (sender, recipients) = fields.split_first()?;
    Some(MailRecord::new(*sender, recipients.iter().copied()))
}

/// Parse one `a,b` friendship line. Returns `None` unless exactly two fields remain.
pub fn parse_edge_line(line: &str) -> Option<(String, String)> {
    match split_fields(line).as_slice() {
        [a, b] => Some((a.to_string(), b.to_string())),
        _ => None,
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Counts from one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub records: usize,
    pub skipped: usize,
}

/// Feed every mail line from `reader` into the analyzer.
///
/// On a read failure the records already submitted stay in the analyzer and
/// the error reports how many there were.
pub fn ingest_mail<R: BufRead>(
    reader: R,
    analyzer: &mut Analyzer,
    source: &Path,
) -> Result<IngestStats> {
    let mut stats = IngestStats::default();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::DatasetRead {
            path: source.to_path_buf(),
            line: i + 1,
            ingested: stats.records,
            source: e,
        })?;
        match parse_mail_line(&line) {
            Some(mail) => {
                analyzer.submit_mail(&mail);
                stats.records += 1;
            }
            None => {
                log::debug!("{}:{}: blank line skipped", source.display(), i + 1);
                stats.skipped += 1;
            }
        }
    }
    Ok(stats)
}

/// Open the mail log at `path` and ingest it.
pub fn load_mail_file(path: impl AsRef<Path>, analyzer: &mut Analyzer) -> Result<IngestStats> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::DatasetUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;
    let stats = ingest_mail(BufReader::new(file), analyzer, path)?;
    log::info!(
        "Ingested {} mail records from {} ({} skipped)",
        stats.records,
        path.display(),
        stats.skipped
    );
    Ok(stats)
}

/// Feed every `a,b` line from `reader` into the analyzer as a friendship edge.
pub fn ingest_edges<R: BufRead>(
    reader: R,
    analyzer: &mut Analyzer,
    source: &Path,
) -> Result<IngestStats> {
    let mut stats = IngestStats::default();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::DatasetRead {
            path: source.to_path_buf(),
            line: i + 1,
            ingested: stats.records,
            source: e,
        })?;
        if line.is_empty() {
            stats.skipped += 1;
            continue;
        }
        match parse_edge_line(&line) {
            Some((a, b)) => {
                analyzer.submit_edge(&a, &b);
                stats.records += 1;
            }
            None => {
                log::warn!(
                    "{}:{}: expected two addresses, skipping {:?}",
                    source.display(),
                    i + 1,
                    line
                );
                stats.skipped += 1;
            }
        }
    }
    Ok(stats)
}

/// Open the friendship-edge file at `path` and ingest it.
pub fn load_edge_file(path: impl AsRef<Path>, analyzer: &mut Analyzer) -> Result<IngestStats> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::DatasetUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;
    let stats = ingest_edges(BufReader::new(file), analyzer, path)?;
    log::info!(
        "Ingested {} friendship edges from {}",
        stats.records,
        path.display()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_sender_and_recipients() {
        let mail = parse_mail_line("a@x,b@x,c@x").unwrap();
        assert_eq!(mail.sender, "a@x");
        assert_eq!(mail.recipients, vec!["b@x", "c@x"]);
    }

    #[test]
    fn parse_does_not_trim() {
        let mail = parse_mail_line(" a@x, b@x").unwrap();
        assert_eq!(mail.sender, " a@x");
        assert_eq!(mail.recipients, vec![" b@x"]);
    }

    #[test]
    fn parse_drops_trailing_empty_fields() {
        let mail = parse_mail_line("a,b,,").unwrap();
        assert_eq!(mail.recipients, vec!["b"]);
    }

    #[test]
    fn parse_keeps_interior_empty_fields() {
        let mail = parse_mail_line("a,,b").unwrap();
        assert_eq!(mail.recipients, vec!["", "b"]);
    }

    #[test]
    fn parse_sender_only() {
        let mail = parse_mail_line("lonely@x").unwrap();
        assert!(mail.recipients.is_empty());
    }

    #[test]
    fn blank_lines_are_not_records() {
        assert_eq!(parse_mail_line(""), None);
        assert_eq!(parse_mail_line(",,,"), None);
    }

    #[test]
    fn edge_line_needs_two_fields() {
        assert_eq!(
            parse_edge_line("a,b"),
            Some(("a".to_string(), "b".to_string()))
        );
        assert_eq!(parse_edge_line("a,b,"), Some(("a".to_string(), "b".to_string())));
        assert_eq!(parse_edge_line("a"), None);
        assert_eq!(parse_edge_line("a,b,c"), None);
    }

    #[test]
    fn ingest_counts_records_and_blanks() {
        let mut analyzer = Analyzer::new();
        let input = Cursor::new("a,b\n\nb,c\r\n");
        let stats = ingest_mail(input, &mut analyzer, Path::new("mem")).unwrap();
        assert_eq!(stats, IngestStats { records: 2, skipped: 1 });
        assert_eq!(analyzer.ledger().received_count("c"), 1);
    }

    #[test]
    fn ingest_edges_skips_malformed() {
        let mut analyzer = Analyzer::new();
        let input = Cursor::new("a,b\nbroken\nb,c,d\nc,a\n");
        let stats = ingest_edges(input, &mut analyzer, Path::new("mem")).unwrap();
        assert_eq!(stats.records, 2);
        assert_eq!(stats.skipped, 2);
        assert!(analyzer.graph().are_adjacent("a", "c"));
    }

    #[test]
    fn invalid_utf8_stops_with_progress() {
        let mut analyzer = Analyzer::new();
        let mut bytes = b"a,b\nc,d\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let err = ingest_mail(Cursor::new(bytes), &mut analyzer, Path::new("mem")).unwrap_err();
        match err {
            Error::DatasetRead { line, ingested, .. } => {
                assert_eq!(line, 3);
                assert_eq!(ingested, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(analyzer.ledger().mail_count(), 2);
    }

    #[test]
    fn missing_file_is_reported() {
        let mut analyzer = Analyzer::new();
        let err = load_mail_file("/definitely/not/here.txt", &mut analyzer).unwrap_err();
        assert!(matches!(err, Error::DatasetUnavailable { .. }));
        assert!(analyzer.graph().is_empty());
    }
}
