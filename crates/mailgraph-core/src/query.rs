//! Interactive per-person lookup loop.

use std::io::{BufRead, Write};

use crate::analyzer::Analyzer;
use crate::config::PersonSnapshot;

pub const PROMPT: &str = "Email address of the individual (or EXIT to quit): ";

/// Render the three-line report for a known person.
pub fn format_snapshot(person: &str, snap: &PersonSnapshot) -> String {
    format!(
        "{person} has sent messages to {} others\n\
         {person} has received messages from {} others\n\
         {person} is in a team with {} individuals",
        snap.sent, snap.received, snap.team_size
    )
}

pub fn format_not_found(person: &str) -> String {
    format!("Email address ({person}) not found in the dataset.")
}

/// Report for a single lookup, found or not.
pub fn describe_person(analyzer: &Analyzer, person: &str) -> String {
    match analyzer.person_snapshot(person) {
        Some(snap) => format_snapshot(person, &snap),
        None => format_not_found(person),
    }
}

/// Prompt, read a line, answer it; stop on `sentinel` (any case) or end of input.
///
/// Returns the number of lookups answered.
pub fn run_query_loop<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    mut input: R,
    mut output: W,
    sentinel: &str,
) -> std::io::Result<usize> {
    let mut answered = 0;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let query = line.strip_suffix('\n').unwrap_or(&line);
        let query = query.strip_suffix('\r').unwrap_or(query);

        if query.eq_ignore_ascii_case(sentinel) {
            break;
        }

        writeln!(output, "{}", describe_person(analyzer, query))?;
        answered += 1;
    }
    log::debug!("Query loop finished after {answered} lookups");
    Ok(answered)
}
