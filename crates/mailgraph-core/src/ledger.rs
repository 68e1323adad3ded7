//! Per-person mail counters and the team relation.

use std::collections::{HashMap, HashSet};

use crate::config::MailRecord;

/// Sent/received tallies plus the symmetric "team" relation.
///
/// - `sent`: address → mails sent
/// - `received`: address → times listed as a recipient
/// - `teams`: address → everyone they mailed or were mailed by
///
/// The team relation is independent of the friendship graph.
#[derive(Debug, Clone, Default)]
pub struct MailLedger {
    sent: HashMap<String, usize>,
    received: HashMap<String, usize>,
    teams: HashMap<String, HashSet<String>>,
    mails: usize,
}

impl MailLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one mail. Sender counts once regardless of recipient count.
    pub fn record(&mut self, mail: &MailRecord) {
        *self.sent.entry(mail.sender.clone()).or_insert(0) += 1;

        for recipient in &mail.recipients {
            *self.received.entry(recipient.clone()).or_insert(0) += 1;
        }

        for recipient in &mail.recipients {
            self.teams
                .entry(mail.sender.clone())
                .or_default()
                .insert(recipient.clone());
            self.teams
                .entry(recipient.clone())
                .or_default()
                .insert(mail.sender.clone());
        }

        self.mails += 1;
    }

    pub fn sent_count(&self, person: &str) -> usize {
        self.sent.get(person).copied().unwrap_or(0)
    }

    pub fn received_count(&self, person: &str) -> usize {
        self.received.get(person).copied().unwrap_or(0)
    }

    pub fn team_size(&self, person: &str) -> usize {
        self.teams.get(person).map(|t| t.len()).unwrap_or(0)
    }

    /// Team members sorted by address.
    pub fn team(&self, person: &str) -> Vec<&str> {
        let mut members: Vec<&str> = self
            .teams
            .get(person)
            .map(|t| t.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default();
        members.sort_unstable();
        members
    }

    /// Whether the person ever sent or received mail.
    pub fn contains(&self, person: &str) -> bool {
        self.sent.contains_key(person) || self.received.contains_key(person)
    }

    /// Number of mail records processed.
    pub fn mail_count(&self) -> usize {
        self.mails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_counts_once_per_mail() {
        let mut ledger = MailLedger::new();
        ledger.record(&MailRecord::new("a", ["b", "c", "d"]));
        assert_eq!(ledger.sent_count("a"), 1);
        assert_eq!(ledger.received_count("b"), 1);
        assert_eq!(ledger.received_count("d"), 1);
        assert_eq!(ledger.received_count("a"), 0);
    }

    #[test]
    fn team_is_symmetric_and_distinct() {
        let mut ledger = MailLedger::new();
        ledger.record(&MailRecord::new("a", ["b"]));
        ledger.record(&MailRecord::new("b", ["a"]));
        ledger.record(&MailRecord::new("a", ["b", "c"]));
        assert_eq!(ledger.team_size("a"), 2);
        assert_eq!(ledger.team_size("b"), 1);
        assert_eq!(ledger.team_size("c"), 1);
        assert_eq!(ledger.team("a"), vec!["b", "c"]);
    }

    #[test]
    fn unknown_person_defaults_to_zero() {
        let ledger = MailLedger::new();
        assert_eq!(ledger.sent_count("ghost"), 0);
        assert_eq!(ledger.received_count("ghost"), 0);
        assert_eq!(ledger.team_size("ghost"), 0);
        assert!(ledger.team("ghost").is_empty());
        assert!(!ledger.contains("ghost"));
    }

    #[test]
    fn mail_without_recipients_only_counts_sender() {
        let mut ledger = MailLedger::new();
        ledger.record(&MailRecord::new("a", Vec::<String>::new()));
        assert_eq!(ledger.sent_count("a"), 1);
        assert_eq!(ledger.team_size("a"), 0);
        assert!(ledger.contains("a"));
        assert_eq!(ledger.mail_count(), 1);
    }

    #[test]
    fn self_mail_puts_sender_in_own_team() {
        let mut ledger = MailLedger::new();
        ledger.record(&MailRecord::new("me", ["me"]));
        assert_eq!(ledger.sent_count("me"), 1);
        assert_eq!(ledger.received_count("me"), 1);
        assert_eq!(ledger.team("me"), vec!["me"]);
    }

    #[test]
    fn repeated_recipient_on_one_mail_counts_twice() {
        let mut ledger = MailLedger::new();
        ledger.record(&MailRecord::new("a", ["b", "b"]));
        assert_eq!(ledger.received_count("b"), 2);
        assert_eq!(ledger.team_size("a"), 1);
    }
}
