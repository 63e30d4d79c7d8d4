//! In-memory directory of known identities.
//!
//! The directory is the sole source of truth for credential checks. It is
//! seeded with fixed sample accounts at construction, grows by appending,
//! and never removes an entry. Lookup is a linear scan by exact email
//! match, which is fine at this scale.

use chrono::{DateTime, Utc};

use crate::models::Identity;

/// A directory entry: the public identity plus the secret used for
/// credential checks. Secrets are stored in plaintext as part of the mock
/// provider and must not be exposed outside this module's owner.
#[derive(Debug, Clone)]
pub(crate) struct DirectoryEntry {
    pub id: String,
    pub email: String,
    pub name: String,
    pub secret: String,
}

impl DirectoryEntry {
    /// The secret-free view of this entry.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Insertion-ordered collection of known identities.
#[derive(Debug)]
pub(crate) struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    /// Directory seeded with the built-in sample accounts.
    pub fn with_sample_accounts() -> Self {
        Self {
            entries: vec![
                DirectoryEntry {
                    id: "1".to_string(),
                    email: "demo@example.com".to_string(),
                    name: "Demo User".to_string(),
                    secret: "password123".to_string(),
                },
                DirectoryEntry {
                    id: "2".to_string(),
                    email: "john@example.com".to_string(),
                    name: "John Doe".to_string(),
                    secret: "john123".to_string(),
                },
            ],
        }
    }

    /// Look up an entry by exact email match (case-sensitive, no
    /// normalization).
    pub fn find_by_email(&self, email: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.email == email)
    }

    /// Look up the entry matching both email and secret exactly.
    pub fn authenticate(&self, email: &str, secret: &str) -> Option<&DirectoryEntry> {
        self.entries
            .iter()
            .find(|e| e.email == email && e.secret == secret)
    }

    /// Append a new entry. Uniqueness checks are the caller's job.
    pub fn insert(&mut self, entry: DirectoryEntry) {
        self.entries.push(entry);
    }

    /// Synthesize a time-based identifier, bumping past collisions so ids
    /// stay unique for the process lifetime.
    pub fn allocate_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.contains_id(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sample_accounts_seeded() {
        let directory = Directory::with_sample_accounts();
        assert_eq!(directory.entries.len(), 2);

        let demo = directory.find_by_email("demo@example.com").unwrap();
        assert_eq!(demo.id, "1");
        assert_eq!(demo.name, "Demo User");
    }

    #[test]
    fn test_find_by_email_is_case_sensitive() {
        let directory = Directory::with_sample_accounts();
        assert!(directory.find_by_email("Demo@example.com").is_none());
        assert!(directory.find_by_email("DEMO@EXAMPLE.COM").is_none());
    }

    #[test]
    fn test_authenticate_requires_both_fields_to_match() {
        let directory = Directory::with_sample_accounts();

        assert!(directory.authenticate("demo@example.com", "password123").is_some());
        assert!(directory.authenticate("demo@example.com", "john123").is_none());
        assert!(directory.authenticate("john@example.com", "password123").is_none());
        assert!(directory.authenticate("nobody@example.com", "password123").is_none());
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut directory = Directory::with_sample_accounts();
        directory.insert(DirectoryEntry {
            id: "99".to_string(),
            email: "new@example.com".to_string(),
            name: "New User".to_string(),
            secret: "abcdef".to_string(),
        });

        assert_eq!(directory.entries.len(), 3);
        assert_eq!(directory.entries.last().unwrap().email, "new@example.com");
        // Seeded entries keep their positions
        assert_eq!(directory.entries[0].id, "1");
    }

    #[test]
    fn test_allocate_id_bumps_past_collisions() {
        let mut directory = Directory::with_sample_accounts();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let first = directory.allocate_id(now);
        assert_eq!(first, "1700000000000");

        directory.insert(DirectoryEntry {
            id: first,
            email: "a@example.com".to_string(),
            name: "A".to_string(),
            secret: "secret1".to_string(),
        });

        // Same millisecond allocates the next free id
        let second = directory.allocate_id(now);
        assert_eq!(second, "1700000000001");
    }
}
