//! Remote directory sync: HTTP transport plus translation of directory entries
//! into employees.

mod client;
mod translator;

use serde::Serialize;

use super::domain::Employee;
use super::registry::EmployeeRegistry;

pub use client::DirectoryClient;
pub use translator::{decode_entries, translate_entries, DirectoryCompany, DirectoryEntry};

/// Failure categories for a directory fetch. Any of them aborts the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Transport(String),
    #[error("directory responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("directory payload is malformed: {0}")]
    Payload(String),
    #[error("directory entry is missing required field '{field}'")]
    MissingField { field: &'static str },
    #[error("directory entry has no 'company' object")]
    MissingCompany,
    #[error("directory entry has an empty 'name'")]
    EmptyName,
}

impl DirectoryError {
    /// Connectivity and HTTP failures as opposed to malformed content.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

/// Result of merging a fetched directory batch into the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub fetched: usize,
    pub added: usize,
    pub duplicates: usize,
}

/// Add fetched employees with first-write-wins; emails already tracked are counted
/// as duplicates and left untouched.
pub fn merge_into(registry: &mut EmployeeRegistry, employees: Vec<Employee>) -> SyncOutcome {
    let fetched = employees.len();
    let added = employees
        .into_iter()
        .map(|employee| registry.add(employee))
        .filter(|added| *added)
        .count();

    SyncOutcome {
        fetched,
        added,
        duplicates: fetched - added,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workforce::catalog::Position;

    #[test]
    fn merge_keeps_existing_records() {
        let mut registry = EmployeeRegistry::new();
        registry.add(
            Employee::new("Jan", "Kowalski", "jan@x.com", "TechCorp", Position::Manager, 15_000.0)
                .expect("valid"),
        );

        let fetched = translate_entries(vec![
            DirectoryEntry {
                name: Some("Jan Kowalski".to_string()),
                email: Some("jan@x.com".to_string()),
                company: Some(DirectoryCompany {
                    name: Some("Elsewhere".to_string()),
                }),
            },
            DirectoryEntry {
                name: Some("Ewa Lis".to_string()),
                email: Some("ewa@x.com".to_string()),
                company: Some(DirectoryCompany {
                    name: Some("DataCorp".to_string()),
                }),
            },
        ])
        .expect("translation succeeds");

        let outcome = merge_into(&mut registry, fetched);
        assert_eq!(
            outcome,
            SyncOutcome {
                fetched: 2,
                added: 1,
                duplicates: 1
            }
        );
        let jan = registry.find_by_email("jan@x.com").expect("still tracked");
        assert_eq!(jan.position(), Position::Manager);
        assert_eq!(jan.organization(), "TechCorp");
    }

    #[test]
    fn upstream_classification() {
        assert!(DirectoryError::Transport("refused".to_string()).is_upstream());
        assert!(DirectoryError::Status {
            status: 500,
            body: String::new()
        }
        .is_upstream());
        assert!(!DirectoryError::Payload("eof".to_string()).is_upstream());
        assert!(!DirectoryError::EmptyName.is_upstream());
    }
}
