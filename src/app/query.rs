// ClientSearch - app/query.rs
//
// Runs one user query against a loaded store and collects everything the
// report layer needs to print it.

use crate::core::model::{ClientField, ClientRecord};
use crate::core::search::{DuplicateGroup, SearchService};
use crate::core::store::ClientStore;

/// A single query as requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Case-insensitive substring search on one named field.
    Search { field: String, text: String },

    /// All records sharing an email address with another record.
    Duplicates,
}

/// Result of running a [`Query`].
#[derive(Debug, Clone, Default)]
pub struct QueryOutcome<'a> {
    /// Matching records, flattened.
    pub records: Vec<&'a ClientRecord>,

    /// Duplicate groups; empty for searches.
    pub groups: Vec<DuplicateGroup<'a>>,

    /// Non-fatal notes for the user (e.g. an unrecognised field name).
    /// These are returned, not logged; the caller decides where they go.
    pub warnings: Vec<String>,
}

/// Execute `query` against `store`.
pub fn run<'a>(store: &'a ClientStore, query: &Query) -> QueryOutcome<'a> {
    let service = SearchService::new(store);

    match query {
        Query::Search { field, text } => {
            let mut warnings = Vec::new();
            if ClientField::from_name(field).is_none() {
                let valid: Vec<_> = ClientField::all().iter().map(|f| f.name()).collect();
                let msg = format!(
                    "Unknown field '{field}'; nothing can match. Valid fields: {}.",
                    valid.join(", ")
                );
                warnings.push(msg);
            }

            let records = service.find_by_field(field, text);
            tracing::info!(field = %field, matches = records.len(), "Field search complete");

            QueryOutcome {
                records,
                groups: Vec::new(),
                warnings,
            }
        }
        Query::Duplicates => {
            let groups = service.duplicate_email_groups();
            let records: Vec<_> = groups
                .iter()
                .flat_map(|group| group.records.iter().copied())
                .collect();
            tracing::info!(
                groups = groups.len(),
                records = records.len(),
                "Duplicate email detection complete"
            );

            QueryOutcome {
                records,
                groups,
                warnings: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn sample_store() -> ClientStore {
        ClientStore::from_records(vec![
            ClientRecord::new(1, "Jane Smith", "jane@example.com"),
            ClientRecord::new(2, "John Doe", "john@example.com"),
            ClientRecord::new(3, "Another Jane", "JANE@example.com"),
        ])
    }

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_search_outcome() {
        let store = sample_store();
        let outcome = run(
            &store,
            &Query::Search {
                field: "full_name".to_string(),
                text: "doe".to_string(),
            },
        );
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.groups.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_unknown_field_warns_and_matches_nothing() {
        let store = sample_store();
        let outcome = run(
            &store,
            &Query::Search {
                field: "phone".to_string(),
                text: "555".to_string(),
            },
        );
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("id, full_name, email"));
    }

    #[test]
    fn test_unknown_field_warning_is_returned_not_logged() {
        let log = CapturedLog::default();
        let sink = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || sink.clone())
            .finish();

        let store = sample_store();
        let outcome = tracing::subscriber::with_default(subscriber, || {
            run(
                &store,
                &Query::Search {
                    field: "phone".to_string(),
                    text: "555".to_string(),
                },
            )
        });

        assert_eq!(outcome.warnings.len(), 1);
        let logged = log.text();
        assert!(logged.contains("Field search complete"), "log was: {logged}");
        assert!(!logged.contains("Unknown field"), "log was: {logged}");
    }

    #[test]
    fn test_duplicates_outcome_matches_service() {
        let store = sample_store();
        let outcome = run(&store, &Query::Duplicates);
        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.records, SearchService::new(&store).duplicate_emails());
    }
}
