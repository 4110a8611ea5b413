// ClientSearch - core/search.rs
//
// Read-only query layer over a ClientStore.
// Every query is a linear scan in store order; nothing is cached or indexed.
// Core layer: pure logic, no I/O.

use crate::core::model::{ClientField, ClientRecord};
use crate::core::store::ClientStore;
use std::collections::HashMap;

/// Records sharing one email address, compared case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup<'a> {
    /// The lower-cased email shared by every member.
    pub email: String,

    /// Members in store order. Always at least two.
    pub records: Vec<&'a ClientRecord>,
}

/// Stateless query service borrowing a single store.
///
/// Many services may share one store; none of them can modify it.
#[derive(Debug, Clone, Copy)]
pub struct SearchService<'a> {
    store: &'a ClientStore,
}

impl<'a> SearchService<'a> {
    pub fn new(store: &'a ClientStore) -> Self {
        Self { store }
    }

    /// The store this service queries.
    pub fn store(&self) -> &'a ClientStore {
        self.store
    }

    /// Records whose `field` contains `query`, ignoring case.
    ///
    /// Unknown field names and absent values never match. An empty query
    /// matches every record that has a value for the field. Result order
    /// follows store order.
    pub fn find_by_field(&self, field: &str, query: &str) -> Vec<&'a ClientRecord> {
        match ClientField::from_name(field) {
            Some(field) => self.find_by(field, query),
            None => {
                tracing::debug!(field, "Search on unknown field matches nothing");
                Vec::new()
            }
        }
    }

    /// Typed form of [`SearchService::find_by_field`].
    pub fn find_by(&self, field: ClientField, query: &str) -> Vec<&'a ClientRecord> {
        let query_lower = query.to_lowercase();

        self.store
            .records()
            .iter()
            .filter(|record| matches_field(record, field, &query_lower))
            .collect()
    }

    /// Every record whose email is shared with at least one other record.
    ///
    /// Emails are compared case-insensitively. Records without an email
    /// take no part in duplicate detection. Groups appear in order of
    /// their first member; members keep store order.
    pub fn duplicate_emails(&self) -> Vec<&'a ClientRecord> {
        self.duplicate_email_groups()
            .into_iter()
            .flat_map(|group| group.records)
            .collect()
    }

    /// Grouped form of [`SearchService::duplicate_emails`].
    pub fn duplicate_email_groups(&self) -> Vec<DuplicateGroup<'a>> {
        let mut groups: Vec<DuplicateGroup<'a>> = Vec::new();
        let mut index_by_email: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for record in self.store.records() {
            let Some(email) = record.email() else {
                skipped += 1;
                continue;
            };
            let key = email.to_lowercase();
            match index_by_email.get(&key) {
                Some(&idx) => groups[idx].records.push(record),
                None => {
                    index_by_email.insert(key.clone(), groups.len());
                    groups.push(DuplicateGroup {
                        email: key,
                        records: vec![record],
                    });
                }
            }
        }

        groups.retain(|group| group.records.len() > 1);

        tracing::debug!(
            groups = groups.len(),
            without_email = skipped,
            "Duplicate email scan complete"
        );

        groups
    }
}

/// Check a single record against a lower-cased query.
fn matches_field(record: &ClientRecord, field: ClientField, query_lower: &str) -> bool {
    record
        .field_value(field)
        .is_some_and(|value| value.to_lowercase().contains(query_lower))
}
