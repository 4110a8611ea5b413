// ClientSearch - core/store.rs
//
// Load-once, read-only ordered collection of client records.
// The JSON loader is all-or-nothing: a store is only ever built from a
// fully parsed document.

use crate::core::model::{json_type_name, ClientRecord};
use crate::util::constants;
use crate::util::error::StoreError;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// In-memory client list, in source order.
///
/// There are no mutating methods; queries borrow the records through
/// [`ClientStore::records`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientStore {
    records: Vec<ClientRecord>,
}

impl ClientStore {
    /// Wrap an existing sequence of records, keeping the supplied order.
    pub fn from_records(records: Vec<ClientRecord>) -> Self {
        Self { records }
    }

    /// Load a JSON client list from `path` using the default size cap.
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        Self::load_from_file_with_limit(path, constants::DEFAULT_MAX_FILE_BYTES)
    }

    /// Load a JSON client list from `path`, refusing files over `max_bytes`.
    pub fn load_from_file_with_limit(path: &Path, max_bytes: u64) -> Result<Self, StoreError> {
        let metadata = std::fs::metadata(path).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if metadata.len() > max_bytes {
            return Err(StoreError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max_size: max_bytes,
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let store = Self::from_json_str(&content, path)?;
        tracing::info!(
            path = %path.display(),
            records = store.len(),
            "Client list loaded"
        );
        Ok(store)
    }

    /// Parse a JSON client list held in memory.
    ///
    /// `origin` only labels errors; nothing is read from it.
    pub fn from_json_str(content: &str, origin: &Path) -> Result<Self, StoreError> {
        let document: Value = serde_json::from_str(content).map_err(|e| StoreError::Json {
            path: origin.to_path_buf(),
            source: e,
        })?;

        let elements = match document {
            Value::Array(elements) => elements,
            other => {
                return Err(StoreError::NotAnArray {
                    path: origin.to_path_buf(),
                    found: json_type_name(&other),
                })
            }
        };

        let records = elements
            .iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::Object(object) => Ok(ClientRecord::from_json_object(object)),
                other => Err(StoreError::ElementNotObject {
                    path: PathBuf::from(origin),
                    index,
                    found: json_type_name(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_records(records))
    }

    /// All records, in source order.
    pub fn records(&self) -> &[ClientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ClientRecord>> for ClientStore {
    fn from(records: Vec<ClientRecord>) -> Self {
        Self::from_records(records)
    }
}
