// ClientSearch - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::{FIELD_EMAIL, FIELD_FULL_NAME, FIELD_ID};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

// =============================================================================
// Searchable fields
// =============================================================================

/// The attributes of a [`ClientRecord`] that can be looked up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientField {
    Id,
    FullName,
    Email,
}

impl ClientField {
    /// Returns all fields in record order.
    pub fn all() -> &'static [ClientField] {
        &[ClientField::Id, ClientField::FullName, ClientField::Email]
    }

    /// The JSON key for this field.
    pub fn name(&self) -> &'static str {
        match self {
            ClientField::Id => FIELD_ID,
            ClientField::FullName => FIELD_FULL_NAME,
            ClientField::Email => FIELD_EMAIL,
        }
    }

    /// Resolve a field by its JSON key. Exact, case-sensitive match.
    ///
    /// Returns `None` for anything other than the three declared fields.
    pub fn from_name(name: &str) -> Option<ClientField> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for ClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Client record
// =============================================================================

/// One client entry.
///
/// Attribute values are kept exactly as they appeared in the source object:
/// `{"id": 7}` holds a number, `{"id": "C-7"}` a string, and a `full_name`
/// of `12345` stays a number. `null` and missing keys both mean "absent".
/// Fields are private so a record cannot change after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRecord {
    id: Option<Value>,
    full_name: Option<Value>,
    email: Option<Value>,
}

impl ClientRecord {
    /// Build a record from any JSON-convertible values.
    ///
    /// Pass `Value::Null` for an absent attribute.
    pub fn new(
        id: impl Into<Value>,
        full_name: impl Into<Value>,
        email: impl Into<Value>,
    ) -> Self {
        Self {
            id: present(id.into()),
            full_name: present(full_name.into()),
            email: present(email.into()),
        }
    }

    /// Build a record from one JSON object of the client list.
    ///
    /// Missing keys and `null` values yield an absent attribute. Everything
    /// else is kept verbatim, whatever its JSON type. Unknown keys are ignored.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let take = |key: &str| object.get(key).cloned().and_then(present);
        Self {
            id: take(FIELD_ID),
            full_name: take(FIELD_FULL_NAME),
            email: take(FIELD_EMAIL),
        }
    }

    /// Raw value of `field` as loaded.
    pub fn get(&self, field: ClientField) -> Option<&Value> {
        match field {
            ClientField::Id => self.id.as_ref(),
            ClientField::FullName => self.full_name.as_ref(),
            ClientField::Email => self.email.as_ref(),
        }
    }

    /// Text form of `field`, or `None` when the attribute is absent.
    ///
    /// Strings are returned as-is; any other value is rendered as compact
    /// JSON (`17`, `2.5`, `true`).
    pub fn field_value(&self, field: ClientField) -> Option<Cow<'_, str>> {
        self.get(field).map(text_form)
    }

    /// Text form of the field called `name`.
    ///
    /// An unknown field name behaves exactly like an absent value.
    pub fn field_value_by_name(&self, name: &str) -> Option<Cow<'_, str>> {
        ClientField::from_name(name).and_then(|field| self.field_value(field))
    }

    pub fn id(&self) -> Option<Cow<'_, str>> {
        self.field_value(ClientField::Id)
    }

    pub fn full_name(&self) -> Option<Cow<'_, str>> {
        self.field_value(ClientField::FullName)
    }

    pub fn email(&self) -> Option<Cow<'_, str>> {
        self.field_value(ClientField::Email)
    }

    /// Canonical `{id, full_name, email}` mapping for output.
    ///
    /// Always carries all three keys; absent attributes become `null`.
    pub fn to_mapping(&self) -> Value {
        let map: Map<String, Value> = ClientField::all()
            .iter()
            .map(|field| {
                (
                    field.name().to_string(),
                    self.get(*field).cloned().unwrap_or(Value::Null),
                )
            })
            .collect();
        Value::Object(map)
    }
}

/// `null` is the only value treated as absent.
fn present(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        other => Some(other),
    }
}

fn text_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Short human-readable name of a JSON value's type, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("test fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn test_from_json_object_reads_all_fields() {
        let record = ClientRecord::from_json_object(&object(json!({
            "id": 1,
            "full_name": "Jane Smith",
            "email": "jane@example.com"
        })));
        assert_eq!(record.get(ClientField::Id), Some(&json!(1)));
        assert_eq!(record.full_name().as_deref(), Some("Jane Smith"));
        assert_eq!(record.email().as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_missing_and_null_fields_are_absent() {
        let record = ClientRecord::from_json_object(&object(json!({
            "full_name": null,
            "nickname": "JJ"
        })));
        assert_eq!(record.id(), None);
        assert_eq!(record.full_name(), None);
        assert_eq!(record.email(), None);
    }

    #[test]
    fn test_non_string_values_are_kept_verbatim() {
        let record = ClientRecord::from_json_object(&object(json!({
            "id": true,
            "full_name": 12345,
            "email": 2.5
        })));
        assert_eq!(record.get(ClientField::Id), Some(&json!(true)));
        assert_eq!(record.get(ClientField::FullName), Some(&json!(12345)));
        assert_eq!(record.id().as_deref(), Some("true"));
        assert_eq!(record.full_name().as_deref(), Some("12345"));
        assert_eq!(record.email().as_deref(), Some("2.5"));
        assert_eq!(
            record.to_mapping(),
            json!({"id": true, "full_name": 12345, "email": 2.5})
        );
    }

    #[test]
    fn test_string_id_is_kept_verbatim() {
        let record = ClientRecord::from_json_object(&object(json!({"id": "C-0042"})));
        assert_eq!(record.get(ClientField::Id), Some(&json!("C-0042")));
        assert_eq!(record.id().as_deref(), Some("C-0042"));
    }

    #[test]
    fn test_new_treats_null_as_absent() {
        let record = ClientRecord::new(17, Value::Null, "a@example.com");
        assert_eq!(record.id().as_deref(), Some("17"));
        assert_eq!(record.full_name(), None);
        assert_eq!(record.email().as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!(ClientField::from_name("id"), Some(ClientField::Id));
        assert_eq!(ClientField::from_name("full_name"), Some(ClientField::FullName));
        assert_eq!(ClientField::from_name("email"), Some(ClientField::Email));
        assert_eq!(ClientField::from_name("Email"), None);
        assert_eq!(ClientField::from_name("nonexistent"), None);
        assert_eq!(ClientField::from_name(""), None);
    }

    #[test]
    fn test_field_value_by_unknown_name_is_none() {
        let record = ClientRecord::new(1, "Jane", "j@x.io");
        assert!(record.field_value_by_name("to_mapping").is_none());
        assert_eq!(record.field_value_by_name("email").as_deref(), Some("j@x.io"));
    }

    #[test]
    fn test_to_mapping_has_all_keys() {
        let record = ClientRecord::new(2, "Bob Smith", Value::Null);
        assert_eq!(
            record.to_mapping(),
            json!({"id": 2, "full_name": "Bob Smith", "email": null})
        );
    }

    #[test]
    fn test_serialize_matches_mapping() {
        let record = ClientRecord::new("x1", "Ann", "ann@example.com");
        let serialised = serde_json::to_value(&record).unwrap();
        assert_eq!(serialised, record.to_mapping());
    }

    #[test]
    fn test_record_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientRecord>();
    }
}
