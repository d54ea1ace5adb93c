//! Case-insensitive text search over configurable fields.
//!
//! A record matches when any configured field contains the query as a
//! substring, ignoring case. An empty or whitespace-only query matches
//! everything, at every call site.

use tracing::debug;

use vetguardian_contracts::{appointment::Appointment, veteran::Veteran};

/// A field a search can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Id,
    Conditions,
    Status,
}

/// Fields the clinician patient search uses.
pub const PATIENT_SEARCH_FIELDS: [SearchField; 3] =
    [SearchField::Name, SearchField::Id, SearchField::Conditions];

/// A record that exposes text for each `SearchField` it supports.
///
/// Fields a record does not have yield an empty list.
pub trait Searchable {
    fn field_values(&self, field: SearchField) -> Vec<&str>;
}

impl Searchable for Veteran {
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Name => vec![self.name.as_str()],
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Conditions => self.conditions.iter().map(String::as_str).collect(),
            SearchField::Status => vec![],
        }
    }
}

impl Searchable for Appointment {
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Name => vec![self.title.as_str(), self.provider_name.as_str()],
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Conditions => vec![self.department.as_str()],
            SearchField::Status => vec![self.status.as_str()],
        }
    }
}

/// True when `query` is blank or some field in `fields` contains it.
pub fn matches_query<T: Searchable>(item: &T, query: &str, fields: &[SearchField]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_needle(item, &needle, fields)
}

/// The records of `items` that match `query`, in input order.
pub fn filter_by_query<T: Searchable + Clone>(
    items: &[T],
    query: &str,
    fields: &[SearchField],
) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    let hits: Vec<T> = items
        .iter()
        .filter(|item| contains_needle(*item, &needle, fields))
        .cloned()
        .collect();

    debug!(query = %needle, candidates = items.len(), hits = hits.len(), "text search");
    hits
}

fn contains_needle<T: Searchable>(item: &T, needle: &str, fields: &[SearchField]) -> bool {
    fields.iter().any(|field| {
        item.field_values(*field)
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
    })
}
