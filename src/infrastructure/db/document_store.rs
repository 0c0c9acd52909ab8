use std::{cmp::Ordering, fmt};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// A stored record: always a JSON object carrying an `id` field.
pub type Document = Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Artworks,
    Testimonials,
    Services,
    Blog,
    Contacts,
    Commissions,
    Newsletter,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Artworks,
        Collection::Testimonials,
        Collection::Services,
        Collection::Blog,
        Collection::Contacts,
        Collection::Commissions,
        Collection::Newsletter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Artworks => "artworks",
            Collection::Testimonials => "testimonials",
            Collection::Services => "services",
            Collection::Blog => "blog",
            Collection::Contacts => "contacts",
            Collection::Commissions => "commissions",
            Collection::Newsletter => "newsletter",
        }
    }

    /// Storage-level uniqueness rule for the collection. The Postgres
    /// migration declares the same rules as partial unique indexes.
    pub fn unique_constraint(&self) -> Option<UniqueConstraint> {
        match self {
            Collection::Newsletter => Some(UniqueConstraint {
                field: "email",
                scope: None,
            }),
            Collection::Testimonials => Some(UniqueConstraint {
                field: "email",
                scope: Some(("status", &["pending", "approved"])),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive uniqueness on `field`, optionally only among documents
/// whose `scope.0` field holds one of the `scope.1` values.
#[derive(Debug, Clone, Copy)]
pub struct UniqueConstraint {
    pub field: &'static str,
    pub scope: Option<(&'static str, &'static [&'static str])>,
}

impl UniqueConstraint {
    /// The key this document occupies, or `None` if the rule does not cover it.
    pub fn key(&self, doc: &Document) -> Option<String> {
        if let Some((scope_field, values)) = self.scope {
            let in_scope = doc
                .get(scope_field)
                .and_then(Value::as_str)
                .is_some_and(|v| values.contains(&v));
            if !in_scope {
                return None;
            }
        }
        doc.get(self.field)
            .and_then(Value::as_str)
            .map(|v| v.trim().to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortBy {
    pub field: &'static str,
    pub descending: bool,
}

/// Equality filter plus optional ordering. Sort fields must hold RFC 3339
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filter: Map<String, Value>,
    pub sort: Option<SortBy>,
}

impl Query {
    pub fn all() -> Self {
        Query::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter.insert(field.to_string(), value.into());
        self
    }

    pub fn newest_first(mut self, field: &'static str) -> Self {
        self.sort = Some(SortBy { field, descending: true });
        self
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.filter
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }

    /// Orders two documents by the sort field; timestamps compare as instants.
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let Some(sort) = self.sort else {
            return Ordering::Equal;
        };
        let ordering = compare_timestamps(a.get(sort.field), b.get(sort.field));
        if sort.descending { ordering.reverse() } else { ordering }
    }
}

fn parse_timestamp(value: Option<&Value>) -> Option<DateTime<FixedOffset>> {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

fn compare_timestamps(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// The persistence client shared by every request. One instance exists per
/// process; it is built in `main` and handed to the handlers.
///
/// `connect` is idempotent. A failed connect is not remembered, so the next
/// operation tries again. Writes that break a collection's
/// [`UniqueConstraint`] fail with [`AppError::Conflict`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn connect(&self) -> Result<(), AppError>;
    async fn close(&self);
    async fn ping(&self) -> Result<(), AppError>;
    async fn insert_one(&self, collection: Collection, doc: Document) -> Result<(), AppError>;
    /// All-or-nothing bulk insert.
    async fn insert_many(&self, collection: Collection, docs: Vec<Document>) -> Result<u64, AppError>;
    async fn find(&self, collection: Collection, query: &Query) -> Result<Vec<Document>, AppError>;
    async fn count(&self, collection: Collection) -> Result<u64, AppError>;
}
