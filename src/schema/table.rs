//! In-memory schema table.

use std::collections::BTreeMap;

/// Labels for one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub id: i32,
    pub description: String,
    /// Sampling weight of the class (metadata only)
    pub weight: i64,
    pub fields: BTreeMap<i32, String>,
}

impl ClassEntry {
    pub fn new(id: i32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            weight: 1,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_field(mut self, id: i32, name: impl Into<String>) -> Self {
        self.fields.insert(id, name.into());
        self
    }

    pub fn field_name(&self, field_id: i32) -> Option<&str> {
        self.fields.get(&field_id).map(String::as_str)
    }
}

/// Read-only mapping from class id to its labels
///
/// Lookups never fail: an unknown class or field simply has no label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    classes: BTreeMap<i32, ClassEntry>,
}

impl Schema {
    /// Empty schema; every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a class entry
    pub fn with_class(mut self, entry: ClassEntry) -> Self {
        self.insert(entry);
        self
    }

    /// Insert a class entry, returning the one it replaced
    pub fn insert(&mut self, entry: ClassEntry) -> Option<ClassEntry> {
        self.classes.insert(entry.id, entry)
    }

    pub fn class(&self, class_id: i32) -> Option<&ClassEntry> {
        self.classes.get(&class_id)
    }

    pub fn class_description(&self, class_id: i32) -> Option<&str> {
        self.class(class_id).map(|c| c.description.as_str())
    }

    pub fn field_name(&self, class_id: i32, field_id: i32) -> Option<&str> {
        self.class(class_id)?.field_name(field_id)
    }

    /// Class entries ordered by id
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
