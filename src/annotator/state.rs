//! Class-context state machine.
//!
//! Walks the record sequence in order, tracking which class is open so
//! field ids can be resolved to names. The context is flat: a class end
//! always returns to the root, never to an enclosing class.

use super::timestamp::timestamp_annotation;
use crate::parser::{ClassType, Record, Value};
use crate::schema::Schema;
use crate::utils::config::ROOT_CLASS_ID;
use log::trace;
use serde::Serialize;

/// The annotator's only mutable state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    current_class_id: i32,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            current_class_id: ROOT_CLASS_ID,
        }
    }

    pub fn current_class_id(&self) -> i32 {
        self.current_class_id
    }

    pub fn is_root(&self) -> bool {
        self.current_class_id == ROOT_CLASS_ID
    }

    fn enter(&mut self, class_id: i32) {
        self.current_class_id = class_id;
    }

    fn reset(&mut self) {
        self.current_class_id = ROOT_CLASS_ID;
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// What a record's label names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Class,
    Field,
}

/// A record together with everything resolved for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRecord {
    pub class_type: ClassType,
    pub id: i32,
    pub label_kind: LabelKind,
    /// Class description or field name; `None` when the schema has no entry
    pub label: Option<String>,
    pub value: Value,
    /// Calendar rendering of the root timestamp field
    pub timestamp: Option<String>,
    /// Class id in effect once this record was applied
    pub class_id: i32,
    /// Opens a class; listings put a blank line before it
    pub starts_class: bool,
    pub chunk_end: bool,
}

/// Stateful fold over a record sequence
#[derive(Debug)]
pub struct Annotator<'s> {
    schema: &'s Schema,
    context: RenderContext,
}

impl<'s> Annotator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            context: RenderContext::new(),
        }
    }

    pub fn context(&self) -> RenderContext {
        self.context
    }

    pub fn current_class_id(&self) -> i32 {
        self.context.current_class_id()
    }

    /// Resolve one record and advance the context
    pub fn annotate(&mut self, record: &Record) -> AnnotatedRecord {
        let starts_class = record.class_type.is_begin();

        let (label_kind, label) = if starts_class {
            let label = self.schema.class_description(record.id);
            // Entered even when the class is unknown
            self.context.enter(record.id);
            (LabelKind::Class, label)
        } else {
            let label = self
                .schema
                .field_name(self.context.current_class_id(), record.id);
            (LabelKind::Field, label)
        };

        let class_id = self.context.current_class_id();
        let timestamp = timestamp_annotation(class_id, record);

        if record.is_class_end {
            trace!("Class {} closed by record {}", class_id, record.id);
            self.context.reset();
        }

        AnnotatedRecord {
            class_type: record.class_type,
            id: record.id,
            label_kind,
            label: label.map(str::to_string),
            value: record.value.clone(),
            timestamp,
            class_id,
            starts_class,
            chunk_end: record.is_class_end,
        }
    }
}

/// Annotate a whole sequence with a fresh context
pub fn annotate_all(schema: &Schema, records: &[Record]) -> Vec<AnnotatedRecord> {
    let mut annotator = Annotator::new(schema);
    records.iter().map(|r| annotator.annotate(r)).collect()
}
