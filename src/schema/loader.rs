//! Schema loading from JSON.
//!
//! The bundled table lives in `schema/wam_classes.json` and is compiled
//! into the binary; a file with the same layout can replace it at runtime.

use super::table::{ClassEntry, Schema};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::SchemaError;
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUILTIN_SCHEMA_JSON: &str = include_str!("../../schema/wam_classes.json");

/// On-disk layout of a schema file
#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default = "default_version")]
    version: u32,
    classes: Vec<ClassRecord>,
}

/// One class as written in a schema file
#[derive(Debug, Deserialize)]
struct ClassRecord {
    id: i32,
    description: String,
    #[serde(default = "default_weight")]
    weight: i64,
    /// JSON object keys are strings, so field ids are parsed afterwards
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

fn default_weight() -> i64 {
    1
}

impl Schema {
    /// Bundled WAM class table
    ///
    /// # Errors
    /// Only if the bundled JSON is malformed, which the test suite guards.
    pub fn builtin() -> Result<Self, SchemaError> {
        Self::from_json_str(BUILTIN_SCHEMA_JSON)
    }

    /// Load a schema table from a JSON file
    ///
    /// # Errors
    /// * `SchemaError::Io` - file cannot be read
    /// * `SchemaError::Json` - invalid JSON or wrong layout
    /// * `SchemaError::DuplicateClass` / `InvalidFieldId` - inconsistent table
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        info!("Loading schema from: {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a schema table from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let file: SchemaFile = serde_json::from_str(json)?;

        if file.version != SCHEMA_VERSION {
            warn!(
                "Schema version {} differs from supported version {}",
                file.version, SCHEMA_VERSION
            );
        }

        let mut schema = Schema::new();
        for class in file.classes {
            let entry = to_entry(class)?;
            let id = entry.id;
            if schema.insert(entry).is_some() {
                return Err(SchemaError::DuplicateClass(id));
            }
        }

        debug!("Loaded schema with {} classes", schema.len());
        Ok(schema)
    }
}

/// Convert a file record into a table entry
///
/// **Private** - internal helper for from_json_str
fn to_entry(class: ClassRecord) -> Result<ClassEntry, SchemaError> {
    let mut entry = ClassEntry::new(class.id, class.description).with_weight(class.weight);
    for (key, name) in class.fields {
        let field_id = key
            .trim()
            .parse::<i32>()
            .map_err(|_| SchemaError::InvalidFieldId {
                class_id: class.id,
                field: key.clone(),
            })?;
        entry.fields.insert(field_id, name);
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::{ROOT_CLASS_ID, TIMESTAMP_FIELD_ID};

    #[test]
    fn builtin_table_loads() {
        let schema = Schema::builtin().unwrap();
        assert_eq!(schema.len(), 65);
        assert_eq!(
            schema.field_name(ROOT_CLASS_ID, TIMESTAMP_FIELD_ID),
            Some("Timestamp")
        );
        assert_eq!(schema.class_description(450), Some("WamMessageReceive"));
        assert_eq!(schema.field_name(854, 11), Some("messageSendT"));
    }

    #[test]
    fn missing_weight_and_fields_default() {
        let schema =
            Schema::from_json_str(r#"{"classes": [{"id": 5, "description": "Bare"}]}"#).unwrap();
        let class = schema.class(5).unwrap();
        assert_eq!(class.weight, 1);
        assert!(class.fields.is_empty());
    }

    #[test]
    fn rejects_duplicate_class() {
        let json = r#"{"version": 1, "classes": [
            {"id": 5, "description": "A"},
            {"id": 5, "description": "B"}
        ]}"#;
        assert!(matches!(
            Schema::from_json_str(json),
            Err(SchemaError::DuplicateClass(5))
        ));
    }

    #[test]
    fn rejects_non_numeric_field_key() {
        let json = r#"{"classes": [{"id": 5, "description": "A", "fields": {"x": "y"}}]}"#;
        assert!(matches!(
            Schema::from_json_str(json),
            Err(SchemaError::InvalidFieldId { class_id: 5, .. })
        ));
    }
}
