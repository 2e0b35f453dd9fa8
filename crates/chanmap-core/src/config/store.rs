//! Ordered category store loaded from a mapping configuration document

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::path::expand_user;

use super::format;

/// The field consulted during resolution.
///
/// The document shape admits additional field tables, but only this one is
/// matched today.
pub const CHANNEL_FIELD: &str = "channel";

/// A named configuration block grouping a destination/temp directory pair
/// with field-mapping tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Outer key of the configuration document
    pub name: String,
    /// Destination root for matched items, user-home shorthand expanded
    pub home: Option<PathBuf>,
    /// Scratch location used while processing matched items
    pub temp: Option<PathBuf>,
    /// Field name to raw-value-to-replacement table, exact-match only
    pub fields: HashMap<String, HashMap<String, String>>,
}

impl Category {
    /// The raw-to-replacement table for the channel field, if declared.
    pub fn channel_table(&self) -> Option<&HashMap<String, String>> {
        self.fields.get(CHANNEL_FIELD)
    }
}

/// Immutable, ordered collection of [`Category`] records.
///
/// Loaded once at startup and shared read-only for the rest of the run.
/// Iteration order is the declaration order of the source document; the
/// resolver's first-match tie-break depends on it.
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    categories: Vec<Category>,
}

impl MappingStore {
    /// Load and validate a mapping configuration from a file.
    ///
    /// The format is detected from the content (JSON first, then YAML when
    /// the `yaml` feature is enabled). A missing file is
    /// [`Error::ConfigNotFound`]; a syntactically invalid document or one
    /// whose shape does not match the expected structure is
    /// [`Error::ConfigParse`]. No partial store is ever produced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let (document, detected) =
            format::parse_document(&content).map_err(|message| Error::parse(path, message))?;
        tracing::debug!(?path, format = %detected, "Parsed mapping config");

        let store = Self::from_document(document).map_err(|message| Error::parse(path, message))?;
        tracing::debug!(categories = store.len(), "Loaded mapping config");
        Ok(store)
    }

    /// Build a store from an already-parsed document.
    ///
    /// Validation is strict: any shape mismatch rejects the whole document
    /// rather than degrading to partial or default data.
    fn from_document(document: Value) -> std::result::Result<Self, String> {
        let Value::Object(root) = document else {
            return Err(
                "top level must be a mapping of category name to category object".to_string(),
            );
        };

        let mut categories = Vec::with_capacity(root.len());
        for (name, entry) in root {
            let Value::Object(body) = entry else {
                return Err(format!("category {name:?} must be a mapping"));
            };

            let home = dir_entry(&body, "home", &name)?;
            let temp = dir_entry(&body, "temp", &name)?;
            let fields = field_tables(&body, &name)?;

            categories.push(Category {
                name,
                home,
                temp,
                fields,
            });
        }

        Ok(Self { categories })
    }

    /// Categories in document declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Read an optional directory value (`home` or `temp`) from a category body.
///
/// Absent, null, or empty values are unset. User-home shorthand is expanded
/// here, at load time, so resolution never re-touches the filesystem.
fn dir_entry(
    body: &serde_json::Map<String, Value>,
    key: &str,
    category: &str,
) -> std::result::Result<Option<PathBuf>, String> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(expand_user(s))),
        Some(other) => Err(format!(
            "category {category:?}: {key:?} must be a string, got {other}"
        )),
    }
}

/// Read the `field` tables from a category body.
///
/// Missing `field` yields an empty set of tables; the category still loads
/// and is simply unreachable for matching.
fn field_tables(
    body: &serde_json::Map<String, Value>,
    category: &str,
) -> std::result::Result<HashMap<String, HashMap<String, String>>, String> {
    let field_obj = match body.get("field") {
        None | Some(Value::Null) => return Ok(HashMap::new()),
        Some(Value::Object(obj)) => obj,
        Some(_) => {
            return Err(format!(
                "category {category:?}: \"field\" must be a mapping of field name to value table"
            ));
        }
    };

    let mut fields = HashMap::with_capacity(field_obj.len());
    for (field_name, table) in field_obj {
        let entries = match table {
            Value::Null => HashMap::new(),
            Value::Object(entries) => {
                let mut out = HashMap::with_capacity(entries.len());
                for (raw, replacement) in entries {
                    let Value::String(replacement) = replacement else {
                        return Err(format!(
                            "category {category:?}, field {field_name:?}: \
                             replacement for {raw:?} must be a string"
                        ));
                    };
                    out.insert(raw.clone(), replacement.clone());
                }
                out
            }
            _ => {
                return Err(format!(
                    "category {category:?}: field {field_name:?} must be a mapping \
                     of raw value to replacement"
                ));
            }
        };
        fields.insert(field_name.clone(), entries);
    }
    Ok(fields)
}
