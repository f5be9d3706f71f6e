//! Localized message catalogs.
//!
//! Components that surface user-facing text take a [`Localize`] capability
//! instead of reading a process-wide translation object. [`Catalog`] is the
//! built-in implementation: a flat dotted-key map loadable from the nested
//! JSON documents translation files usually ship as.

use std::collections::HashMap;

use serde_json::Value;

/// Translation capability consumed by components that compose localized text.
pub trait Localize {
    /// Resolves `key` to display text.
    ///
    /// Implementations fall back to returning the key itself when no entry
    /// exists, so a missing translation degrades to a readable identifier
    /// instead of an empty message.
    fn translate(&self, key: &str) -> String;
}

/// Catalog lookup keys used by this crate.
pub mod keys {
    /// Title fragment of the fatal transaction message.
    pub const TRANSACTION_TITLE: &str = "transaction.title";
    /// Failure fragment of the fatal transaction message.
    pub const TRANSACTION_FAILED: &str = "transaction.failed";
}

/// Error type returned by [`Catalog::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid JSON.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A leaf value is not a string.
    #[error("unsupported value at '{key}': catalog leaves must be strings")]
    NonStringLeaf { key: String },
}

/// Flat key→text map with dotted-path lookup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates a catalog with no entries. Every lookup falls back to the key.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Loads a catalog from a JSON document.
    ///
    /// Nested objects flatten into dotted keys:
    /// `{"transaction": {"title": "Transaction"}}` stores `transaction.title`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(json)?;
        let mut entries = HashMap::new();
        flatten("", &root, &mut entries)?;
        Ok(Self { entries })
    }

    /// Adds or replaces a single entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Looks up a key without the fallback applied by [`Localize::translate`].
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Default for Catalog {
    /// Built-in English entries for the messages this crate composes itself.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(keys::TRANSACTION_TITLE, "Transaction");
        catalog.insert(keys::TRANSACTION_FAILED, "failed");
        catalog
    }
}

impl Localize for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}

fn flatten(
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(&key, child, out)?;
            }
            Ok(())
        }
        Value::String(text) => {
            out.insert(prefix.to_owned(), text.clone());
            Ok(())
        }
        _ => Err(CatalogError::NonStringLeaf {
            key: prefix.to_owned(),
        }),
    }
}
