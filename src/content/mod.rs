//! Service content table.
//!
//! The catalog is the only content surface of the site: adding or removing
//! an entry changes which `/services/<key>` pages exist. The built-in table
//! can be replaced by a content file (TOML, JSON or YAML) named in the
//! configuration.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SiteError};
use crate::models::ServiceRecord;

pub use builtin::HISTORIC_KEY;

/// On-disk layout of a content file.
#[derive(Debug, Deserialize)]
struct ContentFile {
    services: Vec<ServiceRecord>,
}

/// Keys become path segments, so only ASCII letters, digits, `-` and `_`.
fn is_valid_key(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Ordered, immutable table of service records.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    records: Vec<ServiceRecord>,
}

impl ServiceCatalog {
    /// Create a catalog, rejecting empty, duplicate or non-slug keys.
    pub fn new(records: Vec<ServiceRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.key.trim().is_empty() {
                return Err(SiteError::InvalidContent(
                    "service key must not be empty".to_string(),
                ));
            }
            if !is_valid_key(&record.key) {
                return Err(SiteError::InvalidContent(format!(
                    "service key must be a URL slug: {}",
                    record.key
                )));
            }
            if !seen.insert(record.key.as_str()) {
                return Err(SiteError::InvalidContent(format!(
                    "duplicate service key: {}",
                    record.key
                )));
            }
        }
        Ok(Self { records })
    }

    /// The content shipped with the site.
    pub fn builtin() -> Self {
        Self {
            records: builtin::records(),
        }
    }

    /// Load a catalog from a content file.
    /// The format is chosen by extension and defaults to JSON.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_error = |message: String| SiteError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let file: ContentFile = match ext {
            "toml" => toml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
            }
            _ => serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
        };

        tracing::debug!(
            "Loaded {} services from {}",
            file.services.len(),
            path.display()
        );
        Self::new(file.services)
    }

    /// Look up a record by key.
    pub fn get(&self, key: &str) -> Option<&ServiceRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    /// All keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
