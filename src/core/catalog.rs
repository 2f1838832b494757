//! # Document Catalog
//!
//! The static set of documentation sets the browser navigates. Loaded once at
//! startup (embedded TOML, or a file supplied through config) and shared
//! read-only for the rest of the session.
//!
//! ```text
//! Catalog
//! └── Document (key, name, enabled, overview)
//!     ├── Section (name)
//!     │   └── Item (id, name, count)
//!     └── details: item id → ItemDetail
//! ```
//!
//! Construction enforces the invariants the resolver relies on: document keys
//! are unique, section names are unique within a document, and item ids are
//! unique across the whole catalog.

use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub key: String,
    pub name: String,
    pub icon: Option<String>,
    pub version: Option<String>,
    /// Syntax token used to highlight code blocks (e.g. "css", "js").
    pub language: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub overview: Overview,
    #[serde(default)]
    pub details: HashMap<String, ItemDetail>,
}

impl Document {
    /// All items across all sections, in display order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items().find(|item| item.id == id)
    }

    pub fn contains_item(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    pub fn detail(&self, id: &str) -> Option<&ItemDetail> {
        self.details.get(id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub count: Option<u32>,
}

/// Landing content shown when a document is active but no item detail applies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Extra paragraph rendered below the description.
    pub note: Option<String>,
    #[serde(default)]
    pub sections: Vec<OverviewSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewSection {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// Deep-dive page for a single item.
///
/// Every optional field is a separate display block; `None` means the block
/// is not rendered at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDetail {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub syntax: Option<String>,
    pub examples: Option<Vec<Example>>,
    pub methods: Option<Vec<Method>>,
    pub properties: Option<Vec<Property>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Example {
    pub title: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub example: Option<String>,
    pub returns: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub example: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    DuplicateDocument(String),
    DuplicateSection { document: String, section: String },
    DuplicateItem { id: String, first: String, second: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateDocument(key) => {
                write!(f, "duplicate document key '{key}'")
            }
            CatalogError::DuplicateSection { document, section } => {
                write!(f, "duplicate section '{section}' in document '{document}'")
            }
            CatalogError::DuplicateItem { id, first, second } => write!(
                f,
                "item id '{id}' is defined in both '{first}' and '{second}'"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    documents: Vec<Document>,
}

/// Ordered, validated collection of documents.
#[derive(Debug, Clone)]
pub struct Catalog {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate keys, section names, and item ids.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(documents.len());
        let mut item_owners: HashMap<String, String> = HashMap::new();

        for (pos, doc) in documents.iter().enumerate() {
            if index.insert(doc.key.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateDocument(doc.key.clone()));
            }

            let mut section_names = HashSet::new();
            for section in &doc.sections {
                if !section_names.insert(section.name.as_str()) {
                    return Err(CatalogError::DuplicateSection {
                        document: doc.key.clone(),
                        section: section.name.clone(),
                    });
                }
                for item in &section.items {
                    if let Some(first) = item_owners.insert(item.id.clone(), doc.key.clone()) {
                        return Err(CatalogError::DuplicateItem {
                            id: item.id.clone(),
                            first,
                            second: doc.key.clone(),
                        });
                    }
                }
            }

            for id in doc.details.keys() {
                if !doc.contains_item(id) {
                    warn!(
                        "Detail '{}' in document '{}' has no sidebar entry and is unreachable",
                        id, doc.key
                    );
                }
            }
        }

        debug!(
            "Catalog built: {} documents, {} items",
            documents.len(),
            item_owners.len()
        );
        Ok(Self { documents, index })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents).map_err(CatalogError::Parse)?;
        Self::from_documents(file.documents)
    }

    /// Load a catalog from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(
            "Loaded catalog from {} ({} documents)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, key: &str) -> Option<&Document> {
        self.index.get(key).map(|&pos| &self.documents[pos])
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|d| d.enabled)
    }

    pub fn disabled(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|d| !d.enabled)
    }

    pub fn is_selectable(&self, key: &str) -> bool {
        self.get(key).is_some_and(|d| d.enabled)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
