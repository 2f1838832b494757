//! # Search Filter
//!
//! Narrows the catalog to the documents matching a free-text query.
//!
//! Matching is a plain case-insensitive substring test against the document
//! name and every nested item name. There is no ranking and no fuzzy matching:
//! results keep catalog order, and `"bgcp"` does not find `"background-clip"`.

use crate::core::catalog::{Catalog, Document};

/// Enabled documents matching `query`, in catalog order.
///
/// An empty query returns every enabled document. Disabled documents never
/// appear, whatever the query.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Document> {
    if query.is_empty() {
        return catalog.enabled().collect();
    }

    let needle = query.to_lowercase();
    catalog
        .enabled()
        .filter(|doc| matches(doc, &needle))
        .collect()
}

/// Whether `doc` matches an already-lowercased needle.
pub fn matches(doc: &Document, needle: &str) -> bool {
    contains_ignore_case(&doc.name, needle)
        || doc.items().any(|item| contains_ignore_case(&item.name, needle))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
