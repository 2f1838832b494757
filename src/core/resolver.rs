//! # Content Resolver
//!
//! Decides what the content pane shows for a given selection. Total: every
//! selection maps to exactly one `DisplayMode`, first match wins.
//!
//! ```text
//! show_welcome ──────────────────────────────→ Welcome
//! no active doc / doc missing ───────────────→ EmptyPlaceholder
//! active item with a details entry ──────────→ ItemDetail
//! otherwise ─────────────────────────────────→ DocumentOverview
//! ```

use crate::core::catalog::{Catalog, Document, Example, ItemDetail, Method, Property};
use crate::core::state::Selection;

#[derive(Debug, Clone, Copy)]
pub enum DisplayMode<'a> {
    Welcome,
    EmptyPlaceholder,
    ItemDetail {
        document: &'a Document,
        detail: &'a ItemDetail,
    },
    DocumentOverview(&'a Document),
}

pub fn resolve<'a>(selection: &Selection, catalog: &'a Catalog) -> DisplayMode<'a> {
    if selection.show_welcome() {
        return DisplayMode::Welcome;
    }

    let Some(document) = selection.active_document().and_then(|key| catalog.get(key)) else {
        return DisplayMode::EmptyPlaceholder;
    };

    match selection.active_item().and_then(|id| document.detail(id)) {
        Some(detail) => DisplayMode::ItemDetail { document, detail },
        None => DisplayMode::DocumentOverview(document),
    }
}

/// One optional block of an item's detail page.
#[derive(Debug, Clone, Copy)]
pub enum DetailBlock<'a> {
    Syntax(&'a str),
    Examples(&'a [Example]),
    Methods(&'a [Method]),
    Properties(&'a [Property]),
}

impl DetailBlock<'_> {
    pub fn heading(&self) -> &'static str {
        match self {
            DetailBlock::Syntax(_) => "Syntax",
            DetailBlock::Examples(_) => "Examples",
            DetailBlock::Methods(_) => "Methods",
            DetailBlock::Properties(_) => "Properties",
        }
    }
}

/// The blocks present in `detail`, always in syntax → examples → methods →
/// properties order. An empty list still yields its block.
pub fn detail_blocks(detail: &ItemDetail) -> Vec<DetailBlock<'_>> {
    let mut blocks = Vec::with_capacity(4);
    if let Some(syntax) = &detail.syntax {
        blocks.push(DetailBlock::Syntax(syntax));
    }
    if let Some(examples) = &detail.examples {
        blocks.push(DetailBlock::Examples(examples));
    }
    if let Some(methods) = &detail.methods {
        blocks.push(DetailBlock::Methods(methods));
    }
    if let Some(properties) = &detail.properties {
        blocks.push(DetailBlock::Properties(properties));
    }
    blocks
}
