//! DevDocs library exports: the pure browsing core and its terminal adapter.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
