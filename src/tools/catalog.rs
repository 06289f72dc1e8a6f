//! Tool catalog loading from TOML configuration
//!
//! Holds an ordered list of descriptors, seeded from the built-in table
//! and/or TOML catalog files, and provides lookup methods.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TextkitError};

use super::builtins::TEXT_TOOLS;
use super::definition::ToolDescriptor;

/// TOML representation of a tool descriptor
#[derive(Debug, Deserialize)]
struct TomlTool {
    page: String,
    name: String,
    description: Option<String>,
    placeholder: Option<String>,
}

/// TOML file structure
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(rename = "tool", default)]
    tools: Vec<TomlTool>,
}

impl TomlTool {
    fn into_descriptor(self) -> ToolDescriptor {
        let mut tool = ToolDescriptor::new(self.page, self.name);
        if let Some(description) = self.description {
            tool = tool.with_description(description);
        }
        if let Some(placeholder) = self.placeholder {
            tool = tool.with_placeholder(placeholder);
        }
        tool
    }
}

/// Ordered catalog of tool descriptors.
///
/// Insertion order is menu order. Duplicate pages are accepted on `add`;
/// lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Create a catalog holding the built-in text tools
    pub fn with_builtins() -> Self {
        Self {
            tools: TEXT_TOOLS.to_vec(),
        }
    }

    /// Load catalog from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TextkitError::Catalog(format!("Failed to read catalog file {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml(&content)?;
        log::debug!("Loaded {} tools from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load catalog from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: TomlCatalog = toml::from_str(content)
            .map_err(|e| TextkitError::Catalog(format!("Failed to parse TOML: {}", e)))?;

        Ok(Self {
            tools: catalog.tools.into_iter().map(TomlTool::into_descriptor).collect(),
        })
    }

    /// Get the first tool registered under `page`
    pub fn get(&self, page: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.page == page)
    }

    /// Like `get`, but a missing page is an error
    pub fn require(&self, page: &str) -> Result<&ToolDescriptor> {
        self.get(page)
            .ok_or_else(|| TextkitError::ToolNotFound(page.to_string()))
    }

    /// List all page ids in menu order
    pub fn pages(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.page.as_ref()).collect()
    }

    /// Iterate tools in menu order
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// All tools as a slice
    pub fn as_slice(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Append a tool, even if its page is already present
    pub fn add(&mut self, tool: ToolDescriptor) {
        self.tools.push(tool);
    }

    /// Replace the first tool with the same page in place, or append
    pub fn upsert(&mut self, tool: ToolDescriptor) {
        match self.tools.iter_mut().find(|t| t.page == tool.page) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    /// Upsert every tool of `other`, in its order
    pub fn overlay(&mut self, other: ToolCatalog) {
        for tool in other.tools {
            self.upsert(tool);
        }
    }

    /// Remove the first tool registered under `page`
    pub fn remove(&mut self, page: &str) -> Option<ToolDescriptor> {
        let index = self.tools.iter().position(|t| t.page == page)?;
        Some(self.tools.remove(index))
    }

    /// Check if a tool exists
    pub fn contains(&self, page: &str) -> bool {
        self.get(page).is_some()
    }

    /// Case-insensitive substring search over page, name and description
    pub fn search(&self, query: &str) -> Vec<&ToolDescriptor> {
        let needle = query.to_lowercase();
        self.tools
            .iter()
            .filter(|t| {
                t.page.to_lowercase().contains(&needle)
                    || t.name.to_lowercase().contains(&needle)
                    || t
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ToolCatalog {
    type Item = &'a ToolDescriptor;
    type IntoIter = std::slice::Iter<'a, ToolDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TOML: &str = r#"
[[tool]]
page = "base64"
name = "Base64 인코더"
description = "Encode and decode Base64"

[[tool]]
page = "url-encoder"
name = "URL 인코더"
placeholder = "https://example.com/?q=검색"

[[tool]]
page = "hash"
name = "해시 생성기 (SHA)"
"#;

    #[test]
    fn test_catalog_new_empty() {
        let catalog = ToolCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_catalog_default() {
        let catalog = ToolCatalog::default();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_catalog_with_builtins() {
        let catalog = ToolCatalog::with_builtins();
        assert_eq!(catalog.len(), TEXT_TOOLS.len());
        assert_eq!(catalog.as_slice(), TEXT_TOOLS);
    }

    #[test]
    fn test_catalog_from_toml() {
        let catalog = ToolCatalog::from_toml(SAMPLE_TOML).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.pages(), vec!["base64", "url-encoder", "hash"]);
    }

    #[test]
    fn test_catalog_get() {
        let catalog = ToolCatalog::from_toml(SAMPLE_TOML).unwrap();

        let tool = catalog.get("base64").unwrap();
        assert_eq!(tool.name, "Base64 인코더");
        assert_eq!(tool.description.as_deref(), Some("Encode and decode Base64"));
        assert!(tool.placeholder.is_none());

        let tool = catalog.get("url-encoder").unwrap();
        assert!(tool.description.is_none());
        assert_eq!(tool.placeholder.as_deref(), Some("https://example.com/?q=검색"));
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = ToolCatalog::from_toml(SAMPLE_TOML).unwrap();
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_catalog_require() {
        let catalog = ToolCatalog::with_builtins();
        assert_eq!(catalog.require("hash").unwrap().page, "hash");

        let err = catalog.require("nope").unwrap_err();
        assert!(matches!(err, TextkitError::ToolNotFound(ref p) if p == "nope"));
    }

    #[test]
    fn test_catalog_add_keeps_duplicates() {
        let mut catalog = ToolCatalog::new();
        catalog.add(ToolDescriptor::new("hash", "first"));
        catalog.add(ToolDescriptor::new("hash", "second"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("hash").unwrap().name, "first");
    }

    #[test]
    fn test_catalog_upsert_replaces_in_place() {
        let mut catalog = ToolCatalog::with_builtins();
        catalog.upsert(ToolDescriptor::new("array-converter", "배열 변환기"));

        assert_eq!(catalog.len(), TEXT_TOOLS.len());
        assert_eq!(catalog.pages()[1], "array-converter");
        let tool = catalog.get("array-converter").unwrap();
        assert_eq!(tool.name, "배열 변환기");
        assert!(tool.description.is_none());
    }

    #[test]
    fn test_catalog_upsert_appends_new() {
        let mut catalog = ToolCatalog::with_builtins();
        catalog.upsert(ToolDescriptor::new("base64", "Base64"));
        assert_eq!(catalog.pages().last(), Some(&"base64"));
    }

    #[test]
    fn test_catalog_overlay() {
        let mut catalog = ToolCatalog::with_builtins();
        catalog.overlay(ToolCatalog::from_toml(SAMPLE_TOML).unwrap());

        assert_eq!(catalog.len(), TEXT_TOOLS.len() + 2);
        assert_eq!(catalog.pages()[0], "hash");
        assert_eq!(catalog.get("hash").unwrap().name, "해시 생성기 (SHA)");
        assert_eq!(
            &catalog.pages()[TEXT_TOOLS.len()..],
            &["base64", "url-encoder"]
        );
    }

    #[test]
    fn test_catalog_remove() {
        let mut catalog = ToolCatalog::with_builtins();
        let removed = catalog.remove("jwt-decoder");

        assert_eq!(removed.unwrap().name, "JWT 디코더");
        assert!(!catalog.contains("jwt-decoder"));
        assert_eq!(catalog.len(), TEXT_TOOLS.len() - 1);
        assert!(catalog.remove("jwt-decoder").is_none());
    }

    #[test]
    fn test_catalog_search() {
        let catalog = ToolCatalog::with_builtins();

        let hits: Vec<_> = catalog.search("JSON").iter().map(|t| t.page.to_string()).collect();
        assert_eq!(hits, vec!["array-converter"]);

        let hits = catalog.search("jwt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page, "jwt-decoder");

        assert!(catalog.search("nothing-matches").is_empty());
    }

    #[test]
    fn test_catalog_iter_order() {
        let catalog = ToolCatalog::with_builtins();
        let names: Vec<_> = (&catalog).into_iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names[0], "해시 생성기");
        assert_eq!(catalog.iter().count(), TEXT_TOOLS.len());
    }

    #[test]
    fn test_catalog_empty_toml() {
        let catalog = ToolCatalog::from_toml("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_catalog_invalid_toml() {
        let result = ToolCatalog::from_toml("invalid { toml }");
        assert!(matches!(result, Err(TextkitError::Catalog(_))));
    }

    #[test]
    fn test_catalog_missing_name() {
        let toml = r#"
[[tool]]
page = "bad"
"#;
        let result = ToolCatalog::from_toml(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_from_missing_file() {
        let result = ToolCatalog::from_file("/nonexistent/tools.toml");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tools.toml"));
    }
}
