//! Consistency checks for tool tables
//!
//! Registries are never validated on load. This module reports what is
//! wrong so the CLI (and tests) can surface it.

use std::collections::HashMap;
use std::fmt;

use super::definition::ToolDescriptor;

/// A single problem found in a tool table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckIssue {
    /// Entry at `index` has a blank page id
    EmptyPage { index: usize },
    /// Entry at `index` has a blank display name
    EmptyName { index: usize, page: String },
    /// `page` appears again at `duplicate` after first appearing at `first`
    DuplicatePage {
        page: String,
        first: usize,
        duplicate: usize,
    },
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPage { index } => write!(f, "entry #{}: empty page id", index),
            Self::EmptyName { index, page } => {
                write!(f, "entry #{} ({}): empty name", index, page)
            }
            Self::DuplicatePage {
                page,
                first,
                duplicate,
            } => write!(
                f,
                "entry #{}: duplicate page '{}' (first defined at #{})",
                duplicate, page, first
            ),
        }
    }
}

/// Outcome of checking a tool table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    checked: usize,
    issues: Vec<CheckIssue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[CheckIssue] {
        &self.issues
    }

    /// Number of entries that were checked
    pub fn checked(&self) -> usize {
        self.checked
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Check a tool table for blank fields and repeated pages.
///
/// Whitespace-only strings count as blank. A blank page is not tracked
/// for duplicates. Duplicates compare the raw page, the same key lookups use.
pub fn check(tools: &[ToolDescriptor]) -> CheckReport {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, tool) in tools.iter().enumerate() {
        let page: &str = &tool.page;
        let blank_page = page.trim().is_empty();
        if blank_page {
            issues.push(CheckIssue::EmptyPage { index });
        }
        if tool.name.trim().is_empty() {
            issues.push(CheckIssue::EmptyName {
                index,
                page: tool.page.to_string(),
            });
        }
        if blank_page {
            continue;
        }
        match seen.get(page) {
            Some(&first) => issues.push(CheckIssue::DuplicatePage {
                page: page.to_string(),
                first,
                duplicate: index,
            }),
            None => {
                seen.insert(page, index);
            }
        }
    }

    log::debug!("Checked {} tools, {} issues", tools.len(), issues.len());
    CheckReport {
        checked: tools.len(),
        issues,
    }
}
