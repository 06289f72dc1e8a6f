//! Text tool registry - descriptors, built-in table, catalog loading, checks

mod builtins;
mod catalog;
mod check;
mod definition;

pub use builtins::{BUILTIN_COUNT, TEXT_TOOLS, find_text_tool, text_tools};
pub use catalog::ToolCatalog;
pub use check::{CheckIssue, CheckReport, check};
pub use definition::ToolDescriptor;
