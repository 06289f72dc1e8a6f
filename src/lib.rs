//! textkit - registry of the text tools exposed by the web app
//!
//! Each tool is a page id plus the label, description and input placeholder
//! the navigation menu shows for it. The built-in table lives in
//! [`tools::TEXT_TOOLS`]; [`tools::ToolCatalog`] layers TOML catalog files
//! on top of it.

pub mod error;
pub mod render;
pub mod tools;

pub use error::{Result, TextkitError};
