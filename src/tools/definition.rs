//! Tool descriptor definitions
//!
//! A descriptor maps a page id to the label and helper text the web app
//! shows for one text tool.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// One selectable text tool in the navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Routing key (e.g., "hash", "jwt-decoder")
    pub page: Cow<'static, str>,
    /// Display label
    pub name: Cow<'static, str>,
    /// Explanatory text shown under the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Cow<'static, str>>,
    /// Placeholder for the tool's input field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Cow<'static, str>>,
}

impl ToolDescriptor {
    /// Create a descriptor with only page and name set
    pub fn new(page: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            page: page.into(),
            name: name.into(),
            description: None,
            placeholder: None,
        }
    }

    /// Const constructor for the built-in table
    pub const fn builtin(
        page: &'static str,
        name: &'static str,
        description: Option<&'static str>,
        placeholder: Option<&'static str>,
    ) -> Self {
        Self {
            page: Cow::Borrowed(page),
            name: Cow::Borrowed(name),
            description: match description {
                Some(text) => Some(Cow::Borrowed(text)),
                None => None,
            },
            placeholder: match placeholder {
                Some(text) => Some(Cow::Borrowed(text)),
                None => None,
            },
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }

    /// Short helper text for list views: description, else placeholder
    pub fn summary(&self) -> Option<&str> {
        self.description.as_deref().or(self.placeholder.as_deref())
    }
}
