//! Output rendering for tool descriptors
//!
//! Text for terminals, JSON and YAML for whatever builds the navigation menu.

use std::fmt;
use std::str::FromStr;

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextkitError};
use crate::tools::ToolDescriptor;

/// Output format for rendered descriptors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = TextkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(TextkitError::Render(format!("Unknown output format '{}'", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        };
        f.write_str(s)
    }
}

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Render a list of tools
pub fn render_list(tools: &[&ToolDescriptor], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_list_text(tools, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tools)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tools)?),
    }
}

/// Render a single tool
pub fn render_one(tool: &ToolDescriptor, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_one_text(tool, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tool)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tool)?),
    }
}

fn render_list_text(tools: &[&ToolDescriptor], color: bool) -> String {
    let width = tools
        .iter()
        .map(|t| t.page.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for tool in tools {
        let page = format!("{:<width$}", tool.page, width = width);
        out.push_str(&paint(&page, color, |s| s.cyan()));
        out.push_str("  ");
        out.push_str(&paint(&tool.name, color, |s| s.bold()));
        if let Some(summary) = tool.summary() {
            out.push_str(" - ");
            out.push_str(&paint(summary, color, |s| s.dimmed()));
        }
        out.push('\n');
    }
    out
}

fn render_one_text(tool: &ToolDescriptor, color: bool) -> String {
    let mut out = String::new();
    let mut field = |label: &str, value: &str| {
        out.push_str(&paint(&format!("{:<12} ", format!("{}:", label)), color, |s| s.green()));
        out.push_str(value);
        out.push('\n');
    };

    field("page", &tool.page);
    field("name", &tool.name);
    if let Some(description) = tool.description.as_deref() {
        field("description", description);
    }
    if let Some(placeholder) = tool.placeholder.as_deref() {
        field("placeholder", placeholder);
    }
    out
}
