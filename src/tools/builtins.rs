//! Built-in text tool table
//!
//! Order is menu order.

use super::ToolDescriptor;

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = TEXT_TOOLS.len();

/// All text tools shipped with the app.
pub const TEXT_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor::builtin("hash", "해시 생성기", None, None),
    ToolDescriptor::builtin(
        "array-converter",
        "Array 변환기",
        Some("JSON / XML / 줄바꿈·콤마 텍스트에서 원하는 필드만 뽑아서 다양한 배열 포맷으로 변환합니다."),
        None,
    ),
    ToolDescriptor::builtin("jwt-decoder", "JWT 디코더", None, None),
];

/// The built-in table as a slice.
pub fn text_tools() -> &'static [ToolDescriptor] {
    TEXT_TOOLS
}

/// First built-in tool registered under `page`.
pub fn find_text_tool(page: &str) -> Option<&'static ToolDescriptor> {
    TEXT_TOOLS.iter().find(|tool| tool.page == page)
}
