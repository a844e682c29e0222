// ABOUTME: HTML escaping utilities to prevent XSS in server-rendered templates
// ABOUTME: Provides text and attribute-safe escaping for values injected into the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;

/// Escape a string for safe insertion into a double-quoted HTML attribute.
#[must_use]
pub fn escape_html_attribute(input: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(input)
}

/// Escape a string for safe insertion as HTML element text.
#[must_use]
pub fn escape_html_text(input: &str) -> Cow<'_, str> {
    html_escape::encode_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_escaping_blocks_breakout() {
        let escaped = escape_html_attribute("2023-01-01\" onload=\"alert(1)");
        assert!(!escaped.contains('"'));
        assert!(escaped.contains("&quot;"));
    }

    #[test]
    fn test_text_escaping() {
        assert_eq!(escape_html_text("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        assert_eq!(escape_html_text("January 01, 2023"), "January 01, 2023");
    }
}
