// HTML templates and `${name}` placeholder substitution
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Login,
    Landing,
    Charts,
    Error,
}

impl Template {
    fn source(self) -> &'static str {
        match self {
            Template::Login => include_str!("../../templates/login.html"),
            Template::Landing => include_str!("../../templates/index.html"),
            Template::Charts => include_str!("../../templates/charts.html"),
            Template::Error => include_str!("../../templates/error.html"),
        }
    }
}

/// Render a template with the given variables.
pub fn render(template: Template, vars: &HashMap<String, String>) -> String {
    fill_placeholders(template.source(), vars)
}

/// Replace `${key}` placeholders in one pass. Substituted values are not
/// re-scanned and unknown placeholders are kept verbatim.
pub fn fill_placeholders(source: &str, vars: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match vars.get(key) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
