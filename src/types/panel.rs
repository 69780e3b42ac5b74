use serde::{Deserialize, Serialize};

/// One labeled line in the side panel body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLine {
    pub label: String,
    pub value: String,
    /// Render the value as a link opening in a new browsing context.
    pub is_link: bool,
}

impl PanelLine {
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            is_link: false,
        }
    }

    /// A link line; falls back to plain text when the target is not a
    /// navigable web or mail address.
    pub fn link(label: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let is_link = is_safe_href(&value);
        Self {
            label: label.into(),
            value,
            is_link,
        }
    }

    /// Escaped HTML for this line.
    pub fn to_html(&self) -> String {
        let label = escape_html(&self.label);
        let value = escape_html(&self.value);
        if self.is_link {
            format!(
                "{label}: <a href=\"{value}\" target=\"_blank\" rel=\"noopener noreferrer\">{value}</a>"
            )
        } else {
            format!("{label}: {value}")
        }
    }
}

/// Structured side panel content: a title and an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelContent {
    pub title: String,
    pub lines: Vec<PanelLine>,
}

impl PanelContent {
    /// Content with a title and an empty body.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Escaped HTML for the body; lines are separated by `<br/>`.
    pub fn to_html(&self) -> String {
        self.lines
            .iter()
            .map(PanelLine::to_html)
            .collect::<Vec<_>>()
            .join("<br/>")
    }
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whether `href` may be emitted as a link target.
///
/// Absolute `http`, `https` and `mailto` URLs pass, as do scheme-less
/// values (relative links, `www.example.se`). Anything else with a scheme,
/// notably `javascript:` and `data:`, is rejected.
pub fn is_safe_href(href: &str) -> bool {
    let trimmed = href.trim();
    if trimmed.is_empty() {
        return false;
    }
    let Some((scheme, _)) = trimmed.split_once(':') else {
        return true;
    };
    // A '/', '?' or '#' before the colon means the colon is not a scheme separator.
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    matches!(
        scheme.to_ascii_lowercase().as_str(),
        "http" | "https" | "mailto"
    )
}
