//! Data source resolution.
//!
//! The page is configured with a Google Sheets "shareable link"; the sheet is
//! read through its CSV export, first tab unless the link names a `gid`.
//! Published-to-web links, bare sheet keys and plain CSV URLs work too.

use crate::error::{Result, SheetMapError};

const SHEETS_PREFIX: &str = "https://docs.google.com/spreadsheets/d/";

/// Where the rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    /// A sheet addressed by its document key.
    GoogleSheet { key: String, gid: Option<String> },
    /// A sheet published to the web (`/d/e/<key>/pubhtml`).
    PublishedSheet { key: String, gid: Option<String> },
    /// Any other URL, expected to serve CSV.
    Csv(String),
}

impl SheetSource {
    /// Resolve a shareable link, a sheet key, or a CSV URL.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SheetMapError::Source("empty data source".to_string()));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Ok(Self::from_url(input));
        }

        if is_sheet_key(input) {
            return Ok(Self::GoogleSheet {
                key: input.to_string(),
                gid: None,
            });
        }

        Err(SheetMapError::Source(format!(
            "'{input}' is neither a URL nor a sheet key"
        )))
    }

    fn from_url(url: &str) -> Self {
        let rest = url
            .split_once("docs.google.com/spreadsheets/d/")
            .map(|(_, rest)| rest);
        let Some(rest) = rest else {
            return Self::Csv(url.to_string());
        };

        let gid = gid_param(rest);
        let mut segments = rest.split(['/', '?', '#']);
        match segments.next() {
            Some("e") => match segments.next() {
                Some(key) if !key.is_empty() => Self::PublishedSheet {
                    key: key.to_string(),
                    gid,
                },
                _ => Self::Csv(url.to_string()),
            },
            Some(key) if is_sheet_key(key) => Self::GoogleSheet {
                key: key.to_string(),
                gid,
            },
            _ => Self::Csv(url.to_string()),
        }
    }

    /// The URL that serves this source as CSV.
    pub fn csv_url(&self) -> String {
        match self {
            Self::GoogleSheet { key, gid } => match gid {
                Some(gid) => format!("{SHEETS_PREFIX}{key}/export?format=csv&gid={gid}"),
                None => format!("{SHEETS_PREFIX}{key}/export?format=csv"),
            },
            Self::PublishedSheet { key, gid } => match gid {
                Some(gid) => format!("{SHEETS_PREFIX}e/{key}/pub?output=csv&gid={gid}"),
                None => format!("{SHEETS_PREFIX}e/{key}/pub?output=csv"),
            },
            Self::Csv(url) => url.clone(),
        }
    }
}

/// Sheet keys are long runs of URL-safe base64 characters.
fn is_sheet_key(candidate: &str) -> bool {
    candidate.len() >= 20
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// `gid` from the query string or fragment (`#gid=123`).
fn gid_param(rest: &str) -> Option<String> {
    rest.split(['?', '#', '&'])
        .filter_map(|pair| pair.strip_prefix("gid="))
        .map(|gid| gid.to_string())
        .find(|gid| !gid.is_empty() && gid.chars().all(|c| c.is_ascii_digit()))
}
