//! Test fixtures for building sheet rows and CSV exports in memory.
//!
//! # Example
//!
//! ```rust
//! use fixtures::{SheetBuilder, RowBuilder};
//!
//! let csv = SheetBuilder::new()
//!     .add_row(RowBuilder::at("59.3", "18.1").institution("Lib A"))
//!     .to_csv();
//! let rows = sheetmap::csv::parse_rows(&csv).unwrap();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use sheetmap::types::Row;

// ============================================================================
// Column headers, exactly as in the documentation registry sheet
// ============================================================================

pub const LATITUD: &str = "Latitud";
pub const LONGITUD: &str = "Longitud";
pub const INSTITUTION: &str = "Institution";
pub const DOKUMENTATION: &str = "Dokumentationens namn";
pub const WEBBPLATS: &str = "Dokumentationens webbplats";
pub const KONTAKTPERSON: &str = "Kontaktperson";
pub const MEJL: &str = "Mejl till kontaktperson (om det ska synas)";
pub const TELEFON: &str = "Telefonnr till kontaktperson (om det ska synas)";

pub const HEADERS: [&str; 8] = [
    INSTITUTION,
    LATITUD,
    LONGITUD,
    DOKUMENTATION,
    WEBBPLATS,
    KONTAKTPERSON,
    MEJL,
    TELEFON,
];

// ============================================================================
// Row Builder
// ============================================================================

/// Builds one registry row; every column is present, empty unless set.
#[derive(Debug, Clone)]
pub struct RowBuilder {
    values: [String; 8],
}

impl RowBuilder {
    pub fn at(lat: &str, lng: &str) -> Self {
        let mut builder = Self {
            values: Default::default(),
        };
        builder.values[1] = lat.to_string();
        builder.values[2] = lng.to_string();
        builder
    }

    pub fn institution(mut self, v: &str) -> Self {
        self.values[0] = v.to_string();
        self
    }

    pub fn dokumentation(mut self, v: &str) -> Self {
        self.values[3] = v.to_string();
        self
    }

    pub fn webbplats(mut self, v: &str) -> Self {
        self.values[4] = v.to_string();
        self
    }

    pub fn kontaktperson(mut self, v: &str) -> Self {
        self.values[5] = v.to_string();
        self
    }

    pub fn mejl(mut self, v: &str) -> Self {
        self.values[6] = v.to_string();
        self
    }

    pub fn telefon(mut self, v: &str) -> Self {
        self.values[7] = v.to_string();
        self
    }

    pub fn build(&self) -> Row {
        HEADERS
            .iter()
            .zip(self.values.iter())
            .map(|(h, v)| (*h, v.clone()))
            .collect()
    }
}

// ============================================================================
// Sheet Builder
// ============================================================================

/// Builds a whole sheet, as rows or as the CSV Google Sheets exports.
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    rows: Vec<RowBuilder>,
}

impl SheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(mut self, row: RowBuilder) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(&self) -> Vec<Row> {
        self.rows.iter().map(RowBuilder::build).collect()
    }

    /// CSV with CRLF line endings and quoting where needed, as the export does.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&HEADERS.map(quote).join(","));
        out.push_str("\r\n");
        for row in &self.rows {
            let cells: Vec<String> = row.values.iter().map(|v| quote(v)).collect();
            out.push_str(&cells.join(","));
            out.push_str("\r\n");
        }
        out
    }
}

fn quote(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// A few libraries across Sweden.
pub fn swedish_libraries() -> SheetBuilder {
    SheetBuilder::new()
        .add_row(
            RowBuilder::at("59.3293", "18.0686")
                .institution("Kungliga biblioteket")
                .dokumentation("Katalogen Libris")
                .webbplats("https://libris.kb.se")
                .kontaktperson("Anna Andersson")
                .mejl("anna@kb.se")
                .telefon("010-709 30 00"),
        )
        .add_row(
            RowBuilder::at("55.7047", "13.1910")
                .institution("Lunds universitetsbibliotek")
                .dokumentation("Handskriftssamlingen, del 1"),
        )
        .add_row(
            RowBuilder::at("63,8258", "20,2630")
                .institution("Umeå universitetsbibliotek")
                .webbplats("https://www.ub.umu.se"),
        )
}
