use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One spreadsheet record: column header to cell text, in sheet column order.
///
/// Headers are kept exactly as they appear in the sheet. Looking up a column
/// the sheet does not have yields an empty value rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column` to `value`, replacing an earlier value for the same header.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        if let Some(cell) = self.cells.iter_mut().find(|(c, _)| *c == column) {
            cell.1 = value;
        } else {
            self.cells.push((column, value));
        }
    }

    /// Builder form of [`Row::insert`].
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Cell text for `column`, empty when the column is absent.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_is_empty() {
        let row = Row::new().with("Institution", "Lib A");
        assert_eq!(row.value("Institution"), "Lib A");
        assert_eq!(row.get("Kontaktperson"), None);
        assert_eq!(row.value("Kontaktperson"), "");
    }

    #[test]
    fn test_headers_are_not_normalized() {
        let row = Row::new().with("Dokumentationens namn", "Arkiv");
        assert_eq!(row.get("dokumentationens namn"), None);
        assert_eq!(row.get("Dokumentationens namn"), Some("Arkiv"));
    }

    #[test]
    fn test_insert_replaces_and_keeps_order() {
        let mut row: Row = [("Latitud", "1"), ("Longitud", "2")].into_iter().collect();
        row.insert("Latitud", "3");
        assert_eq!(row.columns().collect::<Vec<_>>(), ["Latitud", "Longitud"]);
        assert_eq!(row.value("Latitud"), "3");
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_serializes_as_object_in_column_order() {
        let row = Row::new().with("b", "2").with("a", "1");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
