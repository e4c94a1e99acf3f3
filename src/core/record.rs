//! Row records and the typed inventory view over them.
//!
//! A `Record` is whatever the header row says it is. `InventoryItem` picks out
//! the columns an inventory sheet is expected to carry.

use super::cell::CellValue;

/// Column holding the asset tag number.
pub const COLUMN_TOMBAMENTO: &str = "Tombamento";

/// Accepted spellings of the item name column, in lookup order.
pub const COLUMN_DENOMINACAO: &[&str] = &["Denominação", "Denominacao"];

/// Column holding the item group.
pub const COLUMN_GRUPO: &str = "Grupo";

/// Column holding the item value in reais.
pub const COLUMN_VALOR: &str = "Valor (R$)";

/// Column holding the item condition.
pub const COLUMN_ESTADO: &str = "Estado";

/// One decoded data row, keyed by the sheet's header labels.
///
/// Fields keep the column order of the sheet. Blank cells are not stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Empty cells are dropped.
    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        if !value.is_empty() {
            self.fields.push((column.into(), value));
        }
    }

    /// Look up a field by exact column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Iterate over `(column, value)` pairs in sheet order.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Typed view of an inventory row.
///
/// Each field holds the cell only when it is truthy, so callers can fall back
/// to a placeholder with `Option` combinators.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryItem {
    pub tombamento: Option<CellValue>,
    pub denominacao: Option<CellValue>,
    pub grupo: Option<CellValue>,
    pub valor: Option<CellValue>,
    pub estado: Option<CellValue>,
}

impl InventoryItem {
    /// Extract the known inventory columns from a record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            tombamento: truthy(record, &[COLUMN_TOMBAMENTO]),
            denominacao: truthy(record, COLUMN_DENOMINACAO),
            grupo: truthy(record, &[COLUMN_GRUPO]),
            valor: truthy(record, &[COLUMN_VALOR]),
            estado: truthy(record, &[COLUMN_ESTADO]),
        }
    }
}

/// First truthy value among the given column aliases.
fn truthy(record: &Record, aliases: &[&str]) -> Option<CellValue> {
    aliases
        .iter()
        .filter_map(|column| record.get(column))
        .find(|value| value.is_truthy())
        .cloned()
}
