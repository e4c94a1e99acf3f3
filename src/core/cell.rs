//! Cell values as they come out of a decoded sheet.
//!
//! Cells are loosely typed: a header row decides what each column means, and
//! nothing validates the values underneath it.

use std::fmt;

/// A single spreadsheet cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    /// Text content
    Text(String),
    /// Numeric content (integers, floats and date serials)
    Number(f64),
    /// Boolean content
    Bool(bool),
    /// Blank cell
    #[default]
    Empty,
}

impl CellValue {
    /// Returns true if the cell holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns true if the value counts as present when used as a fallback chain.
    ///
    /// Blank text, zero, NaN, `false` and empty cells are all treated as absent,
    /// so a card falls back to its placeholder for them.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Bool(b) => *b,
            CellValue::Empty => false,
        }
    }

    /// Build a cell from a field of delimited text.
    ///
    /// Fields that parse as a finite number become numbers, blank fields
    /// become empty cells and everything else stays text.
    pub fn from_text_field(field: &str) -> Self {
        if field.is_empty() {
            return CellValue::Empty;
        }
        match field.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(field.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(data: &calamine::Data) -> Self {
        use calamine::Data;

        match data {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => {
                if s.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(s.clone())
                }
            }
            Data::Bool(b) => CellValue::Bool(*b),
            // Dates stay as their serial number, like a raw sheet export
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
            Data::Empty => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_trailing_zero() {
        assert_eq!(CellValue::Number(150.0).to_string(), "150");
        assert_eq!(CellValue::Number(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Number(-3.0).to_string(), "-3");
    }

    #[test]
    fn test_text_and_bool_display() {
        assert_eq!(CellValue::Text("Mesa".to_string()).to_string(), "Mesa");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_truthiness() {
        assert!(CellValue::Text("x".to_string()).is_truthy());
        assert!(CellValue::Number(1.0).is_truthy());
        assert!(CellValue::Bool(true).is_truthy());

        assert!(!CellValue::Text(String::new()).is_truthy());
        assert!(!CellValue::Number(0.0).is_truthy());
        assert!(!CellValue::Number(f64::NAN).is_truthy());
        assert!(!CellValue::Bool(false).is_truthy());
        assert!(!CellValue::Empty.is_truthy());
    }

    #[test]
    fn test_from_text_field() {
        assert_eq!(CellValue::from_text_field(""), CellValue::Empty);
        assert_eq!(CellValue::from_text_field("150"), CellValue::Number(150.0));
        assert_eq!(CellValue::from_text_field("1.5"), CellValue::Number(1.5));
        assert_eq!(
            CellValue::from_text_field("Mesa"),
            CellValue::Text("Mesa".to_string())
        );
        // Whitespace-only is kept as text, not a number
        assert_eq!(
            CellValue::from_text_field("  "),
            CellValue::Text("  ".to_string())
        );
        // "inf" parses as f64 but is not a spreadsheet number
        assert_eq!(
            CellValue::from_text_field("inf"),
            CellValue::Text("inf".to_string())
        );
    }

    #[test]
    fn test_from_calamine_data() {
        use calamine::Data;

        assert_eq!(CellValue::from(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(CellValue::from(&Data::Float(2.5)), CellValue::Number(2.5));
        assert_eq!(
            CellValue::from(&Data::String("Bom".to_string())),
            CellValue::Text("Bom".to_string())
        );
        assert_eq!(
            CellValue::from(&Data::String(String::new())),
            CellValue::Empty
        );
        assert_eq!(CellValue::from(&Data::Bool(false)), CellValue::Bool(false));
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
    }
}
