//! Fixed column layout of the chat export CSV.
//!
//! The input file has no header row; names are assigned by position when
//! the file is read.

use polars::prelude::*;
use std::sync::Arc;

/// Column names, in input order.
pub const COLUMNS: [&str; 7] = [
    "id",
    "sendTime",
    "sendTimePersian",
    "senderName",
    "senderUsername",
    "type",
    "content",
];

/// Name Polars assigns to the nth column of a headerless CSV (1-based).
fn positional_name(index: usize) -> String {
    format!("column_{}", index + 1)
}

/// Partial schema pinning `content` to text.
///
/// Message bodies such as `12345` or `007` would otherwise be sniffed as
/// numbers and lose their original spelling.
pub fn content_override() -> SchemaRef {
    let content_index = COLUMNS.len() - 1;
    Arc::new(Schema::from_iter([Field::new(
        positional_name(content_index).into(),
        DataType::String,
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_names_are_one_based() {
        assert_eq!(positional_name(0), "column_1");
        assert_eq!(positional_name(6), "column_7");
    }

    #[test]
    fn test_override_pins_last_column_to_text() {
        let schema = content_override();
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("column_7"), Some(&DataType::String));
    }
}
