//! CSV loading for the conversion pipeline.

use polars::prelude::*;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::schema;

/// Read the whole export into memory and apply the positional column names.
///
/// The first line is data, not a header. Column types other than `content`
/// are inferred from the file contents; `content` is pinned to text before
/// inference runs.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let mut df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(None)
        .with_schema_overwrite(Some(schema::content_override()))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    if df.width() != schema::COLUMNS.len() {
        return Err(ConvertError::ColumnCount {
            expected: schema::COLUMNS.len(),
            found: df.width(),
        });
    }
    df.set_column_names(schema::COLUMNS)?;

    Ok(df)
}
