//! Parquet writing for the conversion pipeline.

use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::error::Result;

/// Serialize the frame to `path`, overwriting any existing file.
///
/// The parent directory must already exist. Returns the number of bytes
/// written.
pub fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<u64> {
    let mut file = File::create(path)?;
    let bytes = ParquetWriter::new(&mut file).finish(df)?;
    Ok(bytes)
}
