//! The conversion pipeline: read a chat export CSV, write it as Parquet.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::data;
use crate::error::{ConvertError, Result};

/// Derive the destination file path from the input file name.
///
/// Everything from the first `.` in the file name onward is dropped, so
/// `foo.bar.csv` becomes `foo.parquet`.
pub fn output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ConvertError::OutputName(input.to_path_buf()))?;
    let stem = name.split_once('.').map_or(name, |(stem, _)| stem);
    Ok(output_dir.join(format!("{stem}.parquet")))
}

/// Convert one CSV file, returning the path of the Parquet file written.
///
/// The output directory must already exist; an existing output file is
/// overwritten.
pub fn convert_file(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let dest = output_path(input, output_dir)?;

    let mut df = data::read_csv(input)?;
    info!(rows = df.height(), "loaded {}", input.display());

    let bytes = data::write_parquet(&mut df, &dest)?;
    info!(bytes, "wrote {}", dest.display());

    Ok(dest)
}
