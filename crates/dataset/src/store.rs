//! Flat-text series storage.
//!
//! A series file is a plain list of real numbers, one token per line on
//! write, any whitespace separation on read. No header, no length field:
//! the series length is the token count.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::error::DatasetError;

/// Writes a series to `path`, one value per line.
///
/// Values are formatted with the shortest decimal representation that
/// round-trips, so reading the file back reproduces the series exactly.
/// An existing file at `path` is overwritten.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] on any filesystem failure.
pub fn write_series(path: &Path, series: &[f64]) -> Result<(), DatasetError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for v in series {
        writeln!(writer, "{v}")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), n = series.len(), "wrote series");
    Ok(())
}

/// Reads a series from `path`.
///
/// Tokens may be separated by any whitespace, so files written one value
/// per line and files written space-joined on a single line both parse.
/// An empty file yields an empty series.
///
/// # Errors
///
/// Returns [`DatasetError::NotFound`] if `path` does not exist,
/// [`DatasetError::Parse`] on the first token that is not a valid real
/// number, and [`DatasetError::Io`] on other filesystem failures.
pub fn read_series(path: &Path) -> Result<Vec<f64>, DatasetError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(DatasetError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let mut values = Vec::new();
    for (i, token) in text.split_whitespace().enumerate() {
        let v: f64 = token.parse().map_err(|_| DatasetError::Parse {
            token: token.to_string(),
            position: i + 1,
            path: path.to_path_buf(),
        })?;
        values.push(v);
    }

    debug!(path = %path.display(), n = values.len(), "read series");
    Ok(values)
}
