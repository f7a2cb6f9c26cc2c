/// Input acquisition: whole-input line reading from stdin or named files.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::errors::CutError;

/// Read every line from the given files, in argument order, or from stdin
/// when `files` is empty.
///
/// All input is materialized before returning.
///
/// # Errors
///
/// Returns `CutError::Input` / `CutError::InputFile` on the first open or
/// read failure; lines read so far are discarded.
pub fn read_lines(files: &[PathBuf]) -> Result<Vec<String>, CutError> {
    if files.is_empty() {
        let stdin = io::stdin();
        return read_lines_from(stdin.lock()).map_err(|source| CutError::Input { source });
    }

    let mut lines = Vec::new();
    for path in files {
        lines.extend(read_file(path)?);
    }
    Ok(lines)
}

fn read_file(path: &Path) -> Result<Vec<String>, CutError> {
    let to_err = |source: io::Error| CutError::InputFile {
        path: path.to_path_buf(),
        source,
    };
    // Closed on return, including the error paths.
    let file = File::open(path).map_err(to_err)?;
    read_lines_from(BufReader::new(file)).map_err(to_err)
}

/// Read all lines from a buffered reader.
///
/// Lines end at `\n`; a trailing `\r` is stripped and a final unterminated
/// line is kept.
///
/// # Errors
///
/// Propagates read errors, including `InvalidData` for non-UTF-8 input.
pub fn read_lines_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
