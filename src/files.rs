use crate::config::DiffOptions;
use crate::engine::{diff, format_patch_header};
use crate::error::DiffError;
use log::debug;
use std::fs;
use std::path::Path;

/// Reads a text file into lines with their line endings stripped.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, DiffError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DiffError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.lines().map(ToString::to_string).collect())
}

/// Diffs two files. The patch header, when enabled, is only emitted if the
/// files actually differ.
pub fn diff_files(
    old: impl AsRef<Path>,
    new: impl AsRef<Path>,
    options: &DiffOptions,
) -> Result<Vec<String>, DiffError> {
    let (old, new) = (old.as_ref(), new.as_ref());
    let lines_a = read_lines(old)?;
    let lines_b = read_lines(new)?;
    debug!(
        "diffing {} ({} lines) against {} ({} lines)",
        old.display(),
        lines_a.len(),
        new.display(),
        lines_b.len()
    );

    let body = diff(&lines_a, &lines_b, options.context_lines);
    if body.is_empty() || !options.patch_header {
        return Ok(body);
    }

    let old_name = options
        .old_label
        .clone()
        .unwrap_or_else(|| old.display().to_string());
    let new_name = options
        .new_label
        .clone()
        .unwrap_or_else(|| new.display().to_string());
    let mut result = format_patch_header(old_name, new_name).to_vec();
    result.extend(body);
    Ok(result)
}
