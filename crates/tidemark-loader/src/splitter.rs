use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tidemark_core::ScriptUnit;

use crate::error::SplitError;

/// Prefix of a marker line delimiting one embedded migration.
pub const MARKER_PREFIX: &str = "-- Migration: ";

/// Parse a marker line of the form `-- Migration: <digits>_<name>.<ext>`.
///
/// The digit run may be any width; the name runs to the first `.<ext>`;
/// trailing text after the extension is tolerated. Anything that does not
/// match is an ordinary content line, not an error.
pub fn parse_marker(line: &str, extension: &str) -> Option<(u32, String)> {
    let rest = line.strip_prefix(MARKER_PREFIX)?;
    let (digits, after) = rest.split_once('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let sequence = digits.parse().ok()?;

    let suffix = format!(".{extension}");
    let end = after.find(&suffix)?;
    if end == 0 {
        return None;
    }
    Some((sequence, after[..end].to_string()))
}

/// Split a combined migration document into individual units.
///
/// Line scanner with two states: no open unit, accumulating a unit. A marker
/// line finalizes the open unit (its body is the marker line plus everything
/// accumulated since, so the emitted file is self-describing) and opens the
/// next one. Lines before the first marker are discarded. When the same
/// sequence number recurs, the later occurrence replaces the earlier one:
/// last-write-wins.
pub fn split_combined(text: &str, extension: &str) -> Result<Vec<ScriptUnit>, SplitError> {
    let mut units: BTreeMap<u32, ScriptUnit> = BTreeMap::new();
    let mut open: Option<(u32, String, Vec<&str>)> = None;

    for line in text.split('\n') {
        if let Some((sequence, name)) = parse_marker(line, extension) {
            if let Some((seq, name, lines)) = open.take() {
                units.insert(seq, ScriptUnit::new(seq, name, lines.join("\n")));
            }
            open = Some((sequence, name, vec![line]));
        } else if let Some((_, _, lines)) = open.as_mut() {
            lines.push(line);
        }
    }
    if let Some((seq, name, lines)) = open {
        units.insert(seq, ScriptUnit::new(seq, name, lines.join("\n")));
    }

    if units.is_empty() {
        return Err(SplitError::EmptyInput);
    }
    Ok(units.into_values().collect())
}

/// Write one `NNN_name.ext` file per unit into `dir`, byte-exact bodies.
pub fn write_units(
    dir: &Path,
    units: &[ScriptUnit],
    extension: &str,
) -> Result<Vec<PathBuf>, SplitError> {
    let mut written = Vec::with_capacity(units.len());
    for unit in units {
        let path = dir.join(unit.file_name(extension));
        fs::write(&path, &unit.body).map_err(|source| SplitError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    tracing::debug!(dir = %dir.display(), count = written.len(), "wrote split migration scripts");
    Ok(written)
}
