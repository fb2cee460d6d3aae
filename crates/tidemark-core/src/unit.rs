use thiserror::Error;

/// Width of the zero-padded sequence prefix in script file names.
pub const SEQUENCE_WIDTH: usize = 3;

/// One atomic, ordered, named change-script.
///
/// Units are built fresh on every invocation, by directory discovery or by
/// splitting a combined document, and are immutable afterwards. The body is
/// the exact script text: no trimming, no line-ending normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptUnit {
    /// Total-order key, unique within one run.
    pub sequence: u32,
    /// Human-readable identifier from the file name or marker.
    pub name: String,
    /// Exact script text to execute.
    pub body: String,
}

impl ScriptUnit {
    pub fn new(sequence: u32, name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sequence,
            name: name.into(),
            body: body.into(),
        }
    }

    /// Render the canonical `NNN_name.ext` file name for this unit.
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "{:0width$}_{}.{}",
            self.sequence,
            self.name,
            extension,
            width = SEQUENCE_WIDTH
        )
    }

    /// Zero-padded sequence and name, as shown in logs and reports.
    pub fn label(&self) -> String {
        format!("{:0width$}_{}", self.sequence, self.name, width = SEQUENCE_WIDTH)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("file name {0:?} does not match the NNN_description.ext migration pattern")]
pub struct UnitNameError(pub String);

/// Parse a script file name into `(sequence, name, extension)`.
///
/// Accepts exactly three ASCII digits, an underscore, a non-empty name, and
/// a non-empty extension. The zero-padded prefix keeps lexical file-name
/// order in agreement with numeric sequence order.
pub fn parse_unit_file_name(file_name: &str) -> Result<(u32, String, String), UnitNameError> {
    let err = || UnitNameError(file_name.to_string());

    let (stem, extension) = file_name.rsplit_once('.').ok_or_else(err)?;
    let (digits, name) = stem.split_once('_').ok_or_else(err)?;

    if digits.len() != SEQUENCE_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    if name.is_empty() || extension.is_empty() {
        return Err(err());
    }

    let sequence = digits.parse().map_err(|_| err())?;
    Ok((sequence, name.to_string(), extension.to_string()))
}
