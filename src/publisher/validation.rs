//! Duplicate detection for header fields and column names.
//!
//! Two independent stages run during mapping. The header stage compares the
//! fields the user typed and the column stage compares what normalization
//! turned them into. Each stage has its own error kind so a collision
//! introduced by sanitization is never reported as a user typo.

use crate::error::{PublisherError, Result};
use std::collections::{BTreeSet, HashSet};

/// Which equality the check applies, and therefore which error it raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    /// Trimmed raw header fields.
    HeaderFields,
    /// Normalized column names.
    Columns,
}

impl DuplicateKind {
    fn into_error(self, duplicates: Vec<String>) -> PublisherError {
        match self {
            Self::HeaderFields => PublisherError::DuplicateHeaderFields(duplicates),
            Self::Columns => PublisherError::DuplicateColumns(duplicates),
        }
    }
}

/// Every value that occurs more than once, deduplicated and sorted ascending.
pub fn find_duplicates<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();

    for value in values {
        let value = value.as_ref();
        if !seen.insert(value.to_owned()) {
            duplicates.insert(value.to_owned());
        }
    }

    duplicates.into_iter().collect()
}

/// Fail with the `kind` error if any two values are byte-for-byte equal.
pub fn validate_unique<I, S>(values: I, kind: DuplicateKind) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let duplicates = find_duplicates(values);
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(kind.into_error(duplicates))
    }
}

/// Header stage: raw fields compared after trimming surrounding whitespace.
pub fn validate_header_fields<S: AsRef<str>>(fields: &[S]) -> Result<()> {
    validate_unique(
        fields.iter().map(|f| f.as_ref().trim()),
        DuplicateKind::HeaderFields,
    )
}

/// Column stage: normalized names compared exactly.
pub fn validate_columns<S: AsRef<str>>(columns: &[S]) -> Result<()> {
    validate_unique(columns, DuplicateKind::Columns)
}
