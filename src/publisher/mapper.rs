//! Metadata → table descriptor mapping.
//!
//! The mapper is a pure function of its inputs. It does no I/O, holds no
//! mutable state and shares only the read-only keyword lookup, so one
//! instance can serve any number of concurrent requests.

use super::keywords::KeywordLookup;
use super::location::extract_location;
use super::metadata::Metadata;
use super::naming::{IDENTIFIER_MAX_LEN, normalize_identifier};
use super::table::TableDescriptor;
use super::validation::{validate_columns, validate_header_fields};
use crate::error::Result;

/// Maps dataset metadata onto warehouse table descriptors.
#[derive(Debug, Clone)]
pub struct MetadataMapper<K> {
    keywords: K,
    identifier_max_len: usize,
}

impl<K: KeywordLookup> MetadataMapper<K> {
    pub fn new(keywords: K) -> Self {
        Self {
            keywords,
            identifier_max_len: IDENTIFIER_MAX_LEN,
        }
    }

    /// Override the identifier length limit (defaults to [`IDENTIFIER_MAX_LEN`]).
    #[must_use]
    pub fn with_identifier_max_len(mut self, max_len: usize) -> Self {
        self.identifier_max_len = max_len;
        self
    }

    pub fn identifier_max_len(&self) -> usize {
        self.identifier_max_len
    }

    pub fn normalize(&self, raw: &str) -> String {
        normalize_identifier(raw, &self.keywords, self.identifier_max_len)
    }

    /// Build the descriptor for `metadata` in `database_name`.
    ///
    /// All or nothing: the first failing stage aborts the mapping.
    ///
    /// # Errors
    ///
    /// - [`DuplicateHeaderFields`](crate::error::PublisherError::DuplicateHeaderFields)
    ///   if the trimmed header repeats a field;
    /// - [`DuplicateColumns`](crate::error::PublisherError::DuplicateColumns)
    ///   if normalization maps two fields onto one name;
    /// - [`MalformedUri`](crate::error::PublisherError::MalformedUri) if the
    ///   target URI has no usable directory.
    pub fn map(&self, metadata: &Metadata, database_name: &str) -> Result<TableDescriptor> {
        let header = metadata.header_fields();
        validate_header_fields(&header)?;

        let table_name = self.normalize(&metadata.title);

        let fields: Vec<String> = header.iter().map(|field| self.normalize(field)).collect();
        validate_columns(&fields)?;

        let location = extract_location(&metadata.target_uri)?;

        Ok(TableDescriptor {
            database_name: database_name.to_owned(),
            table_name,
            fields,
            location,
        })
    }
}

/// One-shot form of [`MetadataMapper::map`] with the default length limit.
///
/// # Errors
///
/// See [`MetadataMapper::map`].
pub fn map_metadata<K>(
    metadata: &Metadata,
    database_name: &str,
    keywords: &K,
) -> Result<TableDescriptor>
where
    K: KeywordLookup + ?Sized,
{
    MetadataMapper::new(keywords).map(metadata, database_name)
}
