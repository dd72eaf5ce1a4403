//! Identifier normalization.
//!
//! Turns free text (a dataset title, a CSV header field) into a name the
//! warehouse DDL grammar accepts: `[a-z][a-z0-9_]*`, not a reserved word,
//! at most [`IDENTIFIER_MAX_LEN`] characters long.

use super::keywords::KeywordLookup;

/// Maximum identifier length accepted by the warehouse metastore.
pub const IDENTIFIER_MAX_LEN: usize = 128;

/// Prepended when a name would otherwise start with something other than a letter.
const LEADING_PREFIX: char = 'x';

/// Appended to names that collide with a reserved word.
const KEYWORD_SUFFIX: char = '_';

/// Normalize `raw` into a warehouse identifier.
///
/// 1. lowercase;
/// 2. replace every char outside `[a-z0-9_]` with `_`, one for one;
/// 3. prefix `x` unless the result starts with a letter (empty input becomes `x`);
/// 4. suffix `_` if the result is a reserved word;
/// 5. cut to `max_len` characters.
///
/// The cut in step 5 is unconditional and may drop the suffix from step 4.
///
/// ```
/// use dataset_publisher::publisher::{normalize_identifier, IDENTIFIER_MAX_LEN};
///
/// let keywords: &[&str] = &["date"];
/// assert_eq!(normalize_identifier("Date", keywords, IDENTIFIER_MAX_LEN), "date_");
/// assert_eq!(normalize_identifier("1900: CHINA ITS", keywords, IDENTIFIER_MAX_LEN), "x1900__china_its");
/// ```
pub fn normalize_identifier<K>(raw: &str, keywords: &K, max_len: usize) -> String
where
    K: KeywordLookup + ?Sized,
{
    let mut name: String = raw
        .to_lowercase()
        .chars()
        .map(|c| if is_identifier_char(c) { c } else { '_' })
        .collect();

    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        name.insert(0, LEADING_PREFIX);
    }

    if keywords.is_restricted(&name) {
        name.push(KEYWORD_SUFFIX);
    }

    // Only ASCII survives substitution, so a byte cut is a char cut.
    name.truncate(max_len);
    name
}

/// Whether `name` already satisfies the identifier grammar (ignoring keywords).
pub fn is_valid_identifier(name: &str, max_len: usize) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            name.len() <= max_len && chars.all(is_identifier_char)
        }
        _ => false,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}
