//! Reserved words of the warehouse DDL grammar.
//!
//! The mapper only ever asks "is this word reserved?", so the capability is
//! modelled as the [`KeywordLookup`] trait. Production code shares one
//! [`RestrictedKeywords`] built at startup; tests substitute a small set.

use std::collections::{BTreeSet, HashSet};

/// Read-only reserved-word lookup.
///
/// Implementations receive already-normalized (lowercase) identifiers.
pub trait KeywordLookup: Send + Sync {
    fn is_restricted(&self, word: &str) -> bool;
}

/// Built-in reserved words accepted by the Hive/Impala DDL parser.
const HIVE_KEYWORDS: &[&str] = &[
    "add", "aggregate", "all", "alter", "and", "api_version", "as", "asc", "avro", "between",
    "bigint", "binary", "boolean", "by", "cached", "case", "cast", "change", "char", "class",
    "close_fn", "column", "columns", "comment", "compute", "create", "cross", "data", "database",
    "databases", "date", "datetime", "decimal", "delimited", "desc", "describe", "distinct", "div",
    "double", "drop", "else", "end", "escaped", "exists", "explain", "external", "false", "fields",
    "fileformat", "finalize_fn", "first", "float", "format", "formatted", "from", "full",
    "function", "functions", "group", "having", "if", "in", "incremental", "init_fn", "inner",
    "inpath", "insert", "int", "integer", "intermediate", "interval", "into", "invalidate", "is",
    "join", "last", "left", "like", "limit", "lines", "load", "location", "merge_fn", "metadata",
    "not", "null", "nulls", "offset", "on", "or", "order", "outer", "overwrite", "parquet",
    "parquetfile", "partition", "partitioned", "partitions", "prepare_fn", "produced", "rcfile",
    "real", "refresh", "regexp", "rename", "replace", "returns", "right", "rlike", "row",
    "schema", "schemas", "select", "semi", "sequencefile", "serdeproperties", "serialize_fn",
    "set", "show", "smallint", "stats", "stored", "straight_join", "string", "symbol", "table",
    "tables", "tblproperties", "terminated", "textfile", "then", "timestamp", "tinyint", "to",
    "true", "uncached", "union", "update_fn", "use", "using", "values", "view", "when", "where",
    "with",
];

/// Immutable, lowercase set of reserved words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedKeywords {
    words: BTreeSet<String>,
}

impl RestrictedKeywords {
    /// Build a set from arbitrary-case words. Entries are lowercased and
    /// surrounding whitespace is dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The warehouse's full keyword list.
    pub fn hive() -> Self {
        Self::new(HIVE_KEYWORDS.iter().copied())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for RestrictedKeywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl KeywordLookup for RestrictedKeywords {
    fn is_restricted(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Plain sets are expected to hold lowercase words, like [`RestrictedKeywords`].
impl KeywordLookup for HashSet<String> {
    fn is_restricted(&self, word: &str) -> bool {
        self.contains(&word.to_lowercase())
    }
}

impl KeywordLookup for BTreeSet<String> {
    fn is_restricted(&self, word: &str) -> bool {
        self.contains(&word.to_lowercase())
    }
}

impl KeywordLookup for [&str] {
    fn is_restricted(&self, word: &str) -> bool {
        self.iter().any(|k| k.eq_ignore_ascii_case(word))
    }
}

impl<K: KeywordLookup + ?Sized> KeywordLookup for &K {
    fn is_restricted(&self, word: &str) -> bool {
        (**self).is_restricted(word)
    }
}

impl<K: KeywordLookup + ?Sized> KeywordLookup for std::sync::Arc<K> {
    fn is_restricted(&self, word: &str) -> bool {
        (**self).is_restricted(word)
    }
}
