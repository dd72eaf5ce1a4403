//! Centralized error handling for the dataset publisher.
//!
//! Mapping failures are typed so the request layer can tell a user mistake
//! (a header that needs fixing) apart from an internal inconsistency (a
//! storage URI that should never have been malformed).
//!
//! ```
//! use dataset_publisher::error::PublisherError;
//!
//! let err = PublisherError::DuplicateColumns(vec!["run_".to_owned(), "x_4".to_owned()]);
//! assert_eq!(err.to_string(), "Duplicated columns in table: run_, x_4");
//! assert!(err.is_user_correctable());
//! ```
//!
//! The `ResultExt` trait adds `.context()` to any `Result` whose error
//! converts into [`PublisherError`]:
//!
//! ```no_run
//! use dataset_publisher::error::ResultExt as _;
//!
//! fn load_sample() -> dataset_publisher::error::Result<String> {
//!     let sample = std::fs::read_to_string("sample.csv").context("Failed to load sample")?;
//!     Ok(sample)
//! }
//! ```

use std::fmt;

/// Main error type for publisher operations.
#[derive(Debug)]
pub enum PublisherError {
    /// The raw header repeats one or more field names. Sorted, deduplicated.
    DuplicateHeaderFields(Vec<String>),

    /// Normalization collapsed distinct header fields onto the same column
    /// name. Sorted, deduplicated.
    DuplicateColumns(Vec<String>),

    /// The target URI cannot yield a warehouse location.
    MalformedUri { uri: String, reason: String },

    /// Configuration errors
    Config(String),

    /// I/O errors (config files, metadata files)
    Io(std::io::Error),

    /// Generic error with context
    Other(String),
}

impl PublisherError {
    pub(crate) fn malformed_uri(uri: &str, reason: impl Into<String>) -> Self {
        Self::MalformedUri {
            uri: uri.to_owned(),
            reason: reason.into(),
        }
    }

    /// Whether the submitter can fix this by changing the dataset they sent.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateHeaderFields(_) | Self::DuplicateColumns(_)
        )
    }
}

impl fmt::Display for PublisherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateHeaderFields(names) => {
                write!(f, "Duplicated header fields in file: {}", names.join(", "))
            }
            Self::DuplicateColumns(names) => {
                write!(f, "Duplicated columns in table: {}", names.join(", "))
            }
            Self::MalformedUri { uri, reason } => {
                write!(f, "Malformed target URI '{uri}': {reason}")
            }
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PublisherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PublisherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PublisherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<anyhow::Error> for PublisherError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Result type alias for publisher operations.
pub type Result<T> = std::result::Result<T, PublisherError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<PublisherError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: PublisherError = e.into();
            PublisherError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: PublisherError = e.into();
            PublisherError::Other(format!("{}: {}", f(), err))
        })
    }
}
