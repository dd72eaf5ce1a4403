//! Warehouse location extraction from storage URIs.

use crate::error::{PublisherError, Result};
use percent_encoding::percent_decode_str;
use url::Url;

/// Minimum number of path segments: at least one directory plus the file.
const MIN_PATH_SEGMENTS: usize = 2;

/// Strip scheme, host and the trailing file segment from `uri`.
///
/// `hdfs://nn/cf/broker/instances/9614e6a4/3460a1d320b2/000000_1` becomes
/// `/cf/broker/instances/9614e6a4/3460a1d320b2`. Percent-escapes are decoded,
/// so `hdfs://nn/my%20dir/file` names the directory `/my dir`.
///
/// # Errors
///
/// Returns [`PublisherError::MalformedUri`] when `uri` is not absolute, has no
/// host, has fewer than two non-empty path segments, carries characters that
/// must be escaped (raw spaces, non-ASCII) or escapes that are not UTF-8.
pub fn extract_location(uri: &str) -> Result<String> {
    let url = Url::parse(uri).map_err(|e| PublisherError::malformed_uri(uri, e.to_string()))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(PublisherError::malformed_uri(uri, "missing host"));
    }

    // The parser escapes what a well-formed URI must not contain raw.
    if !uri.contains(url.path()) {
        return Err(PublisherError::malformed_uri(
            uri,
            "path contains characters that must be percent-encoded",
        ));
    }

    let segments: Vec<&str> = url
        .path_segments()
        .ok_or_else(|| PublisherError::malformed_uri(uri, "URI has no hierarchical path"))?
        .collect();

    if segments.len() < MIN_PATH_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
        return Err(PublisherError::malformed_uri(
            uri,
            "expected a path of at least one directory and a file name",
        ));
    }

    let directories = segments
        .get(..segments.len() - 1)
        .unwrap_or_default()
        .iter()
        .map(|s| {
            percent_decode_str(s).decode_utf8().map_err(|e| {
                PublisherError::malformed_uri(uri, format!("path is not valid UTF-8: {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("/{}", directories.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hdfs_location() {
        let location =
            extract_location("hdfs://10.10.123.123/cf/broker/instances/9614e6a4/3460a1d320b2/000000_1")
                .unwrap();
        assert_eq!(location, "/cf/broker/instances/9614e6a4/3460a1d320b2");
    }

    #[test]
    fn test_host_with_port_and_query_dropped() {
        let location = extract_location("hdfs://nameservice1:8020/data/org/file.csv?x=1").unwrap();
        assert_eq!(location, "/data/org");
    }

    #[test]
    fn test_single_directory() {
        assert_eq!(extract_location("s3://bucket/dir/file").unwrap(), "/dir");
    }

    #[test]
    fn test_percent_escapes_decoded() {
        assert_eq!(
            extract_location("hdfs://nn/my%20dir/file").unwrap(),
            "/my dir"
        );
        assert_eq!(
            extract_location("hdfs://nn/d%C3%A9j%C3%A0/sub/file").unwrap(),
            "/d\u{e9}j\u{e0}/sub"
        );
    }

    #[test]
    fn test_rejects_unescaped_characters() {
        let err = extract_location("hdfs://nn/my dir/file").unwrap_err();
        assert!(matches!(err, PublisherError::MalformedUri { .. }));
        assert!(extract_location("hdfs://nn/d\u{e9}j\u{e0}/file").is_err());
    }

    #[test]
    fn test_rejects_invalid_utf8_escape() {
        let err = extract_location("hdfs://nn/bad%FFdir/file").unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_rejects_relative_uri() {
        let err = extract_location("/cf/broker/instances/12/34/000000_1").unwrap_err();
        assert!(matches!(err, PublisherError::MalformedUri { .. }));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(extract_location("file:///cf/broker/000000_1").is_err());
    }

    #[test]
    fn test_rejects_file_directly_under_root() {
        assert!(extract_location("hdfs://nn/000000_1").is_err());
        assert!(extract_location("hdfs://nn/").is_err());
        assert!(extract_location("hdfs://nn").is_err());
    }

    #[test]
    fn test_rejects_trailing_separator_or_empty_segment() {
        assert!(extract_location("hdfs://nn/dir/").is_err());
        assert!(extract_location("hdfs://nn/dir//file").is_err());
    }

    #[test]
    fn test_rejects_opaque_uri() {
        assert!(extract_location("mailto:someone@example.com").is_err());
    }
}
