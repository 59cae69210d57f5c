//! Resource path construction.
//!
//! Every endpoint in this API family addresses resources with the same
//! path grammar: slash-joined segments under `repositories/{username}/{repo}`.
//! This module is the single place that grammar is enforced.

use crate::error::{BucketError, Result};

/// Build a resource path from the given segments.
///
/// Each segment is percent-encoded before joining, so a `/` inside a
/// segment can never be confused with a separator. Empty segments are
/// rejected up front: they would silently address a different resource.
///
/// # Errors
///
/// Returns [`BucketError::InvalidArgument`] if any segment is empty.
pub fn build_path(segments: &[&str]) -> Result<String> {
    let mut encoded = Vec::with_capacity(segments.len());

    for segment in segments {
        if segment.is_empty() {
            return Err(BucketError::InvalidArgument(
                "path segments must not be empty".to_string(),
            ));
        }
        encoded.push(urlencoding::encode(segment).into_owned());
    }

    Ok(encoded.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_path() {
        let path = build_path(&["repositories", "acme", "widgets", "issues"]).unwrap();
        assert_eq!(path, "repositories/acme/widgets/issues");
    }

    #[test]
    fn test_item_path() {
        let path = build_path(&["repositories", "acme", "widgets", "issues", "42"]).unwrap();
        assert_eq!(path, "repositories/acme/widgets/issues/42");
    }

    #[test]
    fn test_round_trip_segments() {
        let path = build_path(&["repositories", "acme", "widgets", "issues", "42"]).unwrap();
        let segments: Vec<&str> = path.split('/').collect();
        assert_eq!(segments, vec!["repositories", "acme", "widgets", "issues", "42"]);
    }

    #[test]
    fn test_separator_in_segment_is_escaped() {
        let path = build_path(&["repositories", "acme/evil", "widgets"]).unwrap();
        assert_eq!(path, "repositories/acme%2Fevil/widgets");
        assert_eq!(path.split('/').count(), 3);
    }

    #[test]
    fn test_space_is_escaped() {
        let path = build_path(&["repositories", "acme", "my widgets"]).unwrap();
        assert_eq!(path, "repositories/acme/my%20widgets");
    }

    #[test]
    fn test_empty_segment_rejected() {
        let err = build_path(&["repositories", "", "widgets"]).unwrap_err();
        assert!(matches!(err, BucketError::InvalidArgument(_)));
    }

    #[test]
    fn test_no_segments() {
        assert_eq!(build_path(&[]).unwrap(), "");
    }
}
