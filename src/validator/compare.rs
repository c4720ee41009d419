//! Expected/actual digest comparison.

use std::path::Path;

use super::traits::ContentHasher;

/// Exact, case-sensitive digest comparison; an unresolved side never matches.
pub(crate) fn digests_match(expected: Option<&str>, actual: Option<&str>) -> bool {
    match (expected, actual) {
        (Some(e), Some(a)) => e == a,
        _ => false,
    }
}

/// Compute the actual digest of `path` and compare it to `expected`.
/// Logs both values so a mismatch can be diagnosed from the updater log.
pub(crate) fn check<C: ContentHasher>(
    hasher: &C,
    label: &str,
    path: &Path,
    expected: Option<String>,
) -> bool {
    let actual = hasher.file_digest(path);
    tracing::debug!(
        "checking digest of {}: expected={} actual={}",
        label,
        expected.as_deref().unwrap_or("<unresolved>"),
        actual.as_deref().unwrap_or("<unresolved>"),
    );
    digests_match(expected.as_deref(), actual.as_deref())
}
