//! Minor line and patch number parsing for version identifiers
//!
//! Patch releases carry a `-p<N>` suffix ("2.4.7-p8"). Stripping the suffix
//! yields the minor line ("2.4.7") shared by all patches of a release.

use std::sync::LazyLock;

use regex::Regex;

static PATCH_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-p(\d+)$").expect("patch suffix pattern is valid"));

/// Returns the version with any trailing `-p<digits>` suffix removed.
///
/// Examples:
/// - "2.4.7-p8" -> "2.4.7"
/// - "2.4.8" -> "2.4.8"
pub fn minor_line(version: &str) -> &str {
    match PATCH_SUFFIX.find(version) {
        Some(m) => &version[..m.start()],
        None => version,
    }
}

/// Returns the number following a trailing `-p` suffix, or 0 if there is none.
///
/// Suffixes too large for a `u64` saturate to `u64::MAX`.
pub fn patch_number(version: &str) -> u64 {
    PATCH_SUFFIX
        .captures(version)
        .map(|caps| caps[1].parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.4.7-p8", "2.4.7")]
    #[case("2.4.8", "2.4.8")]
    #[case("2.4.6-p13", "2.4.6")]
    #[case("2.4.7-p", "2.4.7-p")] // no digits, not a patch suffix
    #[case("2.4.7-p1-beta", "2.4.7-p1-beta")] // suffix must be at the end
    #[case("2.4.7-beta1", "2.4.7-beta1")]
    #[case("", "")]
    fn minor_line_strips_trailing_patch_suffix(#[case] version: &str, #[case] expected: &str) {
        assert_eq!(minor_line(version), expected);
    }

    #[rstest]
    #[case("2.4.7-p8", 8)]
    #[case("2.4.6-p13", 13)]
    #[case("2.4.8", 0)]
    #[case("2.4.7-p", 0)]
    #[case("2.4.7-p1-beta", 0)]
    #[case("2.4.7-p007", 7)]
    #[case("2.4.7-p99999999999999999999999", u64::MAX)]
    fn patch_number_parses_trailing_patch_suffix(#[case] version: &str, #[case] expected: u64) {
        assert_eq!(patch_number(version), expected);
    }

    #[rstest]
    #[case("2.4.7")]
    #[case("2.4.8-beta1")]
    #[case("1.0")]
    fn version_without_suffix_is_its_own_line_with_patch_zero(#[case] version: &str) {
        assert_eq!(minor_line(version), version);
        assert_eq!(patch_number(version), 0);
    }

    #[rstest]
    #[case("2.4.7", 1)]
    #[case("2.4.7", 42)]
    #[case("2.3", 5)]
    fn patch_release_splits_into_line_and_number(#[case] line: &str, #[case] number: u64) {
        let version = format!("{line}-p{number}");

        assert_eq!(minor_line(&version), line);
        assert_eq!(patch_number(&version), number);
    }
}
