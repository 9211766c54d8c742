//! GitHub URL parsing

use crate::error::UrlError;
use crate::reference::{GitHubReference, UrlShape, UrlValue};
use lazy_regex::{Lazy, Regex, lazy_regex};

/// URL layouts accepted by [`parse_github_url`], as shown to users
pub const SUPPORTED_GITHUB_URL_PATTERNS: [&str; 4] = [
    "https://github.com/[owner]/[repository]/[endpoint]/[value]",
    "https://github.com/[scope]/[owner]/[endpoint]/[value]",
    "github.com/[owner]/[repository]/[endpoint]/[value]",
    "[subdomain].github.com/[owner]/[repository]/[endpoint]/[value]",
];

/// Anything up to the last `github.com/` or `github.com:`, then an ASCII path
static GITHUB_URL_RE: Lazy<Regex> =
    lazy_regex!(r"^(?:\S*(?i:github\.com)[/:])+([A-Za-z0-9_\-./#]+)");

/// Decide how the path segments of a GitHub URL are laid out
///
/// Organization URLs are recognised by their first segment; everything else
/// is repository-scoped and told apart by the endpoint in third position.
pub fn classify(segments: &[&str]) -> UrlShape {
    match segments {
        ["orgs", ..] => UrlShape::OrgProject,
        [_, _, "projects" | "pull", ..] => UrlShape::RepoScopedNumbered,
        _ => UrlShape::Generic,
    }
}

/// Parse a GitHub URL into its owner, repository, endpoint and identifier
///
/// Supports the layouts listed in [`SUPPORTED_GITHUB_URL_PATTERNS`]:
/// - Repository: `https://github.com/owner/repo/pull/42`
/// - Organization project: `https://github.com/orgs/owner/projects/5`
/// - Scheme-less: `github.com/owner/repo/tree/main`
/// - Subdomain: `api.github.com/owner/repo/issues/3`
///
/// A fragment glued onto the last segment with a hyphen selects the number
/// after the hyphen, so `.../projects/5#column-99` yields column `99` and
/// `.../pull/1#issuecomment-7` yields comment `7`.
///
/// # Errors
/// - [`UrlError::InvalidUrl`] when the input has no `github.com` path
/// - [`UrlError::NumberExtraction`] when a pull or project URL ends in a
///   segment without digits
pub fn parse_github_url(input: &str) -> Result<GitHubReference, UrlError> {
    let path = GITHUB_URL_RE
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| UrlError::InvalidUrl {
            input: input.to_string(),
        })?;

    let segments: Vec<&str> = path.split('/').collect();
    let field = |index: usize| {
        segments
            .get(index)
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_string())
    };

    let shape = classify(&segments);
    let mut reference = GitHubReference::empty(shape);
    match shape {
        UrlShape::OrgProject => {
            reference.scope = field(0);
            reference.owner = field(1);
            reference.endpoint = field(2);
            reference.number = extract_number(segments.get(3).copied())?;
        }
        UrlShape::RepoScopedNumbered => {
            reference.owner = field(0);
            reference.repo = field(1);
            reference.endpoint = field(2);
            reference.number = extract_number(segments.get(3).copied())?;
        }
        UrlShape::Generic => {
            reference.owner = field(0);
            reference.repo = field(1);
            reference.endpoint = field(2);
            reference.value = field(3).map(|segment| UrlValue::from_segment(&segment));
        }
    }

    Ok(reference)
}

/// Number from a trailing segment, preferring the part after the first hyphen
fn extract_number(segment: Option<&str>) -> Result<Option<u64>, UrlError> {
    let Some(segment) = segment.filter(|segment| !segment.is_empty()) else {
        return Ok(None);
    };

    let candidate = match segment.split('-').nth(1) {
        Some(part) if !part.is_empty() => part,
        _ => segment,
    };

    leading_integer(candidate)
        .map(Some)
        .ok_or_else(|| UrlError::NumberExtraction {
            segment: segment.to_string(),
        })
}

/// Integer formed by the leading ASCII digits of `text`
fn leading_integer(text: &str) -> Option<u64> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(value: &str) -> Option<UrlValue> {
        Some(UrlValue::Text(value.to_string()))
    }

    #[rstest]
    #[case::https_repository("https://github.com/octo/hello/tree/main", "octo", Some("hello"), "tree")]
    #[case::https_org_scope("https://github.com/orgs/octo/projects/3", "octo", None, "projects")]
    #[case::scheme_less("github.com/octo/hello/pull/7", "octo", Some("hello"), "pull")]
    #[case::subdomain("enterprise.github.com/octo/hello/issues/9", "octo", Some("hello"), "issues")]
    fn test_parse_supported_templates(
        #[case] url: &str,
        #[case] owner: &str,
        #[case] repo: Option<&str>,
        #[case] endpoint: &str,
    ) {
        let reference = parse_github_url(url).unwrap();
        assert_eq!(reference.owner(), Some(owner));
        assert_eq!(reference.repo(), repo);
        assert_eq!(reference.endpoint(), Some(endpoint));
    }

    #[test]
    fn test_parse_org_project_column() {
        let reference = parse_github_url("https://github.com/orgs/Acme/projects/5#column-99").unwrap();
        assert_eq!(reference.shape, UrlShape::OrgProject);
        assert_eq!(reference.scope.as_deref(), Some("orgs"));
        assert_eq!(reference.owner(), Some("Acme"));
        assert_eq!(reference.repo(), None);
        assert_eq!(reference.endpoint(), Some("projects"));
        assert_eq!(reference.number, Some(99));
        assert_eq!(reference.value, None);
        assert!(reference.is_org_scoped());
    }

    #[test]
    fn test_parse_org_project_without_column() {
        let reference = parse_github_url("https://github.com/orgs/Acme/projects/5").unwrap();
        assert_eq!(reference.number, Some(5));
    }

    #[test]
    fn test_parse_pull_request() {
        let reference = parse_github_url("https://github.com/Owner/Repo/pull/42").unwrap();
        assert_eq!(reference.shape, UrlShape::RepoScopedNumbered);
        assert_eq!(reference.scope, None);
        assert_eq!(reference.owner(), Some("Owner"));
        assert_eq!(reference.repo(), Some("Repo"));
        assert_eq!(reference.endpoint(), Some("pull"));
        assert_eq!(reference.number, Some(42));
        assert_eq!(reference.value, None);
    }

    #[test]
    fn test_parse_pull_request_comment_fragment() {
        let reference =
            parse_github_url("https://github.com/Test-Owner/Test-Repo/pull/1#issuecomment-1234").unwrap();
        assert_eq!(reference.owner(), Some("Test-Owner"));
        assert_eq!(reference.repo(), Some("Test-Repo"));
        assert_eq!(reference.number, Some(1234));
    }

    #[test]
    fn test_parse_pull_request_fragment_without_hyphen() {
        let reference = parse_github_url("https://github.com/o/r/pull/42#discussion_r77").unwrap();
        assert_eq!(reference.number, Some(42));
    }

    #[test]
    fn test_parse_hyphen_collapsed_fragment() {
        let reference = parse_github_url("https://github.com/o/r/projects/123-456").unwrap();
        assert_eq!(reference.number, Some(456));
    }

    #[test]
    fn test_parse_repository_project() {
        let reference = parse_github_url("https://github.com/o/r/projects/8").unwrap();
        assert_eq!(reference.shape, UrlShape::RepoScopedNumbered);
        assert_eq!(reference.number, Some(8));
    }

    #[test]
    fn test_parse_generic_text_value() {
        let reference = parse_github_url("https://github.com/Owner/Repo/tree/branch-name").unwrap();
        assert_eq!(reference.shape, UrlShape::Generic);
        assert_eq!(reference.owner(), Some("Owner"));
        assert_eq!(reference.repo(), Some("Repo"));
        assert_eq!(reference.endpoint(), Some("tree"));
        assert_eq!(reference.number, None);
        assert_eq!(reference.value, text("branch-name"));
    }

    #[test]
    fn test_parse_generic_numeric_value() {
        let reference = parse_github_url("https://github.com/Owner/Repo/issues/17").unwrap();
        assert_eq!(reference.value, Some(UrlValue::Number(17)));
        assert_eq!(reference.number, None);
    }

    #[test]
    fn test_parse_repository_name_with_dots() {
        let reference = parse_github_url("https://github.com/owner/repo.rs/pull/3").unwrap();
        assert_eq!(reference.repo(), Some("repo.rs"));
        assert_eq!(reference.number, Some(3));
    }

    #[test]
    fn test_parse_is_case_insensitive_on_host() {
        let reference = parse_github_url("HTTPS://GitHub.COM/Owner/Repo/pull/5").unwrap();
        assert_eq!(reference.owner(), Some("Owner"));
        assert_eq!(reference.number, Some(5));
    }

    #[test]
    fn test_parse_ssh_style_separator() {
        let reference = parse_github_url("git@github.com:owner/repo").unwrap();
        assert_eq!(reference.owner(), Some("owner"));
        assert_eq!(reference.repo(), Some("repo"));
        assert_eq!(reference.endpoint(), None);
        assert_eq!(reference.value, None);
    }

    #[rstest]
    #[case("https://github.com/owner")]
    #[case("https://github.com/owner/repo")]
    #[case("https://github.com/owner/repo/pull")]
    #[case("https://github.com/owner/repo/pull/")]
    #[case("https://github.com/orgs/acme")]
    fn test_parse_short_urls_leave_fields_absent(#[case] url: &str) {
        let reference = parse_github_url(url).unwrap();
        assert_eq!(reference.number, None);
        assert_eq!(reference.value, None);
    }

    #[test]
    fn test_parse_short_pull_url_keeps_known_fields() {
        let reference = parse_github_url("https://github.com/owner/repo/pull").unwrap();
        assert_eq!(reference.shape, UrlShape::RepoScopedNumbered);
        assert_eq!(reference.owner(), Some("owner"));
        assert_eq!(reference.repo(), Some("repo"));
        assert_eq!(reference.endpoint(), Some("pull"));
    }

    #[test]
    fn test_parse_invalid_url_lists_templates() {
        let error = parse_github_url("not-a-url").unwrap_err();
        assert!(matches!(error, UrlError::InvalidUrl { ref input } if input == "not-a-url"));

        let message = error.to_string();
        assert!(message.starts_with("Invalid GitHub URL."));
        for pattern in SUPPORTED_GITHUB_URL_PATTERNS {
            assert!(message.contains(&format!("- {}", pattern)), "missing {pattern}");
        }
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        assert!(matches!(
            parse_github_url("https://gitlab.com/owner/repo/pull/1"),
            Err(UrlError::InvalidUrl { .. })
        ));
        assert!(matches!(parse_github_url(""), Err(UrlError::InvalidUrl { .. })));
    }

    #[test]
    fn test_parse_pull_without_digits_fails() {
        let error = parse_github_url("https://github.com/owner/repo/pull/abc").unwrap_err();
        assert_eq!(
            error,
            UrlError::NumberExtraction {
                segment: "abc".to_string()
            }
        );
        assert_eq!(error.to_string(), "Could not get the project number.");
    }

    #[test]
    fn test_parse_number_overflow_fails() {
        let error = parse_github_url("https://github.com/o/r/pull/99999999999999999999999").unwrap_err();
        assert_eq!(
            error,
            UrlError::NumberExtraction {
                segment: "99999999999999999999999".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_ascii_owner() {
        assert!(matches!(
            parse_github_url("github.com/ö/r/pull/4"),
            Err(UrlError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_stops_path_at_non_ascii() {
        let reference = parse_github_url("github.com/owner/repö/pull/4").unwrap();
        assert_eq!(reference.owner(), Some("owner"));
        assert_eq!(reference.repo(), Some("rep"));
        assert_eq!(reference.endpoint(), None);
    }

    #[test]
    fn test_parse_org_project_with_bad_column_fails() {
        let result = parse_github_url("https://github.com/orgs/acme/projects/5#column-x");
        assert!(matches!(result, Err(UrlError::NumberExtraction { .. })));
    }

    #[test]
    fn test_parse_trailing_hyphen_falls_back_to_segment() {
        let reference = parse_github_url("https://github.com/o/r/pull/12-").unwrap();
        assert_eq!(reference.number, Some(12));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let url = "https://github.com/orgs/Acme/projects/5#column-99";
        assert_eq!(parse_github_url(url).unwrap(), parse_github_url(url).unwrap());
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&["orgs", "acme", "projects", "1"]), UrlShape::OrgProject);
        assert_eq!(classify(&["o", "r", "pull", "1"]), UrlShape::RepoScopedNumbered);
        assert_eq!(classify(&["o", "r", "projects"]), UrlShape::RepoScopedNumbered);
        assert_eq!(classify(&["o", "r", "tree", "main"]), UrlShape::Generic);
        assert_eq!(classify(&["o"]), UrlShape::Generic);
        assert_eq!(classify(&[]), UrlShape::Generic);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("99"), Some(99));
        assert_eq!(leading_integer("5#column"), Some(5));
        assert_eq!(leading_integer("column"), None);
        assert_eq!(leading_integer("99999999999999999999999"), None);
        assert_eq!(leading_integer(""), None);
    }
}
