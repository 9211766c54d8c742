//! Parsed GitHub URL record

use serde::Serialize;

/// Which layout of path segments a URL was read with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlShape {
    /// `orgs/[owner]/projects/[number]`
    OrgProject,
    /// `[owner]/[repo]/pull/[number]` or `[owner]/[repo]/projects/[number]`
    RepoScopedNumbered,
    /// `[owner]/[repo]/[endpoint]/[value]`
    Generic,
}

/// Trailing value of a generic URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UrlValue {
    Number(u64),
    Text(String),
}

impl UrlValue {
    /// Classify a raw segment: all ASCII digits become a number
    pub fn from_segment(segment: &str) -> Self {
        if !segment.is_empty()
            && segment.bytes().all(|b| b.is_ascii_digit())
            && let Ok(number) = segment.parse()
        {
            return UrlValue::Number(number);
        }
        UrlValue::Text(segment.to_string())
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            UrlValue::Number(number) => Some(*number),
            UrlValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            UrlValue::Number(_) => None,
            UrlValue::Text(text) => Some(text),
        }
    }
}

impl std::fmt::Display for UrlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlValue::Number(number) => write!(f, "{}", number),
            UrlValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Identifiers recovered from a GitHub URL
///
/// Fields are absent when the URL is too short to reach their position, so
/// callers must check the ones they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHubReference {
    pub shape: UrlShape,
    pub scope: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub endpoint: Option<String>,
    pub number: Option<u64>,
    pub value: Option<UrlValue>,
}

impl GitHubReference {
    pub(crate) fn empty(shape: UrlShape) -> Self {
        Self {
            shape,
            scope: None,
            owner: None,
            repo: None,
            endpoint: None,
            number: None,
            value: None,
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn repo(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// `true` for organization-level URLs (`github.com/orgs/...`)
    pub fn is_org_scoped(&self) -> bool {
        self.shape == UrlShape::OrgProject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_value_from_numeric_segment() {
        assert_eq!(UrlValue::from_segment("42"), UrlValue::Number(42));
        assert_eq!(UrlValue::from_segment("0"), UrlValue::Number(0));
    }

    #[test]
    fn test_url_value_keeps_mixed_segment_as_text() {
        assert_eq!(
            UrlValue::from_segment("42abc"),
            UrlValue::Text("42abc".to_string())
        );
        assert_eq!(
            UrlValue::from_segment("branch-name"),
            UrlValue::Text("branch-name".to_string())
        );
    }

    #[test]
    fn test_url_value_overflow_stays_text() {
        let huge = "99999999999999999999999";
        assert_eq!(UrlValue::from_segment(huge), UrlValue::Text(huge.to_string()));
    }

    #[test]
    fn test_url_value_accessors() {
        assert_eq!(UrlValue::Number(7).as_number(), Some(7));
        assert_eq!(UrlValue::Number(7).as_text(), None);
        assert_eq!(UrlValue::Text("main".to_string()).as_text(), Some("main"));
        assert_eq!(UrlValue::Text("main".to_string()).to_string(), "main");
    }

    #[test]
    fn test_reference_serializes_untagged_value() {
        let mut reference = GitHubReference::empty(UrlShape::Generic);
        reference.value = Some(UrlValue::Number(3));
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["shape"], "generic");
        assert_eq!(json["value"], 3);
        assert!(json["owner"].is_null());
    }
}
