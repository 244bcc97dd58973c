// Dashboard identifier - the file stem clients use to address a dashboard
use std::fmt;

const MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDashboardId {
    #[error("dashboard id must not be empty")]
    Empty,
    #[error("dashboard id is longer than {MAX_LEN} characters")]
    TooLong,
    #[error("dashboard id contains invalid character {0:?}")]
    InvalidChar(char),
}

/// Identifier restricted to ASCII letters, digits, `-` and `_`, so it can
/// never name anything outside the dashboard folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DashboardId(String);

impl DashboardId {
    pub fn parse(raw: &str) -> Result<Self, InvalidDashboardId> {
        if raw.is_empty() {
            return Err(InvalidDashboardId::Empty);
        }
        if raw.len() > MAX_LEN {
            return Err(InvalidDashboardId::TooLong);
        }
        if let Some(c) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(InvalidDashboardId::InvalidChar(c));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DashboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_allowed_characters() {
        let id = DashboardId::parse("Sales_2024-Q1").unwrap();
        assert_eq!(id.as_str(), "Sales_2024-Q1");
    }

    #[test]
    fn test_parse_rejects_traversal_and_separators() {
        assert_eq!(
            DashboardId::parse("../secret"),
            Err(InvalidDashboardId::InvalidChar('.'))
        );
        assert_eq!(
            DashboardId::parse("a/b"),
            Err(InvalidDashboardId::InvalidChar('/'))
        );
        assert_eq!(
            DashboardId::parse("a b"),
            Err(InvalidDashboardId::InvalidChar(' '))
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_oversized() {
        assert_eq!(DashboardId::parse(""), Err(InvalidDashboardId::Empty));
        assert_eq!(
            DashboardId::parse(&"a".repeat(256)),
            Err(InvalidDashboardId::TooLong)
        );
    }
}
