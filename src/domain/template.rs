use crate::error::{RankError, Result};
use std::fmt;

const PLACEHOLDER: &str = "{}";

/// A listing URL with exactly one `{}` where the page number goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        match template.matches(PLACEHOLDER).count() {
            1 => Ok(Self(template.to_string())),
            0 => Err(RankError::Template(format!(
                "no `{PLACEHOLDER}` placeholder in {template}"
            ))),
            n => Err(RankError::Template(format!(
                "{n} `{PLACEHOLDER}` placeholders in {template}, expected one"
            ))),
        }
    }

    pub fn page_url(&self, page: u32) -> String {
        self.0.replacen(PLACEHOLDER, &page.to_string(), 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_page_number() {
        let template = UrlTemplate::parse("https://ex.com/r?page={}").unwrap();
        assert_eq!(template.page_url(1), "https://ex.com/r?page=1");
        assert_eq!(template.page_url(20), "https://ex.com/r?page=20");
    }

    #[test]
    fn placeholder_may_sit_in_the_path() {
        let template = UrlTemplate::parse("https://ex.com/rank/{}/list").unwrap();
        assert_eq!(template.page_url(4), "https://ex.com/rank/4/list");
    }

    #[test]
    fn rejects_missing_or_repeated_placeholder() {
        assert!(matches!(
            UrlTemplate::parse("https://ex.com/r"),
            Err(RankError::Template(_))
        ));
        assert!(matches!(
            UrlTemplate::parse("https://ex.com/{}/r?page={}"),
            Err(RankError::Template(_))
        ));
    }
}
