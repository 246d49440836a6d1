use std::fmt;

use url::form_urlencoded;
use url::Url;

/// Route that owns the search form; searches always target it.
pub const SEARCH_PATH: &str = "/";
/// Query parameter carrying the search term.
pub const QUERY_PARAM: &str = "q";

// Only used to resolve relative hrefs; never rendered.
const RESOLVE_BASE: &str = "http://contacts.invalid/";

pub type LocationError = url::ParseError;

/// A path plus the optional `q` search parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    query: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
        }
    }

    pub fn with_query(path: impl Into<String>, query: Option<String>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Search target for the text currently in the field. An empty value
    /// clears the filter instead of sending `q=`.
    pub fn search(value: &str) -> Self {
        let query = (!value.is_empty()).then(|| value.to_owned());
        Self::with_query(SEARCH_PATH, query)
    }

    /// Parses an absolute path or a relative href such as `/?q=al`.
    pub fn parse(href: &str) -> Result<Self, LocationError> {
        let url = Url::parse(RESOLVE_BASE)?.join(href)?;
        let query = url
            .query_pairs()
            .find(|(key, _)| key == QUERY_PARAM)
            .map(|(_, value)| value.into_owned());
        Ok(Self {
            path: url.path().to_owned(),
            query,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// True when the location carries a `q` parameter, even an empty one.
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    pub fn href(&self) -> String {
        match &self.query {
            None => self.path.clone(),
            Some(query) => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .append_pair(QUERY_PARAM, query)
                    .finish();
                format!("{}?{}", self.path, encoded)
            }
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(SEARCH_PATH)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_drops_the_parameter() {
        assert_eq!(Location::search("").href(), "/");
        assert_eq!(Location::search("al").href(), "/?q=al");
    }

    #[test]
    fn href_encodes_and_parse_decodes() {
        let location = Location::search("ann marie&co");
        assert_eq!(location.href(), "/?q=ann+marie%26co");
        assert_eq!(Location::parse(&location.href()).unwrap(), location);
    }

    #[test]
    fn parse_keeps_present_but_empty_query() {
        let location = Location::parse("/?q=").unwrap();
        assert_eq!(location.query(), Some(""));
        assert!(location.has_query());

        let plain = Location::parse("/contacts/abc?other=1").unwrap();
        assert_eq!(plain.path(), "/contacts/abc");
        assert!(!plain.has_query());
    }
}
