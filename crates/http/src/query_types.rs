//! Request/query types (Deserialize)

use serde::Deserialize;

/// `?page=&page_size=` kept as raw strings so junk values fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

impl PageQuery {
    pub fn page(&self) -> Option<i64> {
        lenient_int(self.page.as_deref())
    }

    pub fn page_size(&self) -> Option<i64> {
        lenient_int(self.page_size.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junk_page_values_are_ignored() {
        let query = PageQuery { page: Some("abc".to_owned()), page_size: Some(" 5 ".to_owned()) };
        assert_eq!(query.page(), None);
        assert_eq!(query.page_size(), Some(5));
        assert_eq!(PageQuery::default().page(), None);
    }
}
