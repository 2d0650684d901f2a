//! Point API DTOs

use crate::domain::point::dto::page_request::PageRequest;

/// Query string of the list and search endpoints.
///
/// Parsed from the raw query because `sort` may repeat.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PointListQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Vec<String>,
    pub query: Option<String>,
}

impl PointListQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let mut out = Self::default();
        let Some(raw) = raw else {
            return out;
        };

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match key {
                "page" => out.page = value.parse().ok(),
                "size" => out.size = value.parse().ok(),
                "sort" => out.sort.push(value),
                "query" => out.query = Some(value),
                _ => {}
            }
        }
        out
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.page, self.size, &self.sort)
    }
}

fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|v| v.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_sort_and_encoded_query() {
        let q = PointListQuery::from_raw(Some("page=1&size=5&sort=id%2Cdesc&sort=title&query=north+pier"));
        assert_eq!(q.page, Some(1));
        assert_eq!(q.size, Some(5));
        assert_eq!(q.sort, vec!["id,desc".to_string(), "title".to_string()]);
        assert_eq!(q.query.as_deref(), Some("north pier"));
    }

    #[test]
    fn missing_query_uses_defaults() {
        let page = PointListQuery::from_raw(None).page_request();
        assert_eq!(page, PageRequest::default());
    }
}
