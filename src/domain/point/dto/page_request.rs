/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parses `prop` or `prop,dir`. Unknown directions fall back to ascending.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(2, ',');
        let property = parts.next()?.trim();
        if property.is_empty() {
            return None;
        }

        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            Some(d) if d == "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        Some(Self {
            property: property.to_string(),
            direction,
        })
    }

    pub fn to_param(&self) -> String {
        format!("{},{}", self.property, self.direction.as_str())
    }
}

/// Zero-based page request, mirroring the `page`/`size`/`sort` query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: Vec<SortOrder>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    pub fn parse(page: Option<usize>, size: Option<usize>, sort: &[String]) -> Self {
        Self {
            page: page.unwrap_or(0),
            size: size.filter(|s| *s > 0).unwrap_or(DEFAULT_PAGE_SIZE),
            sort: sort.iter().filter_map(|s| SortOrder::parse(s)).collect(),
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Query pairs in the form the REST resource expects.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        pairs.extend(self.sort.iter().map(|s| ("sort".to_string(), s.to_param())));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sort_defaults_to_ascending() {
        let s = SortOrder::parse("title").unwrap();
        assert_eq!(s.direction, SortDirection::Asc);
        assert_eq!(SortOrder::parse("id,DESC").unwrap().direction, SortDirection::Desc);
        assert!(SortOrder::parse(",asc").is_none());
    }

    #[test]
    fn zero_size_uses_default() {
        let page = PageRequest::parse(Some(2), Some(0), &[]);
        assert_eq!(page.size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset(), 40);
    }

    #[test]
    fn to_query_repeats_sort() {
        let page = PageRequest::parse(Some(1), Some(5), &["id,desc".into(), "title".into()]);
        assert_eq!(
            page.to_query(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("size".to_string(), "5".to_string()),
                ("sort".to_string(), "id,desc".to_string()),
                ("sort".to_string(), "title,asc".to_string()),
            ]
        );
    }
}
