use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.per_page as u64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> PageResult<T> {
    pub fn empty(page: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: page.page,
            per_page: page.per_page,
        }
    }
}

/// Collection query string shared by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

impl ListParams {
    /// A page is only requested when the caller names one.
    pub fn page_request(&self) -> Option<PageRequest> {
        page_request(self.page, self.per_page)
    }

    pub fn search(&self) -> Option<String> {
        normalized_search(self.search.as_deref())
    }
}

pub fn page_request(page: Option<u32>, per_page: Option<u32>) -> Option<PageRequest> {
    if page.is_none() && per_page.is_none() {
        None
    } else {
        Some(PageRequest::new(page, per_page))
    }
}

pub fn normalized_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Either the whole collection or one page of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    All(Vec<T>),
    Page(PageResult<T>),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Listing::All(items) => items,
            Listing::Page(page) => &page.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_only_when_asked_for() {
        let params = ListParams::default();
        assert_eq!(params.page_request(), None);

        let params = ListParams {
            per_page: Some(5),
            ..Default::default()
        };
        assert_eq!(
            params.page_request(),
            Some(PageRequest {
                page: 1,
                per_page: 5
            })
        );
    }

    #[test]
    fn page_request_is_clamped() {
        let page = PageRequest::new(Some(0), Some(10_000));

        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, MAX_PER_PAGE);
        assert_eq!(PageRequest::new(Some(3), Some(20)).offset(), 40);
    }

    #[test]
    fn blank_search_is_ignored() {
        assert_eq!(normalized_search(Some("   ")), None);
        assert_eq!(normalized_search(Some(" rust ")), Some("rust".to_string()));
    }

    #[test]
    fn listing_serializes_without_a_tag() {
        let all = serde_json::to_value(Listing::All(vec![1, 2])).unwrap();
        assert_eq!(all, serde_json::json!([1, 2]));

        let page = serde_json::to_value(Listing::Page(PageResult {
            items: vec![1],
            total: 3,
            page: 2,
            per_page: 1,
        }))
        .unwrap();
        assert_eq!(page["perPage"], 1);
        assert_eq!(page["total"], 3);
    }
}
