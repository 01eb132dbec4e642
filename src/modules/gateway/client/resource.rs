use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::shared::pagination::DEFAULT_PER_PAGE;

/// Names the three payload shapes of one backend resource.
pub trait Resource: Send + Sync + 'static {
    /// Stored document as returned by the backend.
    type Item: Serialize + DeserializeOwned + Send + Sync;
    /// Creation payload.
    type Create: Serialize + DeserializeOwned + Send + Sync;
    /// Partial update payload. Omitted fields are left untouched.
    type Update: Serialize + DeserializeOwned + Send + Sync;
}

/// Query of a paged listing. `extra` is forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            extra: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("perPage".to_string(), self.per_page.to_string()),
        ];

        if let Some(ref search) = self.search {
            pairs.push(("search".to_string(), search.clone()));
        }

        pairs.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}
