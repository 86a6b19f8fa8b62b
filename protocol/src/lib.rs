use serde::{Deserialize, Serialize};

/// One track from the search endpoint. `track_id` is unique within a response and used as the list key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub track_id: i64,
    pub track_name: String,
    pub collection_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
}
