//! Search-API response model: the single-result URL and the facet array.

use serde::Deserialize;

pub const SEARCH_API_URL: &str = "https://api.searchspring.net/api/search/search";

const HEIGHT_FIELD: &str = "search_spring_ht";

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "singleResult")]
    single_result: Option<String>,
    #[serde(default)]
    facets: Vec<Facet>,
}

#[derive(Debug, Deserialize)]
struct Facet {
    field: String,
    #[serde(default)]
    values: Vec<FacetValue>,
    range: Option<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct FacetValue {
    value: String,
}

impl SearchResponse {
    pub fn parse(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// Product-page URL: base URL plus the relative `singleResult` path.
    pub fn page_url(&self, base_url: &str) -> Option<String> {
        self.single_result
            .as_deref()
            .map(|path| format!("{}{}", base_url, path))
    }

    /// Values of the named facet joined with `"; "`. An unknown field name is
    /// not an error; it yields `""`.
    pub fn facet_values(&self, field: &str) -> String {
        self.facets
            .iter()
            .find(|facet| facet.field == field)
            .map(|facet| {
                facet
                    .values
                    .iter()
                    .map(|v| v.value.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default()
    }

    /// `[min, max]` of the height facet, absent when the facet is missing or
    /// carries no range.
    pub fn height_range(&self) -> Option<[f64; 2]> {
        self.facets
            .iter()
            .find(|facet| facet.field == HEIGHT_FIELD)
            .and_then(|facet| facet.range)
    }
}
