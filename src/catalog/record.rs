//! The flat product record written to the report CSV.

use crate::catalog::cleanup::{clean_advantages, normalize_description};
use crate::catalog::page::PageFields;
use crate::catalog::search::SearchResponse;
use log::warn;

pub const CSV_HEADER: [&str; 13] = [
    "name",
    "commonName",
    "description",
    "url",
    "sun",
    "waterAndSoil",
    "minHtFt",
    "maxHtFt",
    "bloomColor",
    "bloomTime",
    "advantages",
    "germCode",
    "catalogCode",
];

/// One product, fully derived at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub scientific_name: String,
    pub common_name: String,
    pub description: String,
    pub url: String,
    pub sun: String,
    pub water: String,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub bloom_color: String,
    pub bloom_time: String,
    pub advantages: String,
    pub germination_code: String,
    pub catalog_code: String,
}

impl ProductRecord {
    /// Builds the record from the two cached payloads of one catalog code.
    /// A missing height facet degrades to empty height cells with a warning.
    pub fn build(code: &str, search: &SearchResponse, page: &PageFields, url: String) -> Self {
        let height = search.height_range();
        if height.is_none() {
            warn!("No height facet in search result for {}", code);
        }

        Self {
            scientific_name: page.scientific_name.clone(),
            common_name: page.common_name.clone(),
            description: normalize_description(&page.description),
            url,
            sun: search.facet_values("sun_exposure"),
            water: search.facet_values("soil_moisture"),
            min_height: height.map(|range| range[0]),
            max_height: height.map(|range| range[1]),
            bloom_color: search.facet_values("bloom_color"),
            bloom_time: search.facet_values("bloom_time"),
            advantages: clean_advantages(&search.facet_values("ss_advantages")),
            germination_code: search.facet_values("ss_germination_code_facet"),
            catalog_code: code.to_string(),
        }
    }

    pub fn csv_row(&self) -> [String; 13] {
        [
            self.scientific_name.clone(),
            self.common_name.clone(),
            self.description.clone(),
            self.url.clone(),
            self.sun.clone(),
            self.water.clone(),
            format_height(self.min_height),
            format_height(self.max_height),
            self.bloom_color.clone(),
            self.bloom_time.clone(),
            self.advantages.clone(),
            self.germination_code.clone(),
            self.catalog_code.clone(),
        ]
    }
}

// "{}" on f64 already drops a trailing ".0" (2.0 -> "2", 0.5 -> "0.5").
fn format_height(height: Option<f64>) -> String {
    height.map(|h| format!("{}", h)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::page::extract_page_fields;
    use crate::catalog::search::SearchResponse;

    const SEARCH_JSON: &str = r#"{
        "singleResult": "/asclepias-tuberosa.html",
        "facets": [
            {"field": "sun_exposure", "values": [{"value": "Full Sun"}]},
            {"field": "soil_moisture", "values": [{"value": "Dry"}, {"value": "Medium"}]},
            {"field": "bloom_time", "values": [{"value": "June"}, {"value": "July"}]},
            {"field": "bloom_color", "values": [{"value": "Orange"}]},
            {"field": "ss_advantages", "values": [{"value": "Host Plant for Stars"}]},
            {"field": "ss_germination_code_facet", "values": [{"value": "C(30)"}]},
            {"field": "search_spring_ht", "values": [], "range": [1, 2.5]}
        ]
    }"#;

    const PAGE_HTML: &str = r#"
        <span class="current-item">Asclepias tuberosa</span>
        <h1><span>Butterfly Weed</span></h1>
        <div class="product-information--description">Bright orange blooms.Dormant bare root plants ship each year in spring.</div>
    "#;

    fn build_sample() -> ProductRecord {
        let search = SearchResponse::parse(SEARCH_JSON).unwrap();
        let page = extract_page_fields(PAGE_HTML).unwrap();
        let url = search.page_url("https://www.prairiemoon.com").unwrap();
        ProductRecord::build("ASC03F", &search, &page, url)
    }

    #[test]
    fn build_populates_all_fields() {
        let record = build_sample();
        assert_eq!(record.scientific_name, "Asclepias tuberosa");
        assert_eq!(record.common_name, "Butterfly Weed");
        assert_eq!(record.description, "Bright orange blooms.");
        assert_eq!(record.url, "https://www.prairiemoon.com/asclepias-tuberosa.html");
        assert_eq!(record.sun, "Full Sun");
        assert_eq!(record.water, "Dry; Medium");
        assert_eq!(record.min_height, Some(1.0));
        assert_eq!(record.max_height, Some(2.5));
        assert_eq!(record.bloom_color, "Orange");
        assert_eq!(record.bloom_time, "June; July");
        assert_eq!(record.advantages, "Host Plant for Star");
        assert_eq!(record.germination_code, "C(30)");
        assert_eq!(record.catalog_code, "ASC03F");
    }

    #[test]
    fn csv_row_matches_header_order() {
        let record = build_sample();
        let row = record.csv_row();
        assert_eq!(row.len(), CSV_HEADER.len());
        assert_eq!(row[0], "Asclepias tuberosa");
        assert_eq!(row[6], "1");
        assert_eq!(row[7], "2.5");
        assert_eq!(row[12], "ASC03F");
    }

    #[test]
    fn missing_height_facet_degrades_to_empty_cells() {
        let search = SearchResponse::parse(r#"{"singleResult": "/x.html", "facets": []}"#).unwrap();
        let page = extract_page_fields("<html></html>").unwrap();
        let record = ProductRecord::build("XXX01F", &search, &page, "https://example.com/x.html".to_string());
        assert!(record.min_height.is_none());
        let row = record.csv_row();
        assert_eq!(row[6], "");
        assert_eq!(row[7], "");
    }
}
