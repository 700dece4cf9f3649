//! HTML field extraction from cached product pages.

use crate::error::{CrateError, Result};
use scraper::{Html, Selector};

const SCIENTIFIC_NAME_SELECTOR: &str = "span.current-item";
const COMMON_NAME_SELECTOR: &str = "h1 span";
const DESCRIPTION_SELECTOR: &str = "div.product-information--description";

/// Raw text pulled from the three fixed selectors of a product page. The
/// description is left unnormalized here; see `cleanup::normalize_description`.
#[derive(Debug, Clone)]
pub struct PageFields {
    pub scientific_name: String,
    pub common_name: String,
    pub description: String,
}

pub fn extract_page_fields(html: &str) -> Result<PageFields> {
    let document = Html::parse_document(html);
    Ok(PageFields {
        scientific_name: select_text(&document, SCIENTIFIC_NAME_SELECTOR)?,
        common_name: select_text(&document, COMMON_NAME_SELECTOR)?,
        description: select_text(&document, DESCRIPTION_SELECTOR)?,
    })
}

// Concatenated text of every element matching the selector, so multiple
// matches behave like Nokogiri's NodeSet#text.
fn select_text(document: &Html, css: &str) -> Result<String> {
    let selector = Selector::parse(css).map_err(|e| CrateError::SelectorParseError {
        selector: css.to_string(),
        message: e.to_string(),
    })?;
    Ok(document
        .select(&selector)
        .flat_map(|element| element.text())
        .collect())
}
