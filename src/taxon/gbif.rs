//! GBIF species-match client and response model.

use crate::error::{CrateError, Result};
use log::warn;
use serde::Deserialize;
use std::fmt;

const GBIF_MATCH_URL: &str = "https://api.gbif.org/v1/species/match";
pub const USER_AGENT: &str = "florascrape/0.1 (https://github.com/your_repo; your_email@example.com) reqwest/0.12";

/// Body of a GBIF `species/match` response. An unmatched name comes back as
/// `{}`, which deserializes to the all-`None` value.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SpeciesMatch {
    #[serde(rename = "speciesKey")]
    species_key: Option<i64>,
    phylum: Option<String>,
    #[serde(rename = "class")]
    class_name: Option<String>,
    order: Option<String>,
    family: Option<String>,
    genus: Option<String>,
}

impl SpeciesMatch {
    fn is_empty(&self) -> bool {
        self.species_key.is_none()
            && self.phylum.is_none()
            && self.class_name.is_none()
            && self.order.is_none()
            && self.family.is_none()
            && self.genus.is_none()
    }

    /// GBIF species key, absent when the name had no match.
    pub fn id(&self) -> Option<i64> {
        self.species_key
    }

    pub fn classification(&self) -> Option<Classification> {
        if self.is_empty() {
            return None;
        }
        Some(Classification {
            phylum: self.phylum.clone(),
            class: self.class_name.clone(),
            order: self.order.clone(),
            family: self.family.clone(),
            genus: self.genus.clone(),
        })
    }
}

/// Five-rank classification extracted from a match response.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub phylum: Option<String>,
    pub class: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks: Vec<&str> = [
            &self.phylum,
            &self.class,
            &self.order,
            &self.family,
            &self.genus,
        ]
        .iter()
        .filter_map(|rank| rank.as_deref())
        .collect();
        write!(f, "{}", ranks.join(" > "))
    }
}

/// Matches a binomial against GBIF, restricted to kingdom Plantae.
///
/// Non-2xx responses degrade to the empty match so one bad name does not
/// abort a whole run.
pub async fn match_species(binomial: &str, client: &reqwest::Client) -> Result<SpeciesMatch> {
    let response = client
        .get(GBIF_MATCH_URL)
        .query(&[
            ("verbose", "true"),
            ("kingdom", "Plantae"),
            ("name", binomial),
        ])
        .send()
        .await
        .map_err(CrateError::ApiRequestError)?;

    if !response.status().is_success() {
        warn!(
            "Could not get species data for {}: HTTP {}",
            binomial,
            response.status()
        );
        return Ok(SpeciesMatch::default());
    }

    response.json().await.map_err(CrateError::ApiJsonDecodeError)
}
