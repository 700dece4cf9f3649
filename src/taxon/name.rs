//! Plant-name parsing: binomial and cultivar derivation.

/// A raw plant name with its derived parts, computed once at construction.
#[derive(Debug, Clone)]
pub struct PlantName {
    raw: String,
    binomial: String,
    cultivar: String,
}

impl PlantName {
    pub fn new(raw: &str) -> Self {
        let binomial = raw
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ");
        let cultivar = extract_cultivar(raw);
        Self {
            raw: raw.to_string(),
            binomial,
            cultivar,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// First two whitespace-delimited tokens, joined by one space.
    pub fn binomial(&self) -> &str {
        &self.binomial
    }

    /// The single-quoted cultivar span, quotes included, or `""` if absent.
    pub fn cultivar(&self) -> &str {
        &self.cultivar
    }
}

// Greedy span from the first quote to the last, so names with an internal
// apostrophe (e.g. 'Miss Wilmott's Ghost') keep the whole cultivar.
fn extract_cultivar(raw: &str) -> String {
    match (raw.find('\''), raw.rfind('\'')) {
        (Some(start), Some(end)) if start < end => raw[start..=end].to_string(),
        _ => String::new(),
    }
}
