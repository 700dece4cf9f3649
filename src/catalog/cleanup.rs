//! Text normalization for scraped product copy.

use once_cell::sync::Lazy;
use regex::Regex;

// Boilerplate the site appends to descriptions. Each pattern truncates the
// description at its first match; patterns run in this order against the
// current state of the string.
static TRUNCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"Dormant bare root plants ship each year.*",
        r"This is a legume species.*",
        r"Most legume species harbor.*",
        r"\*This species.*",
        r"Species of genus \w+ are legumes.*",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid truncation regex"))
    .collect()
});

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"  +").expect("valid multi-space regex"));

/// Cleans a raw description. The step order is load-bearing: truncation runs
/// before the period-spacing pass so boilerplate is cut on the original text,
/// and the space collapse repairs the double spaces that pass introduces.
pub fn normalize_description(raw: &str) -> String {
    let mut text = raw.replace('\n', " ");

    for pattern in TRUNCATION_PATTERNS.iter() {
        if let Some(found) = pattern.find(&text) {
            text.truncate(found.start());
        }
    }

    let text = text.replace('.', ". ");
    let text = MULTI_SPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Fixes a pluralization quirk in the source facet data: the first `"Stars"`
/// in each `"; "`-delimited segment becomes `"Star"`.
pub fn clean_advantages(joined: &str) -> String {
    joined
        .split("; ")
        .map(|segment| segment.replacen("Stars", "Star", 1))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_shipping_boilerplate() {
        let raw = "Blooms in June.Dormant bare root plants ship each year. Order now.";
        assert_eq!(normalize_description(raw), "Blooms in June.");
    }

    #[test]
    fn spaces_periods_and_collapses() {
        let raw = "Thrives in dry soil.Good for slopes.  Hardy.";
        assert_eq!(
            normalize_description(raw),
            "Thrives in dry soil. Good for slopes. Hardy."
        );
    }

    #[test]
    fn replaces_newlines_before_matching() {
        let raw = "A tough prairie plant.\nThis is a legume\nspecies with nodules.";
        assert_eq!(normalize_description(raw), "A tough prairie plant.");
    }

    #[test]
    fn truncates_starred_footnote() {
        let raw = "Showy spikes. *This species is toxic to livestock.";
        assert_eq!(normalize_description(raw), "Showy spikes.");
    }

    #[test]
    fn truncates_genus_legume_note() {
        let raw = "Nitrogen fixer. Species of genus Baptisia are legumes and benefit from inoculum.";
        assert_eq!(normalize_description(raw), "Nitrogen fixer.");
    }

    #[test]
    fn normalization_is_idempotent_after_first_pass() {
        let raw = "Blooms in June.Dormant bare root plants ship each year. Order now.";
        let once = normalize_description(raw);
        assert_eq!(normalize_description(&once), once);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_description(""), "");
        assert_eq!(normalize_description("  \n "), "");
    }

    #[test]
    fn advantages_stars_becomes_star_per_segment() {
        let raw = "Attracts Pollinators; Deer Resistant; Host Plant for Stars";
        assert_eq!(
            clean_advantages(raw),
            "Attracts Pollinators; Deer Resistant; Host Plant for Star"
        );
    }

    #[test]
    fn advantages_first_occurrence_only_per_segment() {
        assert_eq!(clean_advantages("Stars and Stars"), "Star and Stars");
        assert_eq!(clean_advantages("Stars; Stars"), "Star; Star");
    }

    #[test]
    fn advantages_empty_passthrough() {
        assert_eq!(clean_advantages(""), "");
    }
}
