use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve plant binomials against the GBIF species-match API.
    Taxonomy(TaxonomyArgs),
    /// Scrape per-product catalog data into a CSV report.
    Catalog(CatalogArgs),
}

#[derive(clap::Args, Debug)]
pub struct TaxonomyArgs {
    /// Path to the input CSV of plant names (first column, header row).
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,

    /// Path to the output classification CSV.
    #[arg(short, long, value_name = "FILE")]
    pub output_file: PathBuf,

    /// Seconds to wait after each remote lookup.
    #[arg(long, default_value_t = 2)]
    pub delay_secs: u64,
}

#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// Path to the input list of catalog codes, one per line.
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,

    /// Path to the output product CSV.
    #[arg(short, long, value_name = "FILE")]
    pub output_file: PathBuf,

    /// Directory holding cached search/page payloads.
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    pub cache_dir: PathBuf,

    /// Searchspring site identifier.
    #[arg(long, default_value = "qfh40u")]
    pub site_id: String,

    /// Base URL prefixed to relative product paths.
    #[arg(long, default_value = "https://www.prairiemoon.com")]
    pub base_url: String,

    /// Seconds to wait after each search-API fetch.
    #[arg(long, default_value_t = 3)]
    pub search_delay_secs: u64,

    /// Seconds to wait after each product-page fetch.
    #[arg(long, default_value_t = 2)]
    pub page_delay_secs: u64,
}

// Basic tests for CLI parsing
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_taxonomy() {
        let args = vec![
            "florascrape",
            "taxonomy",
            "-i",
            "names.csv",
            "-o",
            "taxonomy.csv",
        ];
        let cli = Cli::parse_from(args);
        match cli.command {
            Command::Taxonomy(t) => {
                assert_eq!(t.input_file, PathBuf::from("names.csv"));
                assert_eq!(t.output_file, PathBuf::from("taxonomy.csv"));
                assert_eq!(t.delay_secs, 2);
            }
            other => panic!("expected taxonomy command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_catalog_defaults() {
        let args = vec![
            "florascrape",
            "catalog",
            "-i",
            "codes.txt",
            "-o",
            "products.csv",
        ];
        let cli = Cli::parse_from(args);
        match cli.command {
            Command::Catalog(c) => {
                assert_eq!(c.cache_dir, PathBuf::from("data"));
                assert_eq!(c.site_id, "qfh40u");
                assert_eq!(c.base_url, "https://www.prairiemoon.com");
                assert_eq!(c.search_delay_secs, 3);
                assert_eq!(c.page_delay_secs, 2);
            }
            other => panic!("expected catalog command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_catalog_overrides() {
        let args = vec![
            "florascrape",
            "catalog",
            "-i",
            "codes.txt",
            "-o",
            "out.csv",
            "--cache-dir",
            "/tmp/pm",
            "--site-id",
            "abc123",
            "--search-delay-secs",
            "0",
        ];
        let cli = Cli::parse_from(args);
        match cli.command {
            Command::Catalog(c) => {
                assert_eq!(c.cache_dir, PathBuf::from("/tmp/pm"));
                assert_eq!(c.site_id, "abc123");
                assert_eq!(c.search_delay_secs, 0);
                assert_eq!(c.page_delay_secs, 2);
            }
            other => panic!("expected catalog command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_missing_output_fails() {
        let args = vec!["florascrape", "taxonomy", "-i", "names.csv"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
