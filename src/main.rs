pub mod cache;
pub mod catalog;
pub mod cli;
pub mod csv_handler;
pub mod error;
pub mod taxon;

use cache::{FileCache, PayloadCache};
use catalog::page::extract_page_fields;
use catalog::record::{CSV_HEADER, ProductRecord};
use catalog::search::{SEARCH_API_URL, SearchResponse};
use clap::Parser;
use cli::{CatalogArgs, Cli, Command, TaxonomyArgs};
use csv_handler::{load_catalog_codes, load_plant_names};
use error::{CrateError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use reqwest::Client;
use std::path::Path;
use std::time::{Duration, Instant};
use taxon::gbif::{SpeciesMatch, match_species};
use taxon::name::PlantName;
use tokio::time::sleep;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .expect("Failed to initialize logger");

    let cli = Cli::parse();
    let start_time = Instant::now();

    match cli.command {
        Command::Taxonomy(args) => run_taxonomy(args).await?,
        Command::Catalog(args) => run_catalog(args).await?,
    }

    info!("Total execution time: {:.2?}", start_time.elapsed());
    Ok(())
}

const TAXONOMY_HEADER: [&str; 9] = [
    "name",
    "binomial",
    "cultivar",
    "gbifSpeciesId",
    "phylum",
    "class",
    "order",
    "family",
    "genus",
];

async fn run_taxonomy(args: TaxonomyArgs) -> Result<()> {
    info!("Starting taxonomy resolution...");
    info!("Input file: {:?}", args.input_file);
    info!("Output file: {:?}", args.output_file);

    let names = match load_plant_names(&args.input_file) {
        Ok(names) => {
            info!("Loaded {} plant names.", names.len());
            names
        }
        Err(e) => {
            error!("Failed to load plant names: {}", e);
            return Err(e);
        }
    };

    if names.is_empty() {
        info!("Input CSV contains no names. Exiting.");
        return Ok(());
    }

    let client = Client::builder()
        .user_agent(taxon::gbif::USER_AGENT)
        .build()
        .map_err(CrateError::ApiRequestError)?;

    let pb = new_progress_bar(names.len() as u64);
    let mut rows = Vec::new();
    let mut errors_count = 0;
    let mut error_details: Vec<String> = Vec::new();
    let mut unmatched_count = 0;

    for name in &names {
        pb.set_message(format!("Resolving: {}", name.binomial()));
        match match_species(name.binomial(), &client).await {
            Ok(matched) => {
                if matched.id().is_none() {
                    unmatched_count += 1;
                }
                rows.push(taxonomy_row(name, &matched));
            }
            Err(e) => {
                let message = format!("Lookup failed for {}: {}", name.binomial(), e);
                pb.println(&message);
                error!("{}", message);
                error_details.push(message);
                errors_count += 1;
                rows.push(taxonomy_row(name, &SpeciesMatch::default()));
            }
        }
        sleep(Duration::from_secs(args.delay_secs)).await;
        pb.inc(1);
    }
    pb.finish_with_message("Taxonomy resolution complete.");

    write_csv(&args.output_file, &TAXONOMY_HEADER, &rows)?;
    info!("Wrote {} rows to {:?}", rows.len(), args.output_file);

    println!("\n--- Summary Report ---");
    println!("Names processed: {}", names.len());
    println!("Names without a GBIF match: {}", unmatched_count);
    println!("Lookup errors: {}", errors_count);
    print_error_details(&error_details);
    println!("Classification CSV written to: {:?}", args.output_file);
    Ok(())
}

fn taxonomy_row(name: &PlantName, matched: &SpeciesMatch) -> Vec<String> {
    let classification = matched.classification().unwrap_or_default();
    vec![
        name.raw().to_string(),
        name.binomial().to_string(),
        name.cultivar().to_string(),
        matched.id().map(|id| id.to_string()).unwrap_or_default(),
        classification.phylum.unwrap_or_default(),
        classification.class.unwrap_or_default(),
        classification.order.unwrap_or_default(),
        classification.family.unwrap_or_default(),
        classification.genus.unwrap_or_default(),
    ]
}

async fn run_catalog(args: CatalogArgs) -> Result<()> {
    info!("Starting catalog scrape...");
    info!("Input file: {:?}", args.input_file);
    info!("Output file: {:?}", args.output_file);
    info!("Cache directory: {:?}", args.cache_dir);

    let codes = match load_catalog_codes(&args.input_file) {
        Ok(codes) => {
            info!("Loaded {} catalog codes.", codes.len());
            codes
        }
        Err(e) => {
            error!("Failed to load catalog codes: {}", e);
            return Err(e);
        }
    };

    if codes.is_empty() {
        info!("Input list contains no codes. Exiting.");
        return Ok(());
    }

    let cache = FileCache::new(&args.cache_dir)?;
    let client = Client::builder()
        .user_agent(taxon::gbif::USER_AGENT)
        .build()
        .map_err(CrateError::ApiRequestError)?;

    let pb = new_progress_bar(codes.len() as u64);
    let mut records = Vec::new();
    let mut errors_count = 0;
    let mut error_details: Vec<String> = Vec::new();

    for code in &codes {
        pb.set_message(format!("Processing: {}", code));
        match process_code(code, &client, &cache, &args).await {
            Ok(record) => records.push(record),
            Err(e) => {
                let message = format!("Could not process {}: {}", code, e);
                pb.println(&message);
                error!("{}", message);
                error_details.push(message);
                errors_count += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Catalog scrape complete.");

    let rows: Vec<Vec<String>> = records.iter().map(|r| r.csv_row().to_vec()).collect();
    write_csv(&args.output_file, &CSV_HEADER, &rows)?;
    info!("Wrote {} rows to {:?}", rows.len(), args.output_file);

    println!("\n--- Summary Report ---");
    println!("Catalog codes processed: {}", codes.len());
    println!("Products written: {}", records.len());
    println!("Errors encountered during processing: {}", errors_count);
    print_error_details(&error_details);
    println!("Product CSV written to: {:?}", args.output_file);
    Ok(())
}

// Fetch -> cache -> parse -> extract for one catalog code. A failure here is
// reported and the run continues with the remaining codes.
async fn process_code(
    code: &str,
    client: &Client,
    cache: &dyn PayloadCache,
    args: &CatalogArgs,
) -> Result<ProductRecord> {
    let search_payload = fetch_search_payload(code, client, cache, args).await?;
    let search = SearchResponse::parse(&search_payload)?;
    let url = search
        .page_url(&args.base_url)
        .ok_or_else(|| CrateError::MissingSearchResult {
            code: code.to_string(),
        })?;

    let page_payload = fetch_page_payload(code, &url, client, cache, args).await?;
    let page = extract_page_fields(&page_payload)?;

    Ok(ProductRecord::build(code, &search, &page, url))
}

async fn fetch_search_payload(
    code: &str,
    client: &Client,
    cache: &dyn PayloadCache,
    args: &CatalogArgs,
) -> Result<String> {
    let key = format!("{}.json", code);
    if let Some(payload) = cache.get(&key) {
        return Ok(payload);
    }

    info!("Getting {}...", code);
    let response = client
        .get(SEARCH_API_URL)
        .query(&[("siteId", args.site_id.as_str()), ("q", code)])
        .send()
        .await
        .map_err(CrateError::ApiRequestError)?;
    if !response.status().is_success() {
        warn!("Could not get search result for {}", code);
        return Err(CrateError::ApiStatusError {
            status: response.status(),
            item: code.to_string(),
        });
    }

    let payload = response.text().await.map_err(CrateError::ApiRequestError)?;
    cache.put(&key, &payload)?;
    sleep(Duration::from_secs(args.search_delay_secs)).await;
    Ok(payload)
}

async fn fetch_page_payload(
    code: &str,
    url: &str,
    client: &Client,
    cache: &dyn PayloadCache,
    args: &CatalogArgs,
) -> Result<String> {
    let key = format!("{}.html", code);
    if let Some(payload) = cache.get(&key) {
        return Ok(payload);
    }

    info!("Getting page for {}...", code);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(CrateError::ApiRequestError)?;
    if !response.status().is_success() {
        warn!("Could not get {}", url);
        return Err(CrateError::ApiStatusError {
            status: response.status(),
            item: url.to_string(),
        });
    }

    let payload = response.text().await.map_err(CrateError::ApiRequestError)?;
    cache.put(&key, &payload)?;
    sleep(Duration::from_secs(args.page_delay_secs)).await;
    Ok(payload)
}

fn new_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("Failed to set progress bar style")
            .progress_chars("##-"),
    );
    pb
}

fn write_csv(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_error_details(details: &[String]) {
    if !details.is_empty() {
        println!("\n--- Detailed Errors ---");
        for detail in details {
            println!("- {}", detail);
        }
    }
}
