use crate::error::{CrateError, Result};
use crate::taxon::name::PlantName;
use std::fs;
use std::path::Path;

// Loads the plant-name CSV: header row, names in the first column.
pub fn load_plant_names(file_path: &Path) -> Result<Vec<PlantName>> {
    let mut reader = csv::Reader::from_path(file_path)?;

    let mut names = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = i + 2; // +1 for header, +1 for 0-based index
        let raw = record.get(0).unwrap_or("");
        if raw.trim().is_empty() {
            return Err(CrateError::MissingValue {
                column: "name".to_string(),
                row: row_num,
            });
        }
        names.push(PlantName::new(raw));
    }

    Ok(names)
}

// Loads the catalog-code list: plain text, one code per line, blanks skipped.
pub fn load_catalog_codes(file_path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(file_path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
