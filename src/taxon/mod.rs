pub mod gbif;
pub mod name;
