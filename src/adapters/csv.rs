use cwm_core::entities::Listing;
use serde::Deserialize;
use std::{io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("Invalid meta title flag '{value}' in line {line}")]
    MetaTitleFlag { line: u64, value: String },
}

/// A row of the coworking table.
///
/// The column names are the French spreadsheet headers,
/// english names are accepted as well.
#[derive(Debug, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "Nom", alias = "name")]
    pub name: Option<String>,
    #[serde(rename = "adresse", alias = "address")]
    pub address: Option<String>,
    #[serde(rename = "telephone", alias = "phone")]
    pub phone: Option<String>,
    #[serde(rename = "acces", alias = "access")]
    pub access: Option<String>,
    #[serde(rename = "site", alias = "website")]
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "meta_title_inferieur_a_150", alias = "meta_title_short")]
    pub meta_title_short: Option<String>,
}

// (French name, english name)
const COLUMNS: [(&str, &str); 10] = [
    ("Nom", "name"),
    ("adresse", "address"),
    ("telephone", "phone"),
    ("acces", "access"),
    ("site", "website"),
    ("twitter", "twitter"),
    ("facebook", "facebook"),
    ("linkedin", "linkedin"),
    ("description", "description"),
    ("meta_title_inferieur_a_150", "meta_title_short"),
];

fn check_columns(headers: &csv::StringRecord) -> Result<(), LoadError> {
    for (name, alias) in COLUMNS {
        if !headers.iter().any(|h| h == name || h == alias) {
            return Err(LoadError::MissingColumn(name));
        }
    }
    Ok(())
}

fn cell(value: Option<String>, sentinel: &str) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != sentinel)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "vrai" | "oui" => Some(true),
        "false" | "0" | "no" | "faux" | "non" => Some(false),
        _ => None,
    }
}

impl ListingRecord {
    fn try_into_listing(self, sentinel: &str, line: u64) -> Result<Listing, LoadError> {
        let ListingRecord {
            name,
            address,
            phone,
            access,
            website,
            twitter,
            facebook,
            linkedin,
            description,
            meta_title_short,
        } = self;
        let meta_title_short = cell(meta_title_short, sentinel)
            .map(|value| parse_flag(&value).ok_or(LoadError::MetaTitleFlag { line, value }))
            .transpose()?;
        Ok(Listing {
            name: cell(name, sentinel).unwrap_or_else(|| sentinel.to_string()),
            address: cell(address, sentinel),
            phone: cell(phone, sentinel),
            access: cell(access, sentinel),
            website: cell(website, sentinel),
            twitter: cell(twitter, sentinel),
            facebook: cell(facebook, sentinel),
            linkedin: cell(linkedin, sentinel),
            description: cell(description, sentinel),
            meta_title_short,
        })
    }
}

pub fn read_listings<R: io::Read>(
    reader: R,
    sentinel: &str,
    delimiter: u8,
) -> Result<Vec<Listing>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    check_columns(rdr.headers()?)?;
    let mut listings = vec![];
    for result in rdr.deserialize::<ListingRecord>() {
        let record = result?;
        // header is line 1
        let line = listings.len() as u64 + 2;
        listings.push(record.try_into_listing(sentinel, line)?);
    }
    Ok(listings)
}

pub fn load_listings<P: AsRef<Path>>(
    path: P,
    sentinel: &str,
    delimiter: u8,
) -> Result<Vec<Listing>, LoadError> {
    let path = path.as_ref();
    log::info!("Loading listings from {}", path.display());
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let listings = read_listings(file, sentinel, delimiter)?;
    log::info!("Loaded {} listings", listings.len());
    Ok(listings)
}
