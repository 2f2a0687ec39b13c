//! # cwm-report
//!
//! Renders the coworking report as a standalone HTML page
//! and the listing details as plain text.

use cwm_core::usecases::{Locations, Statistics};
use cwm_entities::{geo::MapPoint, listing::Listing};
use time::OffsetDateTime;

pub mod html;
pub mod text;

pub const DEFAULT_TITLE: &str = "Carte des espaces de coworking à Paris";

/// Initial section of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: u8,
}

#[derive(Debug)]
pub struct Report<'a> {
    pub title: &'a str,
    /// Displayed in place of missing values.
    pub sentinel: &'a str,
    pub map: MapView,
    pub listings: &'a [Listing],
    pub locations: &'a Locations<'a>,
    pub statistics: &'a Statistics,
    pub generated_at: OffsetDateTime,
}

/// Labeled fields of the detail listing in display order.
pub fn detail_fields<'a>(
    listing: &'a Listing,
    sentinel: &'a str,
) -> Vec<(&'static str, &'a str)> {
    let Listing {
        name: _,
        address,
        phone,
        access,
        website,
        twitter,
        facebook,
        linkedin,
        description,
        meta_title_short,
    } = listing;
    let value = |v: &'a Option<String>| v.as_deref().unwrap_or(sentinel);
    let flag = match meta_title_short {
        Some(true) => "True",
        Some(false) => "False",
        None => sentinel,
    };
    vec![
        ("Adresse", value(address)),
        ("Téléphone", value(phone)),
        ("Accès", value(access)),
        ("Site", value(website)),
        ("Twitter", value(twitter)),
        ("Facebook", value(facebook)),
        ("LinkedIn", value(linkedin)),
        ("Description", value(description)),
        ("Meta Title inférieur à 150 caractères", flag),
    ]
}
