use maud::{html, Markup};
use time::{format_description::FormatItem, macros::format_description};

use crate::{detail_fields, Report};
use cwm_entities::listing::Listing;

mod chart;
mod map;
mod page;

use chart::*;
use map::*;
use page::*;

const DATE_TIME_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

pub fn report(r: &Report) -> Markup {
    let pins: Vec<_> = r
        .locations
        .located
        .iter()
        .map(|located| MapPin::new(located, r.sentinel))
        .collect();
    let districts = r.statistics.districts.iter().map(|(d, n)| (d.as_str(), *n));
    let access_types = r
        .statistics
        .access_types
        .iter()
        .map(|(a, n)| (a.as_str(), *n));
    let social_presence = r
        .statistics
        .social_presence
        .iter()
        .map(|(network, n)| (network.label(), *n));
    let generated_at = r
        .generated_at
        .to_offset(time::UtcOffset::UTC)
        .format(DATE_TIME_FORMAT)
        .unwrap_or_default();

    page(
        r.title,
        Some(leaflet_css_link()),
        html! {
            main {
                h1 { (r.title) }
                (map_container())
                h2 { "Visualisations des Données" }
                section class="chart" {
                    h3 { "Répartition des coworking par arrondissement" }
                    (bar_chart(districts, true))
                }
                section class="chart" {
                    h3 { "Distribution des types d'accès" }
                    (bar_chart(access_types, true))
                }
                section class="chart" {
                    h3 { "Présence sur les réseaux sociaux" }
                    (bar_chart(social_presence, false))
                }
                @if !r.locations.unresolved.is_empty() {
                    (unresolved_addresses(&r.locations.unresolved))
                }
                h2 { "Détails des espaces de coworking" }
                @for listing in r.listings {
                    (listing_details(listing, r.sentinel))
                }
            }
            footer {
                "Généré le " (generated_at)
            }
            (map_scripts(&pins, &r.map))
        },
    )
}

fn unresolved_addresses(addresses: &[String]) -> Markup {
    html! {
        section class="unresolved" {
            h2 { "Adresses non trouvées lors du géocodage" }
            ul {
                @for address in addresses {
                    li { (address) }
                }
            }
        }
    }
}

fn listing_details(listing: &Listing, sentinel: &str) -> Markup {
    html! {
        article class="listing" {
            h3 { (listing.name) }
            dl {
                @for (label, value) in detail_fields(listing, sentinel) {
                    dt { (label) " :" }
                    dd { (value) }
                }
            }
        }
        hr;
    }
}
