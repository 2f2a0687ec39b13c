use askama::Template;
use cwm_entities::listing::Listing;

use crate::detail_fields;

struct ListingDetails<'a> {
    name: &'a str,
    fields: Vec<(&'static str, &'a str)>,
}

#[derive(Template)]
#[template(path = "listing_details.txt")]
struct ListingDetailsTemplate<'a> {
    listings: Vec<ListingDetails<'a>>,
}

#[derive(Template)]
#[template(path = "unresolved_addresses.txt")]
struct UnresolvedAddressesTemplate<'a> {
    addresses: &'a [String],
}

/// One text block per listing with all fields in a fixed order.
pub fn listing_details(listings: &[Listing], sentinel: &str) -> askama::Result<String> {
    let listings = listings
        .iter()
        .map(|listing| ListingDetails {
            name: &listing.name,
            fields: detail_fields(listing, sentinel),
        })
        .collect();
    let text = ListingDetailsTemplate { listings }.render()?;
    Ok(format!("{}\n", text.trim()))
}

pub fn unresolved_addresses(addresses: &[String]) -> askama::Result<String> {
    let text = UnresolvedAddressesTemplate { addresses }.render()?;
    Ok(format!("{}\n", text.trim()))
}
