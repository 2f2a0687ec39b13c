use super::{prelude::*, resolve_address, RetryPolicy};

#[derive(Debug, Clone, PartialEq)]
pub struct LocatedListing<'a> {
    pub listing: &'a Listing,
    pub pos: MapPoint,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locations<'a> {
    pub located: Vec<LocatedListing<'a>>,
    /// Addresses that could not be resolved, in input order.
    pub unresolved: Vec<String>,
}

/// Resolve the address of every listing, one after another.
///
/// Listings without an address are skipped.
pub fn locate_listings<'a, G>(
    gateway: &G,
    listings: &'a [Listing],
    policy: &RetryPolicy,
) -> Locations<'a>
where
    G: GeoCodingGateway + ?Sized,
{
    let mut locations = Locations::default();
    for listing in listings {
        let Some(address) = listing.address.as_deref() else {
            log::debug!("Skip listing '{}' without address", listing.name);
            continue;
        };
        match resolve_address(gateway, address, policy) {
            Some(pos) => locations.located.push(LocatedListing { listing, pos }),
            None => locations.unresolved.push(address.to_owned()),
        }
    }
    log::info!(
        "Located {} of {} listings ({} unresolved)",
        locations.located.len(),
        listings.len(),
        locations.unresolved.len()
    );
    locations
}
