use super::prelude::*;
use itertools::Itertools;
use strum::IntoEnumIterator;

/// Label for addresses without a district segment.
pub const OTHER_DISTRICT: &str = "Autre";

/// Counts shown in the report charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub districts: Vec<(String, usize)>,
    pub access_types: Vec<(String, usize)>,
    pub social_presence: Vec<(SocialNetwork, usize)>,
}

pub fn collect_statistics(listings: &[Listing], sentinel: &str) -> Statistics {
    Statistics {
        districts: count_by_district(listings),
        access_types: count_by_access(listings, sentinel),
        social_presence: count_social_presence(listings),
    }
}

/// The district is the last comma-separated part of an address.
pub fn district_of(address: &str) -> &str {
    match address.rsplit_once(',').map(|(_, district)| district.trim()) {
        Some(district) if !district.is_empty() => district,
        _ => OTHER_DISTRICT,
    }
}

pub fn count_by_district(listings: &[Listing]) -> Vec<(String, usize)> {
    value_counts(
        listings
            .iter()
            .map(|l| l.address.as_deref().map_or(OTHER_DISTRICT, district_of)),
    )
}

/// Count listings per access type.
///
/// Listings without access information are counted under the `sentinel` label.
pub fn count_by_access(listings: &[Listing], sentinel: &str) -> Vec<(String, usize)> {
    value_counts(
        listings
            .iter()
            .map(|l| l.access.as_deref().unwrap_or(sentinel)),
    )
}

pub fn count_social_presence(listings: &[Listing]) -> Vec<(SocialNetwork, usize)> {
    SocialNetwork::iter()
        .map(|network| {
            let count = listings
                .iter()
                .filter(|l| l.social_handle(network).is_some())
                .count();
            (network, count)
        })
        .collect()
}

// Most frequent first, ties in order of first appearance.
fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = vec![];
    for value in values {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_owned(), 1)),
        }
    }
    counts
        .into_iter()
        .sorted_by(|(_, a), (_, b)| b.cmp(a))
        .collect()
}
