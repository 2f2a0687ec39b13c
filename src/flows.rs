use cwm_core::{
    entities::Listing,
    gateways::geocode::GeoCodingGateway,
    usecases::{self, RetryPolicy},
};
use cwm_report::{html, MapView, Report};
use time::OffsetDateTime;

pub struct ReportSettings<'a> {
    pub title: &'a str,
    pub sentinel: &'a str,
    pub map: MapView,
    pub retry: RetryPolicy,
}

pub struct RenderedReport {
    pub html: String,
    pub markers: usize,
    pub unresolved: Vec<String>,
}

/// Locate all listings and render the HTML report.
///
/// Addresses that cannot be resolved do not stop the report.
pub fn build_report<G>(
    listings: &[Listing],
    gateway: &G,
    settings: &ReportSettings,
    generated_at: OffsetDateTime,
) -> RenderedReport
where
    G: GeoCodingGateway + ?Sized,
{
    let locations = usecases::locate_listings(gateway, listings, &settings.retry);
    let statistics = usecases::collect_statistics(listings, settings.sentinel);
    let report = Report {
        title: settings.title,
        sentinel: settings.sentinel,
        map: settings.map,
        listings,
        locations: &locations,
        statistics: &statistics,
        generated_at,
    };
    let html = html::report(&report).into_string();
    RenderedReport {
        html,
        markers: locations.located.len(),
        unresolved: locations.unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::csv::read_listings;
    use cwm_core::{
        entities::{MapPoint, DEFAULT_SENTINEL},
        gateways::geocode::GeoCodingError,
    };
    use std::cell::RefCell;

    /// Knows a single address.
    struct OneAddressGeoGW {
        address: &'static str,
        pos: MapPoint,
        requested: RefCell<Vec<String>>,
    }

    impl GeoCodingGateway for OneAddressGeoGW {
        fn resolve_address_lat_lng(
            &self,
            address: &str,
        ) -> Result<Option<MapPoint>, GeoCodingError> {
            self.requested.borrow_mut().push(address.to_owned());
            Ok((address == self.address).then_some(self.pos))
        }
    }

    fn settings() -> ReportSettings<'static> {
        ReportSettings {
            title: "Coworking",
            sentinel: DEFAULT_SENTINEL,
            map: MapView {
                center: MapPoint::try_from_lat_lng_deg(48.8566, 2.3522).unwrap(),
                zoom: 12,
            },
            retry: RetryPolicy::default(),
        }
    }

    const HEADER: &str = "Nom,adresse,telephone,acces,site,twitter,facebook,linkedin,description,meta_title_inferieur_a_150\n";

    #[test]
    fn skip_listing_with_sentinel_address() {
        let data = format!(
            "{HEADER}A,\"1 Rue de Rivoli, 75001 Paris\",,Metro 1,,,,,Open space,True\n\
             B,Non disponible,,Non disponible,,,,,,False\n"
        );
        let listings = read_listings(data.as_bytes(), DEFAULT_SENTINEL, b',').unwrap();
        let gw = OneAddressGeoGW {
            address: "1 Rue de Rivoli, 75001 Paris",
            pos: MapPoint::try_from_lat_lng_deg(48.86, 2.35).unwrap(),
            requested: RefCell::new(vec![]),
        };
        let report = build_report(&listings, &gw, &settings(), OffsetDateTime::UNIX_EPOCH);
        assert_eq!(1, report.markers);
        assert!(report.unresolved.is_empty());
        assert_eq!(vec!["1 Rue de Rivoli, 75001 Paris"], *gw.requested.borrow());
        assert_eq!(1, report.html.matches("\"tooltip\":").count());
        assert!(report.html.contains("\"lat\":48.86,\"lng\":2.35"));
        assert!(!report.html.contains("Adresses non trouvées"));
    }

    #[test]
    fn count_sentinel_access_as_category() {
        let data = format!("{HEADER}A,Paris,,Non disponible,,,,,,\n");
        let listings = read_listings(data.as_bytes(), DEFAULT_SENTINEL, b',').unwrap();
        let stats = usecases::collect_statistics(&listings, DEFAULT_SENTINEL);
        assert_eq!(vec![(DEFAULT_SENTINEL.to_string(), 1)], stats.access_types);
    }

    #[test]
    fn report_unresolved_addresses() {
        let data = format!("{HEADER}A,Atlantis,,,,,,,,\n");
        let listings = read_listings(data.as_bytes(), DEFAULT_SENTINEL, b',').unwrap();
        let gw = OneAddressGeoGW {
            address: "Paris",
            pos: MapPoint::try_from_lat_lng_deg(48.86, 2.35).unwrap(),
            requested: RefCell::new(vec![]),
        };
        let report = build_report(&listings, &gw, &settings(), OffsetDateTime::UNIX_EPOCH);
        assert_eq!(0, report.markers);
        assert_eq!(vec!["Atlantis"], report.unresolved);
        assert!(report.html.contains("<li>Atlantis</li>"));
    }
}
