use maud::{html, Markup, PreEscaped};
use serde::Serialize;

use crate::MapView;
use cwm_core::usecases::LocatedListing;

const LEAFLET_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.css";
const LEAFLET_CSS_SHA512: &str="sha512-puBpdR0798OZvTTbP4A8Ix/l+A4dHDD0DGqYW6RQ+9jxkRFclaxxQb/SJAWZfWAkuyeQUytO7+7N4QKrDh+drA==";
const LEAFLET_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.js";
const LEAFLET_JS_SHA512 : &str="sha512-QVftwZFqvtRNi0ZyCtsznlKSWOStnDORoefr1enyq5mVL4tmKB3S/EnC3rRJcxCPavG10IcrVGSmPh6Qw5lwrg==";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const MAP_JS: &str = "
var map = L.map('map').setView(CWM_MAP_CENTER, CWM_MAP_ZOOM);
L.tileLayer(CWM_TILE_URL, { attribution: CWM_TILE_ATTRIBUTION, maxZoom: 19 }).addTo(map);
CWM_MAP_PINS.forEach(function (pin) {
  L.marker([pin.lat, pin.lng]).bindPopup(pin.popup).bindTooltip(pin.tooltip).addTo(map);
});
";

/// A map marker. Popup and tooltip are HTML snippets.
#[derive(Debug, Serialize)]
pub struct MapPin {
    lat: f64,
    lng: f64,
    popup: String,
    tooltip: String,
}

impl MapPin {
    pub fn new(located: &LocatedListing, sentinel: &str) -> Self {
        let LocatedListing { listing, pos } = located;
        let description = listing.description.as_deref().unwrap_or(sentinel);
        let popup = html! {
            b { (listing.name) } br; (description)
        };
        let tooltip = html! { (listing.name) };
        Self {
            lat: pos.lat(),
            lng: pos.lng(),
            popup: popup.into_string(),
            tooltip: tooltip.into_string(),
        }
    }
}

pub fn leaflet_css_link() -> Markup {
    html! {
            link
                rel="stylesheet"
                href=(LEAFLET_CSS_URL)
                integrity=(LEAFLET_CSS_SHA512)
                crossorigin="anonymous";
    }
}

pub fn map_container() -> Markup {
    html! {
        div id="map" {}
    }
}

// JSON may contain "</script>" inside of strings.
fn to_script_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(err) => {
            log::warn!("Unable to serialize map data: {err}");
            "null".to_string()
        }
    }
}

pub fn map_scripts(pins: &[MapPin], view: &MapView) -> Markup {
    let center = [view.center.lat(), view.center.lng()];
    let vars = format!(
        "window.CWM_MAP_PINS={};window.CWM_MAP_ZOOM={};window.CWM_MAP_CENTER={};window.CWM_TILE_URL={};window.CWM_TILE_ATTRIBUTION={};",
        to_script_json(pins),
        view.zoom,
        to_script_json(&center),
        to_script_json(TILE_URL),
        to_script_json(TILE_ATTRIBUTION),
    );
    html! {
      script { (PreEscaped(vars)) }
      script
        src=(LEAFLET_JS_URL)
        integrity=(LEAFLET_JS_SHA512)
        crossorigin="anonymous" {}
      script { (PreEscaped(MAP_JS)) }
    }
}
