mod locate_listings;
mod resolve_address;
mod statistics;


pub use self::{locate_listings::*, resolve_address::*, statistics::*};

mod prelude {
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway};

    #[cfg(test)]
    pub use crate::gateways::geocode::GeoCodingError;
}
