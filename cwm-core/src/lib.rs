pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use cwm_entities::{geo::*, listing::*, social::*, DEFAULT_SENTINEL};
}
