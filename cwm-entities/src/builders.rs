pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::listing_builder::*;

pub mod listing_builder {

    use super::*;
    use crate::listing::*;

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.listing.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.listing.address = Some(address.into());
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.listing.phone = Some(phone.into());
            self
        }
        pub fn access(mut self, access: &str) -> Self {
            self.listing.access = Some(access.into());
            self
        }
        pub fn website(mut self, website: &str) -> Self {
            self.listing.website = Some(website.into());
            self
        }
        pub fn twitter(mut self, handle: &str) -> Self {
            self.listing.twitter = Some(handle.into());
            self
        }
        pub fn facebook(mut self, handle: &str) -> Self {
            self.listing.facebook = Some(handle.into());
            self
        }
        pub fn linkedin(mut self, handle: &str) -> Self {
            self.listing.linkedin = Some(handle.into());
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.listing.description = Some(desc.into());
            self
        }
        pub fn meta_title_short(mut self, flag: bool) -> Self {
            self.listing.meta_title_short = Some(flag);
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> Self::Build {
            ListingBuild {
                listing: Listing {
                    name: "".into(),
                    ..Default::default()
                },
            }
        }
    }
}
