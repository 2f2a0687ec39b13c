use crate::social::SocialNetwork;

/// A single coworking space as read from the input table.
///
/// Optional fields are `None` if the input cell was empty
/// or contained the sentinel value.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub name             : String,
    pub address          : Option<String>,
    pub phone            : Option<String>,
    pub access           : Option<String>,
    pub website          : Option<String>,
    pub twitter          : Option<String>,
    pub facebook         : Option<String>,
    pub linkedin         : Option<String>,
    pub description      : Option<String>,
    /// Whether the meta title of the website is shorter than 150 characters.
    pub meta_title_short : Option<bool>,
}

impl Listing {
    pub fn social_handle(&self, network: SocialNetwork) -> Option<&str> {
        match network {
            SocialNetwork::Twitter => self.twitter.as_deref(),
            SocialNetwork::Facebook => self.facebook.as_deref(),
            SocialNetwork::LinkedIn => self.linkedin.as_deref(),
        }
    }
}
