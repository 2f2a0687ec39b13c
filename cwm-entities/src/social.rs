use strum::{EnumCount, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum SocialNetwork {
    Twitter,
    Facebook,
    LinkedIn,
}

impl SocialNetwork {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
        }
    }
}
