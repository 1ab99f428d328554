//! Hosted sessions API environments.

use url::Url;

/// A deployment region of the hosted sessions API.
///
/// Live traffic must go to the region the merchant account lives in; the test
/// environment is region-less.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Shared test environment.
    Test,
    /// Live, European region.
    LiveEurope,
    /// Live, United States region.
    LiveUnitedStates,
    /// Live, Australian region.
    LiveAustralia,
    /// Live, Asia-Pacific South-East region.
    LiveApse,
    /// Live, Indian region.
    LiveIndia,
}

impl Environment {
    /// Returns the base URL of the shopper-facing API for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Test => "https://checkoutshopper-test.adyen.com/checkoutshopper/",
            Self::LiveEurope => "https://checkoutshopper-live.adyen.com/checkoutshopper/",
            Self::LiveUnitedStates => "https://checkoutshopper-live-us.adyen.com/checkoutshopper/",
            Self::LiveAustralia => "https://checkoutshopper-live-au.adyen.com/checkoutshopper/",
            Self::LiveApse => "https://checkoutshopper-live-apse.adyen.com/checkoutshopper/",
            Self::LiveIndia => "https://checkoutshopper-live-in.adyen.com/checkoutshopper/",
        }
    }

    /// Returns the parsed base URL.
    ///
    /// # Panics
    ///
    /// Never panics in practice; the built-in base URLs are statically valid.
    #[must_use]
    pub fn url(self) -> Url {
        Url::parse(self.base_url()).expect("environment base URL is valid")
    }

    /// Returns `true` for the live environments.
    #[must_use]
    pub const fn is_live(self) -> bool {
        !matches!(self, Self::Test)
    }
}
