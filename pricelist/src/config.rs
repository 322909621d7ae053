use std::env;

use crate::app::list_feed_renderer;

pub const DEFAULT_PAGE_URL: &str = "http://localhost:8080/static/index.html";
pub const DEFAULT_LEFT_FEED: &str = "../w_matherial_get_all";
pub const DEFAULT_RIGHT_FEED: &str = "../w_product_get_all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the page holding the lists; relative feed locators resolve against it
    pub page_url: String,
    /// Feed rendered into `ul#left` (materials)
    pub left_feed: String,
    /// Feed rendered into `ul#right` (products)
    pub right_feed: String,
    /// Appended to every price
    pub currency_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            page_url: lookup("PRICELIST_PAGE_URL").unwrap_or_else(|| DEFAULT_PAGE_URL.to_string()),
            left_feed: lookup("PRICELIST_LEFT_FEED")
                .unwrap_or_else(|| DEFAULT_LEFT_FEED.to_string()),
            right_feed: lookup("PRICELIST_RIGHT_FEED")
                .unwrap_or_else(|| DEFAULT_RIGHT_FEED.to_string()),
            currency_suffix: lookup("PRICELIST_CURRENCY")
                .unwrap_or_else(|| list_feed_renderer::DEFAULT_CURRENCY_SUFFIX.to_string()),
        }
    }
}
