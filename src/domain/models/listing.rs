#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// One property record as returned by the analysis backend. Field names match
/// the wire format, which is also the column order of CSV exports.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, rename = "streetAddress")]
    pub street_address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<f64>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default, rename = "livingArea")]
    pub living_area: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, rename = "imgSrc")]
    pub img_src: Option<String>,
    #[serde(default)]
    pub property_url: Option<String>,
}

impl Listing {
    /// Free-text address used to key the property detail provider.
    pub fn full_address(&self) -> String {
        return format!(
            "{} {} {} {}",
            self.street_address.as_deref().unwrap_or_default(),
            self.city.as_deref().unwrap_or_default(),
            self.state.as_deref().unwrap_or_default(),
            self.zipcode.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string();
    }

    pub fn image_url(&self) -> String {
        return self
            .img_src
            .clone()
            .unwrap_or_else(|| return PLACEHOLDER_IMAGE_URL.to_string());
    }
}
