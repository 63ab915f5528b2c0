#[cfg(test)]
#[path = "streetview_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

const IMAGE_SIZE: &str = "600x400";
const HEADING: &str = "0";
const PITCH: &str = "0";

pub struct StreetView {
    url: String,
    api_key: String,
}

impl Default for StreetView {
    fn default() -> StreetView {
        return StreetView {
            url: Config::get(ConfigKey::MapsURL),
            api_key: Config::get(ConfigKey::MapsApiKey),
        };
    }
}

impl StreetView {
    /// Raw image bytes for the street view at the given coordinates.
    pub async fn image(&self, lat: f64, lng: f64) -> Result<Vec<u8>> {
        let location = format!("{lat},{lng}");

        let res = reqwest::Client::new()
            .get(format!("{url}/maps/api/streetview", url = self.url))
            .query(&[
                ("size", IMAGE_SIZE),
                ("location", location.as_str()),
                ("heading", HEADING),
                ("pitch", PITCH),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "street view image failed");
            bail!("street view image failed");
        }

        return Ok(res.bytes().await?.to_vec());
    }
}
