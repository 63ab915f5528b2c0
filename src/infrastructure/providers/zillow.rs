#[cfg(test)]
#[path = "zillow_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSource {
    pub url: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedSources {
    #[serde(default)]
    pub jpeg: Vec<PhotoSource>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalPhoto {
    #[serde(rename = "mixedSources", default)]
    pub mixed_sources: MixedSources,
}

/// Subset of the detail provider's payload the client cares about. Photo
/// arrays are frequently missing or partial, every level defaults.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZillowProperty {
    #[serde(rename = "streetViewMetadataUrlMapLightboxAddress", default)]
    pub street_view_metadata_url: Option<String>,
    #[serde(rename = "originalPhotos", default)]
    pub original_photos: Vec<OriginalPhoto>,
}

impl ZillowProperty {
    /// Highest resolution jpeg of each gallery photo.
    pub fn photo_urls(&self) -> Vec<String> {
        return self
            .original_photos
            .iter()
            .filter_map(|photo| {
                return photo
                    .mixed_sources
                    .jpeg
                    .first()
                    .map(|source| return source.url.to_string());
            })
            .collect::<Vec<String>>();
    }
}

pub struct Zillow {
    url: String,
    api_key: String,
}

impl Default for Zillow {
    fn default() -> Zillow {
        return Zillow {
            url: Config::get(ConfigKey::ZillowURL),
            api_key: Config::get(ConfigKey::ZillowApiKey),
        };
    }
}

impl Zillow {
    fn host(&self) -> String {
        return self
            .url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string();
    }

    pub async fn property(&self, address: &str) -> Result<ZillowProperty> {
        let res = reqwest::Client::new()
            .get(format!("{url}/property", url = self.url))
            .query(&[("address", address)])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", self.host())
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "property detail failed");
            bail!("property detail failed");
        }

        return Ok(res.json::<ZillowProperty>().await?);
    }
}
