use std::path;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Listing;

/// One query turn on its way to the backend. The sequence number fences
/// responses: only the reply matching the latest issued sequence is applied,
/// so a superseded request can never overwrite a newer result.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub seq: u64,
    pub user_input: String,
    pub last_question: Option<String>,
    pub id: Option<String>,
}

/// First record of an analyze-property (or analyze-file) response. The
/// description may carry a follow-up question embedded behind `!` sentinels,
/// and `results` is a JSON-encoded string of listings rather than an array.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub result_type: String,
    #[serde(default)]
    pub results: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lasttitle: Option<String>,
    #[serde(rename = "type", default)]
    pub result_type: String,
    #[serde(default)]
    pub results: Option<String>,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "downloadUrl", default)]
    pub download_url: Option<String>,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
}

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the analysis service is reachable before the
    /// first query goes out.
    async fn health_check(&self) -> Result<()>;

    /// Sends a free-text property query. Returns the first record of the
    /// response; a non-success status is an error so the caller can fall back
    /// to the apology text without touching existing listings.
    async fn analyze_property(&self, query: &QueryRequest) -> Result<AnalyzeRecord>;

    /// Uploads a document (pdf/xlsx/xls/doc/docx) for analysis. The response
    /// feeds the same dispatch path as a text query.
    async fn analyze_file(&self, file_path: &path::Path) -> Result<AnalyzeRecord>;

    /// All stored sessions for a user, in the order the backend returns them.
    async fn list_histories(&self, email: &str) -> Result<Vec<HistoryEntry>>;

    async fn load_history(&self, id: &str) -> Result<HistoryRecord>;

    /// Normalizes a third-party street view metadata URL into coordinates.
    async fn street_view_location(&self, location: &str) -> Result<LatLng>;

    async fn generate_report(&self, listing: &Listing) -> Result<ReportResponse>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
