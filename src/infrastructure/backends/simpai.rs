#[cfg(test)]
#[path = "simpai_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalyzeRecord;
use crate::domain::models::Backend;
use crate::domain::models::HistoryEntry;
use crate::domain::models::HistoryRecord;
use crate::domain::models::LatLng;
use crate::domain::models::Listing;
use crate::domain::models::QueryRequest;
use crate::domain::models::ReportResponse;

const SUPPORTED_UPLOADS: [&str; 5] = ["pdf", "xlsx", "xls", "doc", "docx"];

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AnalyzeRequest {
    #[serde(rename = "userInput")]
    user_input: String,
    #[serde(rename = "lastQuestion")]
    last_question: Option<String>,
    id: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AnalyzeResponse {
    data: Vec<AnalyzeRecord>,
}

// analyze-file replies with a bare record, without the data envelope and
// without a session id.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct FileAnalyzeResponse {
    #[serde(rename = "type", default)]
    result_type: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    results: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct HistoriesResponse {
    data: Vec<HistoryEntry>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct HistoryResponse {
    data: Vec<HistoryRecord>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StreetViewRequest {
    location: String,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct StreetViewResponse {
    location: LatLng,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ReportRequest {
    listing: Listing,
}

pub struct SimpAi {
    url: String,
}

impl Default for SimpAi {
    fn default() -> SimpAi {
        return SimpAi {
            url: Config::get(ConfigKey::BackendURL),
        };
    }
}

#[async_trait]
impl Backend for SimpAi {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("backend URL is not defined");
        }

        // Any HTTP response counts as reachable, the root path is not a real
        // endpoint.
        let res = reqwest::Client::new().get(&self.url).send().await;
        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "analysis service is not reachable");
            bail!("analysis service is not reachable");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn analyze_property(&self, query: &QueryRequest) -> Result<AnalyzeRecord> {
        let req = AnalyzeRequest {
            user_input: query.user_input.to_string(),
            last_question: query.last_question.clone(),
            id: query.id.clone(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/v1/simpai/analyze-property", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "analyze-property failed");
            bail!("analyze-property failed");
        }

        let body = res.json::<AnalyzeResponse>().await?;
        match body.data.into_iter().next() {
            Some(record) => return Ok(record),
            None => bail!("analyze-property returned no records"),
        }
    }

    #[allow(clippy::implicit_return)]
    async fn analyze_file(&self, file_path: &path::Path) -> Result<AnalyzeRecord> {
        let extension = file_path
            .extension()
            .and_then(|ext| return ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        if !SUPPORTED_UPLOADS.contains(&extension.as_str()) {
            bail!("unsupported file type, expected one of pdf, xlsx, xls, doc, docx");
        }

        let file_name = file_path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = fs::read(file_path).await?;

        let form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name));

        let res = reqwest::Client::new()
            .post(format!("{url}/api/v1/simpai/analyze-file", url = self.url))
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "analyze-file failed");
            bail!("analyze-file failed");
        }

        let body = res.json::<FileAnalyzeResponse>().await?;
        return Ok(AnalyzeRecord {
            id: None,
            description: body.description,
            result_type: body.result_type,
            results: body.results,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn list_histories(&self, email: &str) -> Result<Vec<HistoryEntry>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/api/v1/simpai/gethistories", url = self.url))
            .query(&[("email", email)])
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "gethistories failed");
            bail!("gethistories failed");
        }

        // Backend order is preserved, it is already newest first.
        return Ok(res.json::<HistoriesResponse>().await?.data);
    }

    #[allow(clippy::implicit_return)]
    async fn load_history(&self, id: &str) -> Result<HistoryRecord> {
        let res = reqwest::Client::new()
            .get(format!("{url}/api/v1/simpai/gethistory", url = self.url))
            .query(&[("id", id)])
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "gethistory failed");
            bail!("gethistory failed");
        }

        let body = res.json::<HistoryResponse>().await?;
        match body.data.into_iter().next() {
            Some(record) => return Ok(record),
            None => bail!(format!("no session found for id {id}")),
        }
    }

    #[allow(clippy::implicit_return)]
    async fn street_view_location(&self, location: &str) -> Result<LatLng> {
        let req = StreetViewRequest {
            location: location.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/v1/simpai/streetview", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "streetview lookup failed");
            bail!("streetview lookup failed");
        }

        return Ok(res.json::<StreetViewResponse>().await?.location);
    }

    #[allow(clippy::implicit_return)]
    async fn generate_report(&self, listing: &Listing) -> Result<ReportResponse> {
        let req = ReportRequest {
            listing: listing.clone(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/v1/simpai/get-report", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "get-report failed");
            bail!("get-report failed");
        }

        return Ok(res.json::<ReportResponse>().await?);
    }
}
