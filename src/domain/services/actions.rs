use std::path;

use anyhow::anyhow;
use anyhow::Result;
use tokio::fs;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Listing;
use crate::domain::models::PropertyDetail;
use crate::domain::models::QueryRequest;
use crate::infrastructure::backends::BackendManager;
use crate::infrastructure::providers::StreetView;
use crate::infrastructure::providers::Zillow;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /history - List your previous search sessions.
- /open (/o) [SESSION_ID] - Resume a previous session.
- /card - Show the current results as listing cards.
- /map - Show the current results as map markers.
- /detail (/d) [LISTING_NUMBER] - Photos and street view for one listing.
- /report (/r) [LISTING_NUMBER] - Generate and download a property report.
- /export [FILE?] - Save the current results as CSV. Defaults to listings.csv.
- /upload (/u) [FILE] - Analyze a pdf, xlsx, xls, doc, or docx document.
- /back - Leave the detail or history view.
- /quit /exit (/q) - Exit Simp AI.
- /help (/h) - Provides this help menu.

Anything else you type is sent to the analysis service as a property query.
An empty line closes the chat panel.
        "#;

    return text.trim().to_string();
}

async fn analyze_property(query: QueryRequest, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    let seq = query.seq;
    let res = BackendManager::get()?.analyze_property(&query).await;

    match res {
        Ok(record) => tx.send(Event::AnalyzeResponse(seq, record))?,
        Err(err) => {
            tracing::error!(error = ?err, "analyze-property request failed");
            tx.send(Event::AnalyzeFailed(seq))?;
        }
    }

    return Ok(());
}

async fn analyze_file(
    seq: u64,
    file_path: path::PathBuf,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let res = BackendManager::get()?.analyze_file(&file_path).await;

    match res {
        Ok(record) => tx.send(Event::AnalyzeResponse(seq, record))?,
        Err(err) => {
            tracing::error!(error = ?err, "analyze-file request failed");
            tx.send(Event::AnalyzeFailed(seq))?;
        }
    }

    return Ok(());
}

async fn list_histories(email: String, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match BackendManager::get()?.list_histories(&email).await {
        Ok(histories) => tx.send(Event::HistoriesLoaded(histories))?,
        Err(err) => {
            tracing::error!(error = ?err, "gethistories request failed");
            tx.send(Event::HistoryFailed(
                "Could not load your previous sessions.".to_string(),
            ))?;
        }
    }

    return Ok(());
}

async fn load_history(id: String, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match BackendManager::get()?.load_history(&id).await {
        Ok(record) => tx.send(Event::HistoryLoaded(Box::new(record)))?,
        Err(err) => {
            tracing::error!(error = ?err, id = id, "gethistory request failed");
            tx.send(Event::HistoryFailed(format!(
                "Could not load session {id}."
            )))?;
        }
    }

    return Ok(());
}

/// Two-hop street view resolution: the backend turns the provider's metadata
/// URL into coordinates, then the maps provider renders the image. Either hop
/// failing means no image, never a failed detail view.
async fn resolve_street_view(metadata_url: Option<&str>) -> Option<path::PathBuf> {
    let location = metadata_url?;

    let backend = BackendManager::get().ok()?;
    let latlng = match backend.street_view_location(location).await {
        Ok(latlng) => latlng,
        Err(err) => {
            tracing::warn!(error = ?err, "street view location lookup failed");
            return None;
        }
    };

    let bytes = match StreetView::default().image(latlng.lat, latlng.lng).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = ?err, "street view image fetch failed");
            return None;
        }
    };

    let dir = dirs::cache_dir()?.join("simpai");
    fs::create_dir_all(&dir).await.ok()?;
    let file_path = dir.join("street-view.jpg");
    fs::write(&file_path, &bytes).await.ok()?;

    return Some(file_path);
}

async fn fetch_property_detail(listing: Listing, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    let address = listing.full_address();

    let detail = match Zillow::default().property(&address).await {
        Ok(detail) => detail,
        Err(err) => {
            tracing::error!(error = ?err, address = address, "property detail request failed");
            tx.send(Event::PropertyDetailFailed(format!(
                "Could not load details for {address}."
            )))?;
            return Ok(());
        }
    };

    let mut photos = detail.photo_urls();
    if photos.is_empty() {
        // Tolerate missing photo arrays with the listing's own thumbnail.
        photos.push(listing.image_url());
    }

    let street_view = resolve_street_view(detail.street_view_metadata_url.as_deref()).await;

    tx.send(Event::PropertyDetailLoaded(Box::new(PropertyDetail {
        address,
        photos,
        street_view,
    })))?;

    return Ok(());
}

async fn download_report(url: &str, file_name: &str) -> Result<path::PathBuf> {
    let res = reqwest::Client::new().get(url).send().await?;
    if !res.status().is_success() {
        return Err(anyhow!(
            "report download returned status {}",
            res.status().as_u16()
        ));
    }

    let bytes = res.bytes().await?;
    let file_path = std::env::current_dir()?.join(file_name);
    fs::write(&file_path, &bytes).await?;

    return Ok(file_path);
}

async fn generate_report(listing: Listing, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    let report = match BackendManager::get()?.generate_report(&listing).await {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = ?err, "get-report request failed");
            tx.send(Event::ReportFailed(
                "Generating the report failed. You can try again.".to_string(),
            ))?;
            return Ok(());
        }
    };

    if !report.success {
        tx.send(Event::ReportFailed(
            "The report service declined the request.".to_string(),
        ))?;
        return Ok(());
    }

    let url = match report.download_url {
        Some(url) => url,
        None => {
            tx.send(Event::ReportFailed(
                "The report service returned no download URL.".to_string(),
            ))?;
            return Ok(());
        }
    };
    let file_name = report.file_name.unwrap_or_else(|| return "report.pdf".to_string());

    match download_report(&url, &file_name).await {
        Ok(file_path) => tx.send(Event::ReportReady(file_path))?,
        Err(err) => {
            tracing::error!(error = ?err, "report download failed");
            tx.send(Event::ReportFailed(
                "Downloading the report failed. You can try again.".to_string(),
            ))?;
        }
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            // In-flight requests are never aborted. The conversation's
            // sequence fence drops whichever responses arrive late.
            match action.unwrap() {
                Action::AnalyzeProperty(query) => {
                    tokio::spawn(async move {
                        if let Err(err) = analyze_property(query, &worker_tx).await {
                            tracing::error!(error = ?err, "analyze worker failed");
                        }
                    });
                }
                Action::AnalyzeFile(seq, file_path) => {
                    tokio::spawn(async move {
                        if let Err(err) = analyze_file(seq, file_path, &worker_tx).await {
                            tracing::error!(error = ?err, "file worker failed");
                        }
                    });
                }
                Action::ListHistories() => {
                    let email = Config::get(ConfigKey::Username);
                    tokio::spawn(async move {
                        if let Err(err) = list_histories(email, &worker_tx).await {
                            tracing::error!(error = ?err, "histories worker failed");
                        }
                    });
                }
                Action::LoadHistory(id) => {
                    tokio::spawn(async move {
                        if let Err(err) = load_history(id, &worker_tx).await {
                            tracing::error!(error = ?err, "history worker failed");
                        }
                    });
                }
                Action::FetchPropertyDetail(listing) => {
                    tokio::spawn(async move {
                        if let Err(err) = fetch_property_detail(*listing, &worker_tx).await {
                            tracing::error!(error = ?err, "detail worker failed");
                        }
                    });
                }
                Action::GenerateReport(listing) => {
                    tokio::spawn(async move {
                        if let Err(err) = generate_report(*listing, &worker_tx).await {
                            tracing::error!(error = ?err, "report worker failed");
                        }
                    });
                }
            }
        }
    }
}
