use std::path;

use super::Listing;
use super::QueryRequest;

pub enum Action {
    AnalyzeProperty(QueryRequest),
    AnalyzeFile(u64, path::PathBuf),
    ListHistories(),
    LoadHistory(String),
    FetchPropertyDetail(Box<Listing>),
    GenerateReport(Box<Listing>),
}
