use std::path;

use super::AnalyzeRecord;
use super::HistoryEntry;
use super::HistoryRecord;
use super::PropertyDetail;

pub enum Event {
    AnalyzeResponse(u64, AnalyzeRecord),
    AnalyzeFailed(u64),
    HistoriesLoaded(Vec<HistoryEntry>),
    HistoryLoaded(Box<HistoryRecord>),
    HistoryFailed(String),
    PropertyDetailLoaded(Box<PropertyDetail>),
    PropertyDetailFailed(String),
    ReportReady(path::PathBuf),
    ReportFailed(String),
    UserLine(String),
}
