use std::path;

/// Everything the detail view needs for one property: the gallery photo URLs
/// and, when both resolution hops succeed, a street view image on disk.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PropertyDetail {
    pub address: String,
    pub photos: Vec<String>,
    pub street_view: Option<path::PathBuf>,
}
