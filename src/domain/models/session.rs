use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultType {
    Listing,
    Analysis,
    Other,
}

impl ResultType {
    pub fn parse(tag: &str) -> ResultType {
        match tag {
            "listing" => return ResultType::Listing,
            "analysis" => return ResultType::Analysis,
            _ => return ResultType::Other,
        }
    }
}

impl Default for ResultType {
    fn default() -> ResultType {
        return ResultType::Other;
    }
}

/// One conversational search thread. The id is assigned by the backend on the
/// first reply and persists across turns; sessions are stored server side and
/// are never deleted from here.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Option<String>,
    pub title: String,
    pub last_question: Option<String>,
    pub description: String,
    pub result_type: ResultType,
    pub results: Vec<Listing>,
}
