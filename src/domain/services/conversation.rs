#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use serde_json::Value;

use super::csv_export;
use super::followups;
use crate::domain::models::AnalyzeRecord;
use crate::domain::models::Author;
use crate::domain::models::HistoryEntry;
use crate::domain::models::HistoryRecord;
use crate::domain::models::Listing;
use crate::domain::models::ListingsMode;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::PropertyDetail;
use crate::domain::models::QueryRequest;
use crate::domain::models::ResultType;
use crate::domain::models::Session;
use crate::domain::models::ViewState;

pub const FALLBACK_APOLOGY: &str =
    "Sorry, I wasn't able to analyze that request right now. Please try again in a moment.";

fn parse_listings(results: &Option<String>) -> Vec<Listing> {
    let raw = match results {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return vec![],
    };

    match serde_json::from_str::<Vec<Listing>>(raw) {
        Ok(listings) => return listings,
        Err(err) => {
            tracing::error!(error = ?err, "results field is not a listing array");
            return vec![];
        }
    }
}

/// Owns the chat/search session and decides which view the terminal shows.
/// All session truth lives here rather than in scattered flags, and every
/// state transition happens on the event loop.
pub struct Conversation {
    pub session: Session,
    pub view: ViewState,
    pub messages: Vec<Message>,
    pub histories: Vec<HistoryEntry>,
    pub detail: Option<PropertyDetail>,
    pub waiting_for_backend: bool,
    pub report_in_flight: bool,
    seq: u64,
}

impl Default for Conversation {
    fn default() -> Conversation {
        return Conversation {
            session: Session::default(),
            view: ViewState::SuggestionPrompt,
            messages: vec![],
            histories: vec![],
            detail: None,
            waiting_for_backend: false,
            report_in_flight: false,
            seq: 0,
        };
    }
}

impl Conversation {
    /// Prepares a query for dispatch. Empty input is rejected locally with no
    /// network call, and closes the chat panel rather than opening it.
    pub fn submit(&mut self, text: &str) -> Option<QueryRequest> {
        let user_input = text.trim();
        if user_input.is_empty() {
            self.view = ViewState::SuggestionPrompt;
            return None;
        }

        if self.view == ViewState::SuggestionPrompt {
            self.view = ViewState::ChatWithAnalysis;
        }
        if self.session.title.is_empty() {
            self.session.title = user_input.to_string();
        }

        self.messages.push(Message::new(Author::User, user_input));
        self.waiting_for_backend = true;
        self.seq += 1;

        return Some(QueryRequest {
            seq: self.seq,
            user_input: user_input.to_string(),
            last_question: self.session.last_question.clone(),
            id: self.session.id.clone(),
        });
    }

    /// Stamps a file upload the same way `submit` stamps a query, so its
    /// response runs through the same fence.
    pub fn submit_file(&mut self, file_name: &str) -> u64 {
        if self.view == ViewState::SuggestionPrompt {
            self.view = ViewState::ChatWithAnalysis;
        }

        self.messages
            .push(Message::new(Author::User, &format!("Uploaded {file_name}")));
        self.waiting_for_backend = true;
        self.seq += 1;

        return self.seq;
    }

    fn is_stale(&self, seq: u64) -> bool {
        if seq != self.seq {
            tracing::debug!(seq = seq, latest = self.seq, "dropping stale response");
            return true;
        }
        return false;
    }

    /// Applies an analysis response, dispatching on the backend's type tag.
    /// Responses superseded by a newer request are dropped.
    pub fn apply_response(&mut self, seq: u64, record: AnalyzeRecord) {
        if self.is_stale(seq) {
            return;
        }
        self.waiting_for_backend = false;

        if record.id.is_some() {
            self.session.id = record.id.clone();
        }

        match record.result_type.as_str() {
            "listing" => {
                let (body, question) = followups::interpret(&record.description);
                let listings = parse_listings(&record.results);

                self.session.last_question = question;
                self.session.description = body.clone();
                self.session.result_type = ResultType::Listing;
                self.session.results = listings;

                // A listing reply with nothing to show stays in the chat view.
                if self.session.results.is_empty() {
                    self.view = ViewState::ChatWithAnalysis;
                } else {
                    self.view = ViewState::ChatWithListings(ListingsMode::Card);
                }
                self.messages.push(Message::new(Author::SimpAi, &body));
            }
            "analysis" => {
                let (body, question) = followups::interpret(&record.description);

                self.session.last_question = question;
                self.session.description = body.clone();
                self.session.result_type = ResultType::Analysis;
                self.session.results.clear();

                self.view = ViewState::ChatWithAnalysis;
                self.messages.push(Message::new(Author::SimpAi, &body));
            }
            _ => {
                // Unknown tags are displayed verbatim with no extraction and
                // no view change.
                self.session.description = record.description.clone();
                self.session.result_type = ResultType::Other;
                self.messages
                    .push(Message::new(Author::SimpAi, &record.description));
            }
        }
    }

    /// A failed or non-success query degrades to a fixed apology. Existing
    /// listings stay untouched so the user keeps whatever they had.
    pub fn apply_failure(&mut self, seq: u64) {
        if self.is_stale(seq) {
            return;
        }
        self.waiting_for_backend = false;

        self.session.description = FALLBACK_APOLOGY.to_string();
        self.messages.push(Message::new_with_type(
            Author::SimpAi,
            MessageType::Error,
            FALLBACK_APOLOGY,
        ));
    }

    /// Restores a persisted session. Stored descriptions only get the `!!!`
    /// stripping; the follow-up question comes back from its own field.
    pub fn apply_history(&mut self, record: HistoryRecord) {
        let description = followups::clean_description(&record.description);
        let listings = parse_listings(&record.results);

        self.session = Session {
            id: Some(record.id),
            title: record.title,
            last_question: record.lasttitle,
            description: description.clone(),
            result_type: ResultType::parse(&record.result_type),
            results: listings,
        };

        self.messages = vec![Message::new(Author::SimpAi, &description)];
        self.detail = None;
        self.waiting_for_backend = false;

        if self.session.result_type == ResultType::Listing && !self.session.results.is_empty() {
            self.view = ViewState::ChatWithListings(ListingsMode::Card);
        } else {
            self.view = ViewState::ChatWithAnalysis;
        }
    }

    pub fn apply_histories(&mut self, histories: Vec<HistoryEntry>) {
        // Ordering is whatever the backend returned, assumed newest first.
        self.histories = histories;
        self.view = ViewState::HistoryList;
    }

    pub fn show_detail(&mut self, detail: PropertyDetail) {
        self.detail = Some(detail);
        self.view = ViewState::PropertyDetail;
    }

    /// Leaves the detail or history view, falling back to whatever the
    /// session's results support.
    pub fn close_overlay(&mut self) {
        self.detail = None;
        if self.session.result_type == ResultType::Listing && !self.session.results.is_empty() {
            self.view = ViewState::ChatWithListings(ListingsMode::Card);
        } else if self.messages.is_empty() {
            self.view = ViewState::SuggestionPrompt;
        } else {
            self.view = ViewState::ChatWithAnalysis;
        }
    }

    pub fn set_listings_mode(&mut self, mode: ListingsMode) -> bool {
        if self.session.results.is_empty() {
            return false;
        }
        self.view = ViewState::ChatWithListings(mode);
        return true;
    }

    /// CSV bytes for the current results, None when there is nothing to
    /// export.
    pub fn export(&self) -> Option<Vec<u8>> {
        if self.session.results.is_empty() {
            return None;
        }

        let rows = self
            .session
            .results
            .iter()
            .filter_map(|listing| return serde_json::to_value(listing).ok())
            .collect::<Vec<Value>>();

        return Some(csv_export::export(&rows));
    }
}
