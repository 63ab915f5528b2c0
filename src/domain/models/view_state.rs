#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingsMode {
    Card,
    Map,
}

/// Which surface the terminal is currently rendering. Derived from the
/// session's result type and navigation commands, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    SuggestionPrompt,
    ChatWithListings(ListingsMode),
    ChatWithAnalysis,
    HistoryList,
    PropertyDetail,
}

impl Default for ViewState {
    fn default() -> ViewState {
        return ViewState::SuggestionPrompt;
    }
}
