#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Back,
    CardView,
    Detail,
    Export,
    Help,
    History,
    MapView,
    Open,
    Quit,
    Report,
    Upload,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let command = text.split_whitespace().next().unwrap_or_default();
        match command {
            "/back" => return Some(SlashCommand::Back),
            "/card" => return Some(SlashCommand::CardView),
            "/detail" | "/d" => return Some(SlashCommand::Detail),
            "/export" => return Some(SlashCommand::Export),
            "/help" | "/h" => return Some(SlashCommand::Help),
            "/history" => return Some(SlashCommand::History),
            "/map" => return Some(SlashCommand::MapView),
            "/open" | "/o" => return Some(SlashCommand::Open),
            "/quit" | "/exit" | "/q" => return Some(SlashCommand::Quit),
            "/report" | "/r" => return Some(SlashCommand::Report),
            "/upload" | "/u" => return Some(SlashCommand::Upload),
            _ => return None,
        }
    }

    /// Everything after the command token, trimmed. Empty when the command
    /// was given without an argument.
    pub fn argument(text: &str) -> String {
        let mut parts = text.splitn(2, char::is_whitespace);
        parts.next();
        return parts.next().unwrap_or_default().trim().to_string();
    }
}
