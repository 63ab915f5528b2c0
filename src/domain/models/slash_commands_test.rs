use super::SlashCommand;

#[test]
fn it_parses_commands_and_aliases() {
    assert_eq!(SlashCommand::parse("/quit"), Some(SlashCommand::Quit));
    assert_eq!(SlashCommand::parse("/q"), Some(SlashCommand::Quit));
    assert_eq!(SlashCommand::parse("/exit"), Some(SlashCommand::Quit));
    assert_eq!(SlashCommand::parse("/history"), Some(SlashCommand::History));
    assert_eq!(
        SlashCommand::parse("/open abc-123"),
        Some(SlashCommand::Open)
    );
    assert_eq!(SlashCommand::parse("/d 2"), Some(SlashCommand::Detail));
    assert_eq!(SlashCommand::parse("/card"), Some(SlashCommand::CardView));
    assert_eq!(SlashCommand::parse("/map"), Some(SlashCommand::MapView));
}

#[test]
fn it_ignores_plain_queries() {
    assert_eq!(SlashCommand::parse("homes in Austin"), None);
    assert_eq!(SlashCommand::parse(""), None);
    assert_eq!(SlashCommand::parse("/bogus"), None);
}

#[test]
fn it_extracts_arguments() {
    assert_eq!(SlashCommand::argument("/open abc-123"), "abc-123");
    assert_eq!(SlashCommand::argument("/upload  ./deal.pdf "), "./deal.pdf");
    assert_eq!(SlashCommand::argument("/export"), "");
}
