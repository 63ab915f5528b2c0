use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::fs;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Listing;
use crate::domain::models::ListingsMode;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::SlashCommand;
use crate::domain::models::ViewState;
use crate::domain::services::actions::help_text;
use crate::domain::services::csv_export;
use crate::domain::services::events::EventsService;
use crate::domain::services::render_card;
use crate::domain::services::render_marker;
use crate::domain::services::Conversation;
use crate::infrastructure::backends::BackendManager;

pub const SUGGESTIONS: [&str; 4] = [
    "Show me 3 bed, 2 bath single-family homes in Austin, TX under $350K",
    "What's the estimated ARV for 456 Elm St, Dallas, TX 75201?",
    "Calculate the cap rate for a rental at 789 Pine Ave, Seattle, WA",
    "Find all properties for sale in San Antonio, TX with at least 5% rental yield",
];

fn print_message(message: &Message) {
    let author = format!("{}:", message.author.to_string());
    match message.message_type() {
        MessageType::Error => println!("{} {}", author.bold(), message.text.red()),
        MessageType::Normal => println!("{} {}", author.bold(), message.text),
    }
}

fn print_prompt() {
    print!("> ");
    std::io::stdout().flush().ok();
}

fn render(conversation: &Conversation) {
    println!();

    match conversation.view {
        ViewState::SuggestionPrompt => {
            println!("{}", "Instant Real Estate Insights".bold());
            println!("Ask about properties, market trends, or investment opportunities.\n");
            for (idx, suggestion) in SUGGESTIONS.iter().enumerate() {
                println!("  ({}) {suggestion}", idx + 1);
            }
            println!("\nType a number to try a suggestion, or ask your own question.");
        }
        ViewState::ChatWithAnalysis => {
            if !conversation.session.title.is_empty() {
                println!("{}\n", conversation.session.title.bold());
            }
            if let Some(message) = conversation.messages.last() {
                print_message(message);
            }
        }
        ViewState::ChatWithListings(mode) => {
            if let Some(message) = conversation.messages.last() {
                print_message(message);
            }
            println!();
            match mode {
                ListingsMode::Card => {
                    for (idx, listing) in conversation.session.results.iter().enumerate() {
                        println!("({})", idx + 1);
                        println!("{}\n", render_card(listing));
                    }
                }
                ListingsMode::Map => {
                    for (idx, listing) in conversation.session.results.iter().enumerate() {
                        println!("({}) {}", idx + 1, render_marker(listing));
                    }
                }
            }
            println!(
                "{}",
                "Commands: /detail N, /report N, /card, /map, /export".dimmed()
            );
        }
        ViewState::HistoryList => {
            println!("{}", "Previous sessions".bold());
            if conversation.histories.is_empty() {
                println!("There are no sessions available. You should start your first one!");
            } else {
                for entry in &conversation.histories {
                    println!("- (ID: {}) {}", entry.id, entry.title);
                }
                println!("\nUse /open SESSION_ID to resume one, or /back to leave.");
            }
        }
        ViewState::PropertyDetail => {
            if let Some(detail) = &conversation.detail {
                println!("{}", detail.address.bold());
                if let Some(street_view) = &detail.street_view {
                    println!("Street view image: {}", street_view.display());
                }
                println!("Photos:");
                for url in &detail.photos {
                    println!("- {url}");
                }
                println!("{}", "Use /back to return to the results.".dimmed());
            }
        }
    }

    print_prompt();
}

fn nth_listing(conversation: &Conversation, arg: &str) -> Option<Listing> {
    let idx = arg.parse::<usize>().ok()?;
    if idx == 0 {
        return None;
    }
    return conversation.session.results.get(idx - 1).cloned();
}

async fn handle_line(
    conversation: &mut Conversation,
    tx: &mpsc::UnboundedSender<Action>,
    line: &str,
) -> Result<bool> {
    let text = line.trim();

    if let Some(command) = SlashCommand::parse(text) {
        match command {
            SlashCommand::Quit => return Ok(true),
            SlashCommand::Help => {
                println!("{}", help_text());
                print_prompt();
            }
            SlashCommand::History => tx.send(Action::ListHistories())?,
            SlashCommand::Open => {
                let id = SlashCommand::argument(text);
                if id.is_empty() {
                    println!("Pass a session id, e.g. /open abc-123.");
                    print_prompt();
                } else {
                    tx.send(Action::LoadHistory(id))?;
                }
            }
            SlashCommand::CardView => {
                if conversation.set_listings_mode(ListingsMode::Card) {
                    render(conversation);
                } else {
                    println!("There are no listings to show yet.");
                    print_prompt();
                }
            }
            SlashCommand::MapView => {
                if conversation.set_listings_mode(ListingsMode::Map) {
                    render(conversation);
                } else {
                    println!("There are no listings to show yet.");
                    print_prompt();
                }
            }
            SlashCommand::Export => {
                match conversation.export() {
                    Some(bytes) => {
                        let arg = SlashCommand::argument(text);
                        let file_name = if arg.is_empty() {
                            csv_export::DEFAULT_FILE_NAME.to_string()
                        } else {
                            arg
                        };
                        fs::write(&file_name, &bytes).await?;
                        println!(
                            "Saved {} listings to {file_name}.",
                            conversation.session.results.len()
                        );
                    }
                    None => println!("There are no listings to export yet."),
                }
                print_prompt();
            }
            SlashCommand::Detail => match nth_listing(conversation, &SlashCommand::argument(text)) {
                Some(listing) => {
                    println!("{}", "Loading property details...".dimmed());
                    tx.send(Action::FetchPropertyDetail(Box::new(listing)))?;
                }
                None => {
                    println!("Pass a listing number, e.g. /detail 1.");
                    print_prompt();
                }
            },
            SlashCommand::Report => {
                // One report at a time, the guard resets when it lands.
                if conversation.report_in_flight {
                    println!("A report is already being generated, hang tight.");
                    print_prompt();
                } else {
                    match nth_listing(conversation, &SlashCommand::argument(text)) {
                        Some(listing) => {
                            conversation.report_in_flight = true;
                            println!("{}", "Generating the property report...".dimmed());
                            tx.send(Action::GenerateReport(Box::new(listing)))?;
                        }
                        None => {
                            println!("Pass a listing number, e.g. /report 1.");
                            print_prompt();
                        }
                    }
                }
            }
            SlashCommand::Upload => {
                let arg = SlashCommand::argument(text);
                if arg.is_empty() {
                    println!("Pass a file path, e.g. /upload ./deal.pdf.");
                    print_prompt();
                } else {
                    let file_path = std::path::PathBuf::from(&arg);
                    let seq = conversation.submit_file(&arg);
                    println!("{}", "Analyzing the document...".dimmed());
                    tx.send(Action::AnalyzeFile(seq, file_path))?;
                }
            }
            SlashCommand::Back => {
                conversation.close_overlay();
                render(conversation);
            }
        }
        return Ok(false);
    }

    // On the landing view a bare number picks the matching suggestion.
    let query = match text.parse::<usize>() {
        Ok(n) if conversation.view == ViewState::SuggestionPrompt
            && (1..=SUGGESTIONS.len()).contains(&n) =>
        {
            SUGGESTIONS[n - 1].to_string()
        }
        _ => text.to_string(),
    };

    match conversation.submit(&query) {
        Some(request) => {
            println!("{}", "Analyzing...".dimmed());
            tx.send(Action::AnalyzeProperty(request))?;
        }
        None => {
            println!("Chat closed.");
            render(conversation);
        }
    }

    return Ok(false);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut conversation = Conversation::default();
    let mut events = EventsService::new(rx);

    let backend = BackendManager::get()?;
    if let Err(err) = backend.health_check().await {
        conversation.messages.push(Message::new_with_type(
            Author::SimpAi,
            MessageType::Error,
            &format!(
                "Hey, it looks like the analysis service at {} isn't running, I can't connect to it. You should double check that before we start searching.\n\nError: {err}",
                Config::get(ConfigKey::BackendURL)
            ),
        ));
        if let Some(message) = conversation.messages.last() {
            print_message(message);
        }
    }

    let session_id = Config::get(ConfigKey::SessionID);
    if !session_id.is_empty() {
        tx.send(Action::LoadHistory(session_id))?;
    }

    render(&conversation);

    loop {
        match events.next().await? {
            Event::UserLine(line) => {
                if handle_line(&mut conversation, &tx, &line).await? {
                    break;
                }
            }
            Event::AnalyzeResponse(seq, record) => {
                conversation.apply_response(seq, record);
                render(&conversation);
            }
            Event::AnalyzeFailed(seq) => {
                conversation.apply_failure(seq);
                render(&conversation);
            }
            Event::HistoriesLoaded(histories) => {
                conversation.apply_histories(histories);
                render(&conversation);
            }
            Event::HistoryLoaded(record) => {
                conversation.apply_history(*record);
                render(&conversation);
            }
            Event::HistoryFailed(text) => {
                println!("{}", text.red());
                print_prompt();
            }
            Event::PropertyDetailLoaded(detail) => {
                conversation.show_detail(*detail);
                render(&conversation);
            }
            Event::PropertyDetailFailed(text) => {
                println!("{}", text.red());
                print_prompt();
            }
            Event::ReportReady(file_path) => {
                conversation.report_in_flight = false;
                println!("Report saved to {}.", file_path.display());
                print_prompt();
            }
            Event::ReportFailed(text) => {
                conversation.report_in_flight = false;
                println!("{}", text.red());
                print_prompt();
            }
        }
    }

    return Ok(());
}
