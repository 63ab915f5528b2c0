use anyhow::Result;
use tokio::io;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::io::Lines;
use tokio::io::Stdin;
use tokio::sync::mpsc;

use crate::domain::models::Event;

/// Funnels worker events and stdin lines into one stream so the UI loop has a
/// single suspension point.
pub struct EventsService {
    lines: Lines<BufReader<Stdin>>,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            lines: BufReader::new(io::stdin()).lines(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let event = tokio::select! {
                event = self.events.recv() => event,
                line = self.lines.next_line() => match line {
                    Ok(Some(text)) => Some(Event::UserLine(text)),
                    // Closed stdin reads as a quit.
                    _ => Some(Event::UserLine("/quit".to_string())),
                },
            };

            if let Some(event) = event {
                return Ok(event);
            }
        }
    }
}
