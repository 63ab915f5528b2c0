mod action;
mod author;
mod backend;
mod detail;
mod event;
mod listing;
mod message;
mod session;
mod slash_commands;
mod view_state;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use detail::*;
pub use event::*;
pub use listing::*;
pub use message::*;
pub use session::*;
pub use slash_commands::*;
pub use view_state::*;
