pub mod actions;
mod card;
mod conversation;
pub mod csv_export;
pub mod events;
pub mod followups;

pub use card::*;
pub use conversation::*;
