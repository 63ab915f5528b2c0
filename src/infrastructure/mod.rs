pub mod backends;
pub mod providers;
