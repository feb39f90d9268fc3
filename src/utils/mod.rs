pub mod config;
pub mod cookie_helpers;

pub use config::Config;
pub use cookie_helpers::*;
