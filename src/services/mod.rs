pub mod access_flow;
pub mod clock;
pub mod email_client;
pub mod token_service;

pub use access_flow::*;
pub use clock::*;
pub use email_client::*;
pub use token_service::*;
