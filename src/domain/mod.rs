pub mod access_claims;
pub mod email;
pub mod issued_token;
pub mod request_link;

pub use access_claims::*;
pub use email::*;
pub use issued_token::*;
pub use request_link::*;
