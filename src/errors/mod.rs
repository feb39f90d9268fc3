mod request_link;

pub use request_link::*;
