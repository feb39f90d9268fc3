pub(crate) mod request_link;
pub(crate) mod root;
pub(crate) mod secret;
pub(crate) mod verify_link;

// re-export items from sub-modules
pub use request_link::*;
pub use root::*;
pub use secret::*;
pub use verify_link::*;
