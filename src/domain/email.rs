use once_cell::sync::Lazy;
use regex::Regex;

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?xi) ^[A-Z0-9._%+-]+@[A-Z0-9-]+(?:\.[A-Z0-9-]+)*\.[A-Z]{2,}$")
        .unwrap()
});

// Destination address for a magic link. Parsing is the only way to construct
// one, so every address handed to the email collaborator has already passed
// validation.
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(address: String) -> Result<Email, String> {
        if ADDRESS_RE.is_match(&address) {
            Ok(Email(address))
        } else {
            Err(format!("{} is not a valid destination address", address))
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
