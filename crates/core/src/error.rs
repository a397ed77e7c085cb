use thiserror::Error;

/// A string did not parse into one of the domain enums.
#[derive(Debug, Error)]
#[error("invalid {what}: {value}")]
pub struct InvalidValue {
    pub what: &'static str,
    pub value: String,
}

impl InvalidValue {
    #[must_use]
    pub fn new(what: &'static str, value: &str) -> Self {
        Self { what, value: value.to_owned() }
    }
}
