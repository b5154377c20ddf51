use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    #[error("Birthday for contact {0} not found.")]
    BirthdayNotFound(String),

    #[error("Phone {0} not found.")]
    PhoneNotFound(String),

    #[error("Phone number must contain exactly 10 digits, got: {0}")]
    InvalidPhoneFormat(String),

    #[error("Invalid date format, use DD.MM.YYYY, got: {0}")]
    InvalidDateFormat(String),

    #[error("Missing argument. Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("Too many arguments. Usage: {usage}")]
    UnexpectedArgument { usage: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
