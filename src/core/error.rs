use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("'{0}' does not match any known commands or shortcuts")]
    NoMatch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "CONFIG_ERROR",
            Error::NoMatch(_) => "NO_MATCH",
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::Io(_) => "IO_ERROR",
            Error::Toml(_) => "TOML_ERROR",
        }
    }
}
