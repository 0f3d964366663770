use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputError {
    #[error("Unknown record property \"{0}\".")]
    UnknownProperty(String),

    #[error("Unknown output format \"{0}\".")]
    UnknownFormat(String),
}
