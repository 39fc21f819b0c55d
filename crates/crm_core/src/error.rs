use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("date value is empty")]
    Empty,
    #[error("unrecognised date `{0}`")]
    Unrecognised(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown currency grouping `{0}` (expected `indian` or `western`)")]
    UnknownGrouping(String),
    #[error("phone country code `{0}` must be one to three digits")]
    InvalidCountryCode(String),
}
