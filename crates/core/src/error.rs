use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required setting {0} is missing or empty")]
    MissingVar(&'static str),
    #[error("setting {name} has invalid value {value:?}")]
    InvalidVar { name: &'static str, value: String },
}
