//! Error types for nvmc

use thiserror::Error;

/// Main error type for nvmc
#[derive(Error, Debug)]
pub enum NvmcError {
    #[error("option {option} requires a value")]
    MissingValue { option: String },

    #[error("required option(s) missing: {}", options.join(", "))]
    MissingRequired { options: Vec<String> },

    #[error("option {option} is already registered")]
    DuplicateOption { option: String },

    #[error("option {option}: cannot decode {value:?} as {target}")]
    Decode {
        option: String,
        value: String,
        target: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NvmcError>;
