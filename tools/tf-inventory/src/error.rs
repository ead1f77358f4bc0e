use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse Terraform output file {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Terraform output '{0}' not found")]
    MissingOutput(String),
    #[error("Terraform output '{output}' has a {found} value, expected a string or a list of strings")]
    UnexpectedValueType { output: String, found: &'static str },
    #[error("Terraform output '{0}' is an empty list")]
    EmptyOutput(String),
    #[error("Terraform output '{output}' contains {value}, which is not an IP address")]
    InvalidAddress { output: String, value: String },
    #[error("invalid {kind} '{value}', must be non-empty and contain no whitespace, '=', '[' or ']'")]
    InvalidName { kind: &'static str, value: String },
    #[error("invalid ansible user '{0}', must be non-empty and contain no whitespace")]
    InvalidUser(String),
}
