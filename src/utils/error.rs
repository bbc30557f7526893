use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Error when reading {path}: {reason}")]
    RegistryReadError { path: String, reason: String },

    #[error("Malformed line {line_no} in {path}: {line:?} (expected service=url)")]
    RegistryParseError {
        path: String,
        line_no: usize,
        line: String,
    },

    #[error("\"{service}\" isn't a service we know. Currently got:\n\n{known}")]
    UnknownService { service: String, known: String },

    #[error("Could not fetch commit via gh for service {service}: {detail}")]
    CommitLookupFailed { service: String, detail: String },
}

pub type Result<T> = std::result::Result<T, StatusError>;
