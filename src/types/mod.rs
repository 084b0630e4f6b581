use thiserror::Error;

mod domain_types;

pub use domain_types::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid document uid: {input} - {reason}")]
    InvalidUid { input: String, reason: String },

    #[error("Invalid document type: {name} - {reason}")]
    InvalidDocumentType { name: String, reason: String },

    #[error("Invalid cursor URL: {url} - {reason}")]
    InvalidCursor { url: String, reason: String },

    #[error("Invalid API endpoint: {url} - {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid access token: {reason}")]
    InvalidAccessToken { reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Value out of bounds: {value}, expected {min}..={max}")]
    OutOfBounds {
        value: usize,
        min: usize,
        max: usize,
    },
}
