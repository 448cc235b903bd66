use thiserror::Error;

mod domain_types;

pub use domain_types::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid section identifier: {id} - {reason}")]
    InvalidSectionId { id: String, reason: String },

    #[error("Invalid language code: {code} - {reason}")]
    InvalidLanguageCode { code: String, reason: String },
}
