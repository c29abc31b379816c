pub mod cli;
pub mod report;
pub mod uniprot;

pub use crate::uniprot::summary::ProteinSummary;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrugTargetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No matching UniProt entry: {0}")]
    NotFound(String),

    #[error("Malformed UniProt response: {0}")]
    MalformedResponse(String),

    #[error("UniProt request timed out: {0}")]
    Timeout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UniProt API error: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, DrugTargetError>;
