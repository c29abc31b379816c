pub mod client;
pub mod extract;
pub mod query;
pub mod summary;

pub use client::UniProtClient;
pub use query::ProteinQuery;
pub use summary::{DomainFeature, ProteinSummary};
