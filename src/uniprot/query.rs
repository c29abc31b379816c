//! Query construction for the UniProtKB REST endpoints

use crate::{DrugTargetError, Result};
use url::Url;

/// Default organism for gene searches when none is given
pub const DEFAULT_ORGANISM: &str = "Homo sapiens";

/// A validated protein lookup: either a direct accession or a gene search
#[derive(Debug, Clone, PartialEq)]
pub enum ProteinQuery {
    Accession(String),
    Gene {
        symbol: String,
        organism: Option<String>,
    },
}

impl ProteinQuery {
    /// Build a query from CLI-level inputs. Exactly one of `id`/`gene` must
    /// be present; `organism` is only valid alongside `gene`. Validation
    /// happens here so it holds before any network call.
    pub fn from_args(
        id: Option<String>,
        gene: Option<String>,
        organism: Option<String>,
    ) -> Result<Self> {
        match (id, gene) {
            (Some(_), Some(_)) => Err(DrugTargetError::InvalidInput(
                "specify either --id or --gene, not both".to_string(),
            )),
            (None, None) => Err(DrugTargetError::InvalidInput(
                "specify either --id or --gene".to_string(),
            )),
            (Some(id), None) => {
                if organism.is_some() {
                    return Err(DrugTargetError::InvalidInput(
                        "--organism only applies to --gene searches".to_string(),
                    ));
                }
                let id = id.trim().to_string();
                if id.is_empty() {
                    return Err(DrugTargetError::InvalidInput(
                        "accession must not be empty".to_string(),
                    ));
                }
                Ok(ProteinQuery::Accession(id))
            }
            (None, Some(gene)) => {
                let symbol = gene.trim().to_string();
                if symbol.is_empty() {
                    return Err(DrugTargetError::InvalidInput(
                        "gene symbol must not be empty".to_string(),
                    ));
                }
                Ok(ProteinQuery::Gene { symbol, organism })
            }
        }
    }

    /// Short description for log and error messages
    pub fn describe(&self) -> String {
        match self {
            ProteinQuery::Accession(acc) => format!("accession {}", acc),
            ProteinQuery::Gene { symbol, organism } => format!(
                "gene {} ({})",
                symbol,
                organism.as_deref().unwrap_or(DEFAULT_ORGANISM)
            ),
        }
    }
}

/// URL for fetching a full entry by accession
pub fn entry_url(base_url: &str, accession: &str) -> String {
    format!("{}/uniprotkb/{}.json", base_url.trim_end_matches('/'), accession)
}

/// URL for a gene search returning at most one JSON result
pub fn search_url(base_url: &str, symbol: &str, organism: Option<&str>) -> Result<String> {
    let query = format!(
        "gene_exact:{} AND organism_name:\"{}\"",
        symbol,
        organism.unwrap_or(DEFAULT_ORGANISM)
    );

    let endpoint = format!("{}/uniprotkb/search", base_url.trim_end_matches('/'));
    let url = Url::parse_with_params(
        &endpoint,
        &[("query", query.as_str()), ("format", "json"), ("size", "1")],
    )
    .map_err(|e| DrugTargetError::InvalidInput(format!("invalid API base URL: {}", e)))?;

    Ok(url.into())
}
