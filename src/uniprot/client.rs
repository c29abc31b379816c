//! Blocking HTTP client for the UniProtKB REST API

use crate::uniprot::extract;
use crate::uniprot::query::{self, ProteinQuery};
use crate::uniprot::summary::ProteinSummary;
use crate::{DrugTargetError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://rest.uniprot.org";

/// UniProt API client
pub struct UniProtClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl UniProtClient {
    /// Create a new UniProt client with a bounded request timeout
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("drugtarget/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DrugTargetError::Upstream(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    /// Resolve a query to a summary. Gene queries are two round trips:
    /// search for the best-matching accession, then fetch its full entry.
    pub fn fetch(&self, protein_query: &ProteinQuery) -> Result<ProteinSummary> {
        match protein_query {
            ProteinQuery::Accession(accession) => self.fetch_by_accession(accession),
            ProteinQuery::Gene { symbol, organism } => {
                let url = query::search_url(&self.base_url, symbol, organism.as_deref())?;
                let desc = protein_query.describe();
                let body = self.get(&url, &desc, &format!("Searching UniProt for {}", desc))?;
                let accession = extract::first_accession(&body, &desc)?;
                tracing::debug!(accession = %accession, "gene search hit");
                self.fetch_by_accession(&accession)
            }
        }
    }

    /// Fetch and project a single entry by accession
    pub fn fetch_by_accession(&self, accession: &str) -> Result<ProteinSummary> {
        let url = query::entry_url(&self.base_url, accession);
        let subject = format!("accession {}", accession);
        let body = self.get(
            &url,
            &subject,
            &format!("Fetching UniProt entry {}", accession),
        )?;
        extract::parse_entry_body(&body)
    }

    fn get(&self, url: &str, subject: &str, message: &str) -> Result<String> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("[{elapsed_precise}] {spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        tracing::debug!(%url, "GET");
        let result = self.send(url, subject);
        pb.finish_and_clear();
        result
    }

    fn send(&self, url: &str, subject: &str) -> Result<String> {
        let response = self.client.get(url).send().map_err(map_request_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DrugTargetError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            return Err(DrugTargetError::Upstream(format!(
                "UniProt API returned status: {}",
                status
            )));
        }

        response.text().map_err(map_request_error)
    }
}

fn map_request_error(e: reqwest::Error) -> DrugTargetError {
    if e.is_timeout() {
        DrugTargetError::Timeout(e.to_string())
    } else {
        DrugTargetError::Upstream(e.to_string())
    }
}
