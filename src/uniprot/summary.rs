//! Flat projection of a UniProtKB entry

use serde::{Deserialize, Serialize};

/// A domain-like feature annotation with its position on the sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainFeature {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

impl DomainFeature {
    /// Human-readable label like "Protein kinase (57-315)"
    pub fn label(&self) -> String {
        match (self.start, self.end) {
            (Some(start), Some(end)) => format!("{} ({}-{})", self.name, start, end),
            (Some(start), None) => format!("{} ({}-?)", self.name, start),
            (None, Some(end)) => format!("{} (?-{})", self.name, end),
            (None, None) => self.name.clone(),
        }
    }
}

/// Summary of one UniProtKB entry. Every field is read straight off the
/// upstream record; fields the entry does not carry stay absent/empty and
/// are omitted from JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinSummary {
    pub accession: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organism: Option<String>,

    /// Sequence length in amino acids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,

    /// Molecular weight in daltons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcellular_locations: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<DomainFeature>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pdb_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,
}

impl ProteinSummary {
    /// Empty summary carrying only the accession
    pub fn new(accession: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
            protein_name: None,
            genes: Vec::new(),
            organism: None,
            length: None,
            mass: None,
            keywords: Vec::new(),
            subcellular_locations: Vec::new(),
            domains: Vec::new(),
            pdb_ids: Vec::new(),
            functions: Vec::new(),
        }
    }
}
