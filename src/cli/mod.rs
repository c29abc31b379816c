pub mod output;

use crate::report;
use crate::uniprot::client::DEFAULT_BASE_URL;
use crate::uniprot::{ProteinQuery, UniProtClient};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "drugtarget",
    version,
    about = "Fetch and summarize UniProt protein entries",
    long_about = "Looks up a protein in UniProtKB by accession or gene symbol, prints a \
                  summary of its annotation (name, organism, size, domains, localization, \
                  function, PDB structures), and optionally saves the summary as JSON."
)]
pub struct Cli {
    /// UniProt accession (e.g., P04637)
    #[arg(long, value_name = "ACCESSION", conflicts_with = "gene")]
    pub id: Option<String>,

    /// Gene symbol to search for (e.g., TP53)
    #[arg(long, value_name = "SYMBOL")]
    pub gene: Option<String>,

    /// Organism name for gene searches (default: Homo sapiens)
    #[arg(long, value_name = "NAME", requires = "gene")]
    pub organism: Option<String>,

    /// Write the summary as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// UniProt API endpoint (for testing/mirrors)
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    pub uniprot_api: String,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    // Clap already enforces the flag combinations; the query builder checks
    // them again so the invariant does not depend on the argument parser.
    let query = ProteinQuery::from_args(cli.id, cli.gene, cli.organism)?;

    if cli.verbose > 0 {
        eprintln!("Endpoint: {}", cli.uniprot_api);
    }
    tracing::info!(query = %query.describe(), "querying UniProt");

    let client = UniProtClient::new(&cli.uniprot_api)?;
    let summary = client.fetch(&query)?;

    // Terminal report first; a failing --output write must not suppress it
    report::render(&summary);

    if let Some(path) = &cli.output {
        report::write_json(&summary, path)?;
        output::success(&format!("Saved JSON to {}", path.display()));
    }

    Ok(())
}
