//! Presentation of a [`ProteinSummary`]: terminal report and JSON dump

use crate::cli::output::*;
use crate::uniprot::summary::ProteinSummary;
use crate::Result;
use std::io;
use std::path::Path;

/// How many domains / PDB ids the terminal report lists before eliding
const MAX_LISTED_DOMAINS: usize = 5;
const MAX_LISTED_PDB_IDS: usize = 5;
/// Function text is cut at this many characters in the terminal report
const MAX_FUNCTION_CHARS: usize = 400;

/// Render the summary as a multi-line terminal block. Fields the entry
/// does not carry are omitted.
pub fn render(summary: &ProteinSummary) {
    section_header_with_line("UniProt Summary");

    let mut items: Vec<(&str, String)> = vec![("Accession", summary.accession.clone())];

    if let Some(name) = &summary.protein_name {
        items.push(("Protein", name.clone()));
    }
    if !summary.genes.is_empty() {
        items.push(("Gene(s)", summary.genes.join(", ")));
    }
    if let Some(organism) = &summary.organism {
        items.push(("Organism", organism.clone()));
    }
    if let Some(length) = summary.length {
        items.push(("Length", format!("{} aa", format_number(length))));
    }
    if let Some(mass) = summary.mass {
        items.push(("Mass", format!("{} Da", format_number(mass as u64))));
    }
    if !summary.keywords.is_empty() {
        items.push(("Keywords", summary.keywords.join(", ")));
    }
    if !summary.pdb_ids.is_empty() {
        let shown: Vec<&str> = summary
            .pdb_ids
            .iter()
            .take(MAX_LISTED_PDB_IDS)
            .map(String::as_str)
            .collect();
        items.push((
            "PDB entries",
            format!("{} ({})", summary.pdb_ids.len(), shown.join(", ")),
        ));
    }
    if !summary.subcellular_locations.is_empty() {
        items.push((
            "Subcellular",
            summary.subcellular_locations.join(", "),
        ));
    }

    let has_domains = !summary.domains.is_empty();
    for (i, (key, value)) in items.iter().enumerate() {
        let last = !has_domains && i == items.len() - 1;
        tree_item(last, key, Some(value.as_str()));
    }

    if has_domains {
        let title = if summary.domains.len() > MAX_LISTED_DOMAINS {
            format!("Domains (first {} of {})", MAX_LISTED_DOMAINS, summary.domains.len())
        } else {
            "Domains".to_string()
        };
        let domain_items: Vec<(&str, String)> = summary
            .domains
            .iter()
            .take(MAX_LISTED_DOMAINS)
            .map(|d| ("", d.label()))
            .collect();
        tree_section(&title, domain_items, true);
    }

    if let Some(function) = summary.functions.first() {
        println!();
        subsection_header("Function");
        println!("  {}", truncate_chars(function, MAX_FUNCTION_CHARS));
    }
    println!();
}

/// Serialize the summary as pretty-printed JSON, overwriting `path`
pub fn write_json(summary: &ProteinSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::from)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut)
    }
}
