//! Projection of UniProtKB entry JSON into a [`ProteinSummary`]
//!
//! Every field is read from a fixed path in the entry document. A missing
//! path leaves the field absent; upstream records vary a lot in completeness
//! and a partial summary is a valid result.

use crate::uniprot::summary::{DomainFeature, ProteinSummary};
use crate::{DrugTargetError, Result};
use serde_json::Value;

/// Feature types projected into the domains list
const DOMAIN_FEATURE_TYPES: &[&str] = &["Domain", "Region", "Topological domain"];

/// Parse a raw entry body and project it into a summary
pub fn parse_entry_body(body: &str) -> Result<ProteinSummary> {
    let entry: Value = serde_json::from_str(body)
        .map_err(|e| DrugTargetError::MalformedResponse(format!("invalid JSON: {}", e)))?;
    extract_summary(&entry)
}

/// Project a parsed entry document into a summary
pub fn extract_summary(entry: &Value) -> Result<ProteinSummary> {
    let accession = entry
        .get("primaryAccession")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            DrugTargetError::MalformedResponse("entry has no primaryAccession".to_string())
        })?;

    let mut summary = ProteinSummary::new(accession);

    summary.protein_name = entry
        .pointer("/proteinDescription/recommendedName/fullName/value")
        .and_then(Value::as_str)
        .map(str::to_string);

    summary.genes = string_values(entry.get("genes"), |gene| {
        gene.pointer("/geneName/value").and_then(Value::as_str)
    });

    summary.organism = entry
        .pointer("/organism/scientificName")
        .and_then(Value::as_str)
        .map(str::to_string);

    summary.length = entry.pointer("/sequence/length").and_then(Value::as_u64);
    summary.mass = entry.pointer("/sequence/molWeight").and_then(Value::as_f64);

    summary.keywords = string_values(entry.get("keywords"), |kw| {
        kw.get("name").and_then(Value::as_str)
    });

    summary.subcellular_locations = subcellular_locations(entry);
    summary.domains = domain_features(entry);
    summary.pdb_ids = pdb_cross_references(entry);
    summary.functions = function_comments(entry);

    Ok(summary)
}

/// First accession from a search response body. An empty result set means
/// no entry matched the query.
pub fn first_accession(body: &str, query_desc: &str) -> Result<String> {
    let response: Value = serde_json::from_str(body)
        .map_err(|e| DrugTargetError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let results = response
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            DrugTargetError::MalformedResponse("search response has no results array".to_string())
        })?;

    results
        .first()
        .and_then(|entry| entry.get("primaryAccession"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DrugTargetError::NotFound(query_desc.to_string()))
}

fn string_values<'a, F>(array: Option<&'a Value>, pick: F) -> Vec<String>
where
    F: Fn(&'a Value) -> Option<&'a str>,
{
    array
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| pick(item).map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn comments_of_type<'a>(entry: &'a Value, comment_type: &str) -> Vec<&'a Value> {
    entry
        .get("comments")
        .and_then(Value::as_array)
        .map(|comments| {
            comments
                .iter()
                .filter(|c| c.get("commentType").and_then(Value::as_str) == Some(comment_type))
                .collect()
        })
        .unwrap_or_default()
}

fn subcellular_locations(entry: &Value) -> Vec<String> {
    let mut locations = Vec::new();

    for comment in comments_of_type(entry, "SUBCELLULAR_LOCATION") {
        let Some(entries) = comment.get("subcellularLocations").and_then(Value::as_array) else {
            continue;
        };
        for loc in entries {
            // Location plus topology when annotated, e.g. "Membrane ; Single-pass"
            let parts: Vec<&str> = ["location", "topology"]
                .iter()
                .filter_map(|key| loc.pointer(&format!("/{}/value", key)))
                .filter_map(Value::as_str)
                .collect();
            if !parts.is_empty() {
                locations.push(parts.join(" ; "));
            }
        }
    }

    locations
}

fn domain_features(entry: &Value) -> Vec<DomainFeature> {
    let Some(features) = entry.get("features").and_then(Value::as_array) else {
        return Vec::new();
    };

    features
        .iter()
        .filter(|feat| {
            feat.get("type")
                .and_then(Value::as_str)
                .map(|t| DOMAIN_FEATURE_TYPES.contains(&t))
                .unwrap_or(false)
        })
        .map(|feat| {
            let name = feat
                .get("description")
                .and_then(Value::as_str)
                .filter(|desc| !desc.is_empty())
                .or_else(|| feat.get("type").and_then(Value::as_str))
                .unwrap_or("(unnamed)")
                .to_string();

            DomainFeature {
                name,
                start: feat.pointer("/location/start/value").and_then(Value::as_u64),
                end: feat.pointer("/location/end/value").and_then(Value::as_u64),
            }
        })
        .collect()
}

fn pdb_cross_references(entry: &Value) -> Vec<String> {
    entry
        .get("uniProtKBCrossReferences")
        .and_then(Value::as_array)
        .map(|refs| {
            refs.iter()
                .filter(|xref| xref.get("database").and_then(Value::as_str) == Some("PDB"))
                .filter_map(|xref| xref.get("id").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn function_comments(entry: &Value) -> Vec<String> {
    comments_of_type(entry, "FUNCTION")
        .iter()
        .filter_map(|comment| {
            let texts = string_values(comment.get("texts"), |t| {
                t.get("value").and_then(Value::as_str)
            });
            if texts.is_empty() {
                None
            } else {
                Some(texts.join(" "))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_entry_is_valid() {
        let entry = json!({ "primaryAccession": "P04637" });
        let summary = extract_summary(&entry).unwrap();
        assert_eq!(summary.accession, "P04637");
        assert!(summary.protein_name.is_none());
        assert!(summary.domains.is_empty());
    }

    #[test]
    fn test_missing_accession_is_malformed() {
        let entry = json!({ "proteinDescription": {} });
        assert!(matches!(
            extract_summary(&entry),
            Err(DrugTargetError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_subcellular_location_with_topology() {
        let entry = json!({
            "primaryAccession": "P00000",
            "comments": [{
                "commentType": "SUBCELLULAR_LOCATION",
                "subcellularLocations": [{
                    "location": { "value": "Cell membrane" },
                    "topology": { "value": "Single-pass membrane protein" }
                }]
            }]
        });
        let summary = extract_summary(&entry).unwrap();
        assert_eq!(
            summary.subcellular_locations,
            vec!["Cell membrane ; Single-pass membrane protein"]
        );
    }

    #[test]
    fn test_unnamed_domain_falls_back_to_type() {
        let entry = json!({
            "primaryAccession": "P00000",
            "features": [
                { "type": "Domain", "location": { "start": { "value": 5 }, "end": { "value": 60 } } },
                { "type": "Chain", "description": "ignored" }
            ]
        });
        let summary = extract_summary(&entry).unwrap();
        assert_eq!(summary.domains.len(), 1);
        assert_eq!(summary.domains[0].name, "Domain");
        assert_eq!(summary.domains[0].start, Some(5));
    }

    #[test]
    fn test_first_accession_empty_results() {
        let body = r#"{"results": []}"#;
        assert!(matches!(
            first_accession(body, "gene NOPE"),
            Err(DrugTargetError::NotFound(_))
        ));
    }

    #[test]
    fn test_first_accession_truncated_body() {
        let body = r#"{"results": [{"primaryAccession": "P0463"#;
        assert!(matches!(
            first_accession(body, "gene TP53"),
            Err(DrugTargetError::MalformedResponse(_))
        ));
    }
}
