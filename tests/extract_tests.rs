use drugtarget::uniprot::extract::{extract_summary, first_accession, parse_entry_body};
use drugtarget::uniprot::summary::DomainFeature;
use drugtarget::DrugTargetError;
use pretty_assertions::assert_eq;

const P04637: &str = include_str!("fixtures/P04637.json");

#[test]
fn test_projects_full_entry() {
    let summary = parse_entry_body(P04637).unwrap();

    assert_eq!(summary.accession, "P04637");
    assert_eq!(
        summary.protein_name.as_deref(),
        Some("Cellular tumor antigen p53")
    );
    assert_eq!(summary.genes, vec!["TP53"]);
    assert_eq!(summary.organism.as_deref(), Some("Homo sapiens"));
    assert_eq!(summary.length, Some(393));
    assert_eq!(summary.mass, Some(43653.0));
    assert_eq!(
        summary.keywords,
        vec![
            "3D-structure",
            "Activator",
            "Apoptosis",
            "Transcription regulation"
        ]
    );
    assert_eq!(
        summary.subcellular_locations,
        vec![
            "Cytoplasm",
            "Nucleus",
            "Endoplasmic reticulum membrane ; Peripheral membrane protein"
        ]
    );
    // Modified residue features are not domain-like and must be skipped
    assert_eq!(
        summary.domains,
        vec![
            DomainFeature {
                name: "Transactivation".to_string(),
                start: Some(1),
                end: Some(83),
            },
            DomainFeature {
                name: "DNA-binding".to_string(),
                start: Some(102),
                end: Some(292),
            },
            DomainFeature {
                name: "Oligomerization".to_string(),
                start: Some(319),
                end: Some(360),
            },
        ]
    );
    // RefSeq cross-reference must not leak into the PDB list
    assert_eq!(summary.pdb_ids, vec!["1TUP", "1YCS"]);
    assert_eq!(summary.functions.len(), 1);
    assert!(summary.functions[0].starts_with("Multifunctional transcription factor"));
    assert!(summary.functions[0].ends_with("cell type."));
}

#[test]
fn test_missing_fields_stay_absent() {
    let mut entry: serde_json::Value = serde_json::from_str(P04637).unwrap();
    entry["sequence"]
        .as_object_mut()
        .unwrap()
        .remove("molWeight");
    entry.as_object_mut().unwrap().remove("keywords");
    entry.as_object_mut().unwrap().remove("comments");

    let summary = extract_summary(&entry).unwrap();
    assert_eq!(summary.mass, None);
    assert_eq!(summary.length, Some(393));
    assert!(summary.keywords.is_empty());
    assert!(summary.subcellular_locations.is_empty());
    assert!(summary.functions.is_empty());
}

#[test]
fn test_malformed_body_is_rejected() {
    // Truncated mid-document
    let truncated = &P04637[..200];
    assert!(matches!(
        parse_entry_body(truncated),
        Err(DrugTargetError::MalformedResponse(_))
    ));

    // Valid JSON, wrong shape
    assert!(matches!(
        parse_entry_body(r#"{"messages": ["Resource not found"]}"#),
        Err(DrugTargetError::MalformedResponse(_))
    ));
}

#[test]
fn test_search_first_accession() {
    let body = r#"{"results": [{"primaryAccession": "P04637", "uniProtkbId": "P53_HUMAN"}]}"#;
    assert_eq!(first_accession(body, "gene TP53").unwrap(), "P04637");
}

#[test]
fn test_search_empty_results_is_not_found() {
    let err = first_accession(r#"{"results": []}"#, "gene NOSUCHGENE (Homo sapiens)").unwrap_err();
    match err {
        DrugTargetError::NotFound(desc) => assert!(desc.contains("NOSUCHGENE")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_search_malformed_body() {
    assert!(matches!(
        first_accession(r#"{"results": [{"primaryAcc"#, "gene TP53"),
        Err(DrugTargetError::MalformedResponse(_))
    ));
    assert!(matches!(
        first_accession(r#"{"hits": []}"#, "gene TP53"),
        Err(DrugTargetError::MalformedResponse(_))
    ));
}
