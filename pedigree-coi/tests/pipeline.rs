//! End-to-end tests over the JSON exchange shape: flat maps of path label to
//! ancestor record, the form produced by document transcription upstream.

use pedigree_core::models::PedigreeTree;
use pedigree_coi::{compute_coi, RiskLevel};
use pretty_assertions::assert_eq;

fn tree(json: &str) -> PedigreeTree {
    serde_json::from_str(json).unwrap()
}

#[test]
fn linebred_pair_from_json() {
    // the dam's grandsire is the sire's sire, under a titled name variant on
    // one side; generation 1 × generation 2 gives 0.5^4 = 6.25%
    let sire = tree(
        r#"{
            "sire": { "name": "GIC Bjørnebo's Storm, JW", "registration": "(N) LO 445566" },
            "dam": { "name": "Frida av Lia" }
        }"#,
    );
    let dam = tree(
        r#"{
            "sire": { "name": "Pusur av Berg" },
            "sire_sire": { "name": "Bjørnebo's Storm" },
            "dam": { "name": "Bella av Lia" }
        }"#,
    );

    let result = compute_coi(&sire, &dam);
    assert_eq!(result.coi_percent, 6.25);
    assert_eq!(result.common_ancestors.len(), 1);

    let summary = &result.common_ancestors[0];
    assert_eq!(summary.display_name, "GIC Bjørnebo's Storm, JW");
    assert_eq!(summary.matches[0].sire_path, "sire_sire");
    assert_eq!(summary.matches[0].dam_path, "dam_sire_sire");
    assert_eq!(summary.matches[0].n1, 1);
    assert_eq!(summary.matches[0].n2, 2);

    assert_eq!(RiskLevel::classify(result.coi_percent), RiskLevel::Moderate);
}

#[test]
fn incomplete_transcription_is_a_normal_input() {
    // sparse, partially transcribed trees: fewer matches, never an error
    let sire = tree(r#"{ "sire_dam_sire": { "name": "Mons" } }"#);
    let dam = tree(r#"{}"#);

    let result = compute_coi(&sire, &dam);
    assert_eq!(result.coi_percent, 0.0);
    assert!(result.common_ancestors.is_empty());
    assert_eq!(RiskLevel::classify(result.coi_percent), RiskLevel::Low);
}

#[test]
fn malformed_tree_is_rejected_before_the_engine() {
    let err = serde_json::from_str::<PedigreeTree>(
        r#"{ "sire_sire_sire_sire_sire_sire": { "name": "Forefather" } }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("maximum depth"));
}

#[test]
fn result_serializes_for_downstream_consumers() {
    let sire = tree(r#"{ "sire": { "name": "Mons" } }"#);
    let dam = tree(r#"{ "sire": { "name": "Mons" } }"#);

    let result = compute_coi(&sire, &dam);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["coi_percent"], 12.5);
    assert_eq!(value["common_ancestors"][0]["display_name"], "Mons");
    assert_eq!(
        value["common_ancestors"][0]["matches"][0]["sire_path"],
        "sire_sire"
    );
}
