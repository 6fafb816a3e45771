use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde_json::json;

use pedigree_coi::{compute_coi_traced, CoiResult, RiskLevel, TraceEvent};
use pedigree_core::models::PedigreeTree;

pub fn run_coi(matches: &ArgMatches) -> Result<()> {
    let sire_file = matches
        .get_one::<String>("sire")
        .expect("A path to the sire's pedigree file is required.");

    let dam_file = matches
        .get_one::<String>("dam")
        .expect("A path to the dam's pedigree file is required.");

    let sire = read_tree(sire_file)?;
    let dam = read_tree(dam_file)?;

    let mut events: Vec<TraceEvent> = Vec::new();
    let result = compute_coi_traced(&sire, &dam, &mut events);
    let risk = RiskLevel::classify(result.coi_percent);

    if matches.get_flag("trace") {
        print_trace(&events);
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&to_json(&result, risk))?);
    } else {
        print_report(&result, risk);
    }

    Ok(())
}

/// Parse one pedigree tree from its JSON exchange shape: a flat map of path
/// label to ancestor record. Malformed labels and depth > 5 are rejected
/// here, before the engine ever sees the tree.
fn read_tree(path: &str) -> Result<PedigreeTree> {
    let file = File::open(path).with_context(|| format!("Can't read pedigree file: {}", path))?;
    let tree = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid pedigree in {}", path))?;
    Ok(tree)
}

fn to_json(result: &CoiResult, risk: RiskLevel) -> serde_json::Value {
    json!({
        "coi_percent": result.coi_percent,
        "risk": {
            "level": risk,
            "description": risk.description(),
        },
        "common_ancestors": result
            .common_ancestors
            .iter()
            .map(|summary| {
                json!({
                    "name": summary.display_name,
                    "total_contribution_percent": summary.total_contribution_percent(),
                    "paths": summary
                        .matches
                        .iter()
                        .map(|m| {
                            json!({
                                "sire_path": m.sire_path,
                                "dam_path": m.dam_path,
                                "n1": m.n1,
                                "n2": m.n2,
                                "contribution_percent": m.contribution_percent(),
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>(),
    })
}

fn print_report(result: &CoiResult, risk: RiskLevel) {
    println!(
        "COI: {:.4}% ({}: {})",
        result.coi_percent,
        risk,
        risk.description()
    );

    if result.common_ancestors.is_empty() {
        println!("No common ancestors within the recorded generations.");
        return;
    }

    println!("Common ancestors:");
    for summary in &result.common_ancestors {
        println!(
            "  {}  {:.4}%",
            summary.display_name,
            summary.total_contribution_percent()
        );
        for m in &summary.matches {
            println!(
                "    {} x {}  (n1={}, n2={})  {:.4}%",
                m.sire_path,
                m.dam_path,
                m.n1,
                m.n2,
                m.contribution_percent()
            );
        }
    }
}

fn print_trace(events: &[TraceEvent]) {
    let mut compared = 0usize;
    for event in events {
        if let TraceEvent::Compared { matched_by, .. } = event {
            compared += 1;
            // non-matches are only counted; printing every pair drowns
            // the interesting decisions
            if matched_by.is_none() {
                continue;
            }
        }
        if let Ok(line) = serde_json::to_string(event) {
            println!("{}", line);
        }
    }
    println!("{} pairs compared", compared);
}
