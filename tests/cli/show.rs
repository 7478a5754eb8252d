use crate::cli::support::{roadnet, roadnet_with_network};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_show_lists_adjacency() {
    roadnet_with_network()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Road Network of Ethiopian Cities"))
        .stdout(predicate::str::contains(
            "Addis Ababa: Bahir Dar (510), Hawassa (275)",
        ))
        .stdout(predicate::str::contains("Mekelle: Gondar (300)"));
}

#[test]
fn test_show_with_condition() {
    roadnet_with_network()
        .args(["show", "--condition", "block:Addis Ababa:Hawassa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hawassa: (no roads)"))
        .stdout(predicate::str::contains("Addis Ababa: Bahir Dar (510)\n"));
}

#[test]
fn test_show_does_not_apply_file_conditions() {
    roadnet_with_network()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gondar (300)"))
        .stdout(predicate::str::contains("(350)").not());
}

#[test]
fn test_show_json_round_trips_network() {
    let output = roadnet_with_network()
        .args(["--format", "json", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cities"].as_array().unwrap().len(), 5);
    assert_eq!(json["roads"]["Gondar"][1]["to"], "Mekelle");
    assert_eq!(json["roads"]["Gondar"][1]["distance"], 300);
    assert!(json.get("conditions").is_none());
}

#[test]
fn test_show_dot() {
    roadnet_with_network()
        .args(["--format", "dot", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Hawassa\";"))
        .stdout(predicate::str::contains("color=red").not());
}

#[test]
fn test_show_output_writes_edited_network() {
    let dir = tempdir().unwrap();
    let written = dir.path().join("closed.toml");

    roadnet_with_network()
        .args(["show", "--condition", "block:Addis Ababa:Bahir Dar", "--output"])
        .arg(&written)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    // The block is part of the roads now; the scenario is not carried over.
    roadnet()
        .arg("--network")
        .arg(&written)
        .args(["traverse", "Addis Ababa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Addis Ababa -> Hawassa (cost 275)"))
        .stdout(predicate::str::contains("Visited 2 of 5 cities"));
}
