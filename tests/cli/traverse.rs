use crate::cli::support::roadnet_with_network;
use predicates::prelude::*;

// ============================================================================
// Exhaustive traversal
// ============================================================================

#[test]
fn test_traverse_applies_file_conditions() {
    roadnet_with_network()
        .args(["traverse", "Addis Ababa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Addis Ababa -> Hawassa -> Mekelle -> Gondar -> Bahir Dar (cost 1205)",
        ))
        .stdout(predicate::str::contains("Visited 5 of 5 cities"));
}

#[test]
fn test_traverse_without_file_conditions() {
    roadnet_with_network()
        .args(["traverse", "Addis Ababa", "--ignore-file-conditions"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Addis Ababa -> Bahir Dar -> Gondar -> Mekelle (cost 990)",
        ))
        .stdout(predicate::str::contains("Visited 4 of 5 cities"));
}

#[test]
fn test_traverse_depth_first_agrees() {
    roadnet_with_network()
        .args(["traverse", "Addis Ababa", "--strategy", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cost 1205)"));
}

#[test]
fn test_traverse_cli_conditions_follow_file_conditions() {
    // Re-open the blocked road; Addis Ababa - Bahir Dar - Gondar - Mekelle -
    // Hawassa now covers every city: 510 + 180 + 350 + 400.
    roadnet_with_network()
        .args([
            "traverse",
            "Addis Ababa",
            "--condition",
            "add:Addis Ababa:Bahir Dar:510",
            "--condition",
            "block:Addis Ababa:Hawassa",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Addis Ababa -> Bahir Dar -> Gondar -> Mekelle -> Hawassa (cost 1440)",
        ));
}

#[test]
fn test_traverse_quiet_prints_route_only() {
    roadnet_with_network()
        .args(["--quiet", "traverse", "Hawassa", "--ignore-file-conditions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cost 1265)"))
        .stdout(predicate::str::contains("Visited").not());
}

#[test]
fn test_traverse_unknown_strategy_exit_code_2() {
    roadnet_with_network()
        .args(["traverse", "Addis Ababa", "--strategy", "greedy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("greedy"));
}

#[test]
fn test_traverse_unknown_strategy_json_error() {
    roadnet_with_network()
        .args([
            "--format",
            "json",
            "traverse",
            "Addis Ababa",
            "--strategy",
            "greedy",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_strategy\""));
}

#[test]
fn test_traverse_malformed_condition_exit_code_2() {
    roadnet_with_network()
        .args(["traverse", "Addis Ababa", "--condition", "close:Gondar:Mekelle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("close"));
}

#[test]
fn test_traverse_condition_unknown_city_exit_code_3() {
    roadnet_with_network()
        .args([
            "--format",
            "json",
            "traverse",
            "Addis Ababa",
            "--condition",
            "block:Gondar:Lalibela",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"node_not_found\""));
}

#[test]
fn test_traverse_unknown_start_stays_put() {
    roadnet_with_network()
        .args(["traverse", "Lalibela"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lalibela (cost 0)"));
}

#[test]
fn test_traverse_json() {
    let output = roadnet_with_network()
        .args(["--format", "json", "traverse", "Addis Ababa"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cost"], 1205);
    assert_eq!(json["cities"], 5);
    assert_eq!(
        json["conditions"],
        serde_json::json!([
            "block:Addis Ababa:Bahir Dar",
            "update:Gondar:Mekelle:350",
            "add:Hawassa:Mekelle:400"
        ])
    );
}

#[test]
fn test_traverse_dot_renders_edited_network() {
    roadnet_with_network()
        .args(["--format", "dot", "traverse", "Addis Ababa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"Gondar\" -- \"Mekelle\" [label=\"350\", color=red, penwidth=2];",
        ))
        .stdout(predicate::str::contains("\"Addis Ababa\" -- \"Bahir Dar\"").not());
}

#[test]
fn test_traverse_cost_beyond_u64_range() {
    // 510 + 180 + u64::MAX
    roadnet_with_network()
        .args([
            "traverse",
            "Addis Ababa",
            "--ignore-file-conditions",
            "--condition",
            "update:Gondar:Mekelle:18446744073709551615",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cost 18446744073709552305)"));
}

#[test]
fn test_traverse_json_cost_beyond_u64_range() {
    roadnet_with_network()
        .args([
            "--format",
            "json",
            "traverse",
            "Addis Ababa",
            "--ignore-file-conditions",
            "--condition",
            "update:Gondar:Mekelle:18446744073709551615",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cost\": 18446744073709552305"));
}

#[test]
fn test_traverse_strategy_checked_before_conditions() {
    roadnet_with_network()
        .args([
            "--format",
            "json",
            "traverse",
            "Addis Ababa",
            "--strategy",
            "greedy",
            "--condition",
            "block:Gondar:Lalibela",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_strategy\""));
}
