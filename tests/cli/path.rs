use crate::cli::support::roadnet_with_network;
use predicates::prelude::*;

// ============================================================================
// Point-to-point search
// ============================================================================

#[test]
fn test_path_depth_first() {
    roadnet_with_network()
        .args(["path", "Addis Ababa", "Mekelle", "--strategy", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Addis Ababa -> Bahir Dar -> Gondar -> Mekelle (cost 990)",
        ))
        .stdout(predicate::str::contains("Path length: 3 hops"));
}

#[test]
fn test_path_breadth_first_is_default() {
    roadnet_with_network()
        .args(["path", "Hawassa", "Mekelle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hawassa -> Addis Ababa -> Bahir Dar -> Gondar -> Mekelle (cost 1265)",
        ));
}

#[test]
fn test_path_ignores_file_conditions() {
    // The scenario blocks Addis Ababa - Bahir Dar; path search never applies it.
    roadnet_with_network()
        .args(["path", "Addis Ababa", "Bahir Dar"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Addis Ababa -> Bahir Dar (cost 510)",
        ))
        .stdout(predicate::str::contains("Path length: 1 hop\n"));
}

#[test]
fn test_path_to_self() {
    roadnet_with_network()
        .args(["path", "Gondar", "Gondar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gondar (cost 0)"))
        .stdout(predicate::str::contains("Path length: 0 hops"));
}

#[test]
fn test_path_unknown_city_finds_nothing() {
    roadnet_with_network()
        .args(["path", "Addis Ababa", "Dire Dawa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No path found from Addis Ababa to Dire Dawa",
        ));
}

#[test]
fn test_path_unknown_strategy_finds_nothing() {
    roadnet_with_network()
        .args(["path", "Addis Ababa", "Mekelle", "--strategy", "greedy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found"));
}

#[test]
fn test_path_json() {
    let output = roadnet_with_network()
        .args([
            "--format",
            "json",
            "path",
            "Addis Ababa",
            "Mekelle",
            "--strategy",
            "depth-first",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 990);
    assert_eq!(json["path_length"], 3);
    assert_eq!(
        json["path"],
        serde_json::json!(["Addis Ababa", "Bahir Dar", "Gondar", "Mekelle"])
    );
}

#[test]
fn test_path_json_not_found() {
    let output = roadnet_with_network()
        .args(["--format", "json", "path", "Addis Ababa", "Nowhere"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert!(json["path"].is_null());
    assert!(json["cost"].is_null());
}

#[test]
fn test_path_dot_highlights_route() {
    roadnet_with_network()
        .args(["--format", "dot", "path", "Addis Ababa", "Gondar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "graph \"Road Network of Ethiopian Cities\" {",
        ))
        .stdout(predicate::str::contains(
            "\"Bahir Dar\" -- \"Gondar\" [label=\"180\", color=red, penwidth=2];",
        ))
        .stdout(predicate::str::contains(
            "\"Addis Ababa\" -- \"Hawassa\" [label=\"275\"];",
        ));
}
