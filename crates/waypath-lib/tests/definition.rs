mod common;

use std::fs;

use tempfile::TempDir;

use common::fixtures_dir;
use waypath_lib::{load_network_definition, sample_network, Error, RouteNetwork};

#[test]
fn ring_fixture_loads_and_routes() {
    let definition =
        load_network_definition(&fixtures_dir().join("ring_network.json")).expect("fixture loads");
    let network = RouteNetwork::from_definition(&definition).expect("fixture builds");

    assert_eq!(network.location_count(), 5);
    assert_eq!(network.route_count(), 10);

    // Both sides of the ring cost 8; the tie resolves to the lower id ("east").
    assert_eq!(
        network.shortest_path("north", "south"),
        Some(vec![
            "North Gate".to_string(),
            "East Market".to_string(),
            "South Pier".to_string(),
        ])
    );
    assert_eq!(network.plan_route("north", "island").unwrap().total_cost, 10.5);
    assert_eq!(network.shortest_path("island", "north"), None);
}

#[test]
fn sample_written_to_disk_round_trips() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("network.json");
    fs::write(&path, sample_network().to_json_string().unwrap()).expect("write definition");

    let loaded = load_network_definition(&path).expect("definition loads");
    assert_eq!(loaded, sample_network());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("create temp dir");
    let err = load_network_definition(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"locations\": [").expect("write definition");

    assert!(matches!(
        load_network_definition(&path),
        Err(Error::Json(_))
    ));
}

#[test]
fn negative_weight_in_definition_is_rejected() {
    let json = r#"{
        "locations": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
        "routes": [{"from": "a", "to": "b", "weight": -2}]
    }"#;
    let definition = waypath_lib::NetworkDefinition::from_json_str(json).unwrap();
    let err = RouteNetwork::from_definition(&definition).unwrap_err();
    assert!(err.to_string().contains("invalid weight -2"));
}
