//! Shared fixtures for `waypath-lib` integration tests.

use std::path::PathBuf;

use waypath_lib::{sample_network, Coordinates, RouteNetwork};

/// Path to fixtures directory shared by the workspace tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Identifier of the sample location labelled `letter` (`'A'..='I'`).
#[allow(dead_code)]
pub fn sample_id(letter: char) -> &'static str {
    match letter {
        'A' => "1234",
        'B' => "1874",
        'C' => "8904",
        'D' => "8023",
        'E' => "0934",
        'F' => "7321",
        'G' => "7653",
        'H' => "8752",
        'I' => "6948",
        other => panic!("no sample location labelled {other}"),
    }
}

/// Display name of the sample location labelled `letter`.
#[allow(dead_code)]
pub fn sample_name(network: &RouteNetwork, letter: char) -> String {
    network
        .find_by_id(sample_id(letter))
        .expect("sample location exists")
        .name()
        .to_string()
}

/// The built-in sample network, fully populated.
#[allow(dead_code)]
pub fn sample() -> RouteNetwork {
    RouteNetwork::from_definition(&sample_network()).expect("sample network builds")
}

/// Network with one location per id and no routes; names are the ids in upper case.
#[allow(dead_code)]
pub fn bare_network(ids: &[&str]) -> RouteNetwork {
    let mut network = RouteNetwork::new();
    for id in ids {
        network
            .add_location(*id, id.to_uppercase(), "", Coordinates::default())
            .expect("unique id");
    }
    network
}
