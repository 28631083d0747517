mod common;

use common::{sample, sample_id, sample_name};
use waypath_lib::{Error, RouteNetwork};

fn names(network: &RouteNetwork, letters: &str) -> Vec<String> {
    letters.chars().map(|l| sample_name(network, l)).collect()
}

fn path_cost(network: &RouteNetwork, letters: &str) -> f64 {
    let ids: Vec<_> = letters.chars().map(sample_id).collect();
    ids.windows(2)
        .map(|pair| {
            network
                .route_weight(pair[0], pair[1])
                .expect("edge exists along path")
        })
        .sum()
}

#[test]
fn a_to_h_follows_the_plaza_corridor() {
    let network = sample();
    let route = network
        .shortest_path(sample_id('A'), sample_id('H'))
        .expect("route exists");

    assert_eq!(route, names(&network, "ABCDH"));
    assert_eq!(path_cost(&network, "ABCDH"), 80.0);
    assert_eq!(path_cost(&network, "AEFGH"), 113.0);
}

#[test]
fn a_to_i_detours_through_the_park() {
    // A,B,C,G,I costs 155; A,E,F,G,I costs 118 and is the true minimum.
    let network = sample();
    let plan = network
        .plan_route(sample_id('A'), sample_id('I'))
        .expect("route exists");

    assert_eq!(plan.names(), names(&network, "AEFGI"));
    assert_eq!(plan.total_cost, 118.0);
    assert_eq!(path_cost(&network, "ABCGI"), 155.0);
    assert_eq!(plan.hop_count(), 4);
}

#[test]
fn mirrored_route_is_usable_both_ways() {
    let network = sample();
    assert_eq!(
        network.shortest_path(sample_id('B'), sample_id('A')),
        Some(names(&network, "BA"))
    );
    assert_eq!(
        network.plan_route(sample_id('B'), sample_id('A')).unwrap().total_cost,
        30.0
    );
}

#[test]
fn one_way_routes_are_not_reversible() {
    let network = sample();
    // A -> E is one-way and nothing else leads back to A from E.
    assert_eq!(network.shortest_path(sample_id('E'), sample_id('A')), None);
    // D -> H is one-way; H can only reach the G/F/E/I cluster.
    assert_eq!(network.shortest_path(sample_id('H'), sample_id('D')), None);
    assert_eq!(
        network.shortest_path(sample_id('H'), sample_id('E')),
        Some(names(&network, "HGFE"))
    );
}

#[test]
fn start_equals_goal_returns_single_name() {
    let network = sample();
    assert_eq!(
        network.shortest_path(sample_id('C'), sample_id('C')),
        Some(names(&network, "C"))
    );
}

#[test]
fn unknown_identifier_is_not_found() {
    let network = sample();
    assert_eq!(network.shortest_path("nonexistent-id", "1234"), None);
    assert_eq!(network.shortest_path("1234", "nonexistent-id"), None);

    let err = network
        .plan_route("nonexistent-id", "1234")
        .expect_err("unknown start");
    assert!(matches!(err, Error::UnknownLocation { .. }));
}

#[test]
fn unreachable_goal_reports_route_not_found() {
    let network = sample();
    let err = network
        .plan_route(sample_id('I'), sample_id('A'))
        .expect_err("I has no outgoing routes");
    assert_eq!(
        err.to_string(),
        format!("no route found between {} and {}", sample_id('I'), sample_id('A'))
    );
}

#[test]
fn repeated_queries_are_identical() {
    let network = sample();
    let first = network.plan_route(sample_id('A'), sample_id('G')).unwrap();
    for _ in 0..10 {
        assert_eq!(network.plan_route(sample_id('A'), sample_id('G')).unwrap(), first);
    }
}

#[test]
fn listing_matches_definition_order() {
    let network = sample();
    let listing = network.list_locations();
    let ids: Vec<_> = listing.iter().map(|entry| entry.id.as_str()).collect();
    let expected: Vec<_> = "ABCDEFGHI".chars().map(sample_id).collect();
    assert_eq!(ids, expected);
    assert_eq!(listing[0].index, 1);
    assert_eq!(listing[8].index, 9);
}
