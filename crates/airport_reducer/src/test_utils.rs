use std::path::PathBuf;

use fxhash::FxHashSet;
use rand::Rng;

use crate::{
    mst::{kruskal::Dsu, spanning_tree::SpanningTree},
    network::{
        airport::{Airport, AirportIdx},
        airport_network::{AirportNetwork, AirportNetworkBuilder},
        connection::ConnectionIdx,
        random_network::random_connected_network,
    },
};

pub fn data_fixture_path(fixture: &str) -> PathBuf {
    let current_working_dir = std::env::current_dir().unwrap();

    current_working_dir
        .join("tests/fixtures/")
        .join(fixture)
        .canonicalize()
        .unwrap()
}

/// Builds a network of `num_airports` airports named `A`, `B`, ... and the
/// given `(from, to, cost)` connections, in order.
pub fn create_network(
    num_airports: usize,
    connections: &[(usize, usize, f64)],
) -> (AirportNetwork, Vec<AirportIdx>, Vec<ConnectionIdx>) {
    let mut builder = AirportNetworkBuilder::default();

    let airports = (0..num_airports)
        .map(|index| {
            let code = format!("{}{}", char::from(b'A' + (index % 26) as u8), index / 26);
            builder.add_airport(Airport::new(code)).unwrap()
        })
        .collect::<Vec<_>>();

    let connections = connections
        .iter()
        .map(|&(from, to, cost)| {
            builder
                .add_connection(airports[from], airports[to], cost)
                .unwrap()
        })
        .collect::<Vec<_>>();

    (builder.build(), airports, connections)
}

pub fn create_random_network<R: Rng>(
    rng: &mut R,
    num_airports: usize,
    extra_connections: usize,
) -> AirportNetwork {
    random_connected_network(rng, num_airports, extra_connections).unwrap()
}

/// Asserts that `tree` is a spanning tree of the subgraph induced by
/// `airports`: the right number of edges, only edges between listed
/// airports, no cycle and a single component.
pub fn assert_spanning_tree(
    network: &AirportNetwork,
    airports: &[AirportIdx],
    tree: &SpanningTree<ConnectionIdx>,
) {
    assert_eq!(tree.len(), airports.len().saturating_sub(1));

    let members = airports.iter().copied().collect::<FxHashSet<_>>();
    let mut dsu = Dsu::new(airports);

    for &connection_id in tree.iter() {
        assert!(connection_id.get() < network.num_connections());

        let (from, to) = network.connection(connection_id).airports();
        assert!(members.contains(&from) && members.contains(&to));
        assert!(dsu.union(from, to), "{connection_id} closes a cycle");
    }

    assert_eq!(dsu.num_components(), 1);

    let expected_cost = tree
        .iter()
        .map(|&connection_id| network.connection(connection_id).cost())
        .sum::<f64>();
    assert!((tree.total_cost() - expected_cost).abs() < 1e-9);
}
