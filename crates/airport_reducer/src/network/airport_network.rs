use fxhash::FxHashMap;
use thiserror::Error;

use crate::{
    mst::{
        error::MstError, prim::MstBuilder, spanning_tree::SpanningTree,
        weighted_graph::WeightedGraph,
    },
    utils::enumerate_idx::EnumerateIdx,
};

use super::{
    airport::{Airport, AirportIdx},
    connection::{Connection, ConnectionIdx, Cost},
};

#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("Airport code {0} is defined more than once")]
    DuplicateAirportCode(String),

    #[error("Unknown airport {0}")]
    UnknownAirport(AirportIdx),

    #[error("Unknown airport code {0}")]
    UnknownAirportCode(String),

    #[error("Connection from {0} to itself is not allowed")]
    SelfLoop(AirportIdx),

    #[error("Connection {from} - {to} has a non comparable cost {cost}")]
    InvalidCost {
        from: AirportIdx,
        to: AirportIdx,
        cost: Cost,
    },

    #[error("Connection {from} - {to} has no cost and no coordinates to derive one")]
    MissingCost { from: String, to: String },
}

/// Airports and the connections between them.
///
/// Airports and connections are addressed by their index, which stays stable
/// for the lifetime of the network.
pub struct AirportNetwork {
    airports: Vec<Airport>,
    connections: Vec<Connection>,
    airports_by_code: FxHashMap<String, AirportIdx>,
}

impl AirportNetwork {
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn airport(&self, airport_id: AirportIdx) -> &Airport {
        &self.airports[airport_id]
    }

    pub fn airport_indices(&self) -> impl Iterator<Item = AirportIdx> + '_ {
        self.airports.iter().enumerate_idx().map(|(index, _)| index)
    }

    pub fn airport_by_code(&self, code: &str) -> Option<AirportIdx> {
        self.airports_by_code.get(code).copied()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection(&self, connection_id: ConnectionIdx) -> &Connection {
        &self.connections[connection_id]
    }

    pub fn num_airports(&self) -> usize {
        self.airports.len()
    }

    pub fn num_connections(&self) -> usize {
        self.connections.len()
    }

    /// Minimum spanning tree over every airport of the network, starting from
    /// the first airport added to the builder.
    pub fn minimal_spanning_tree(&self) -> Result<SpanningTree<ConnectionIdx>, MstError> {
        let airports = self.airport_indices().collect::<Vec<_>>();
        MstBuilder::new(self).minimal_spanning_tree(&airports)
    }
}

impl WeightedGraph for AirportNetwork {
    type Node = AirportIdx;
    type Edge = ConnectionIdx;

    fn contains_node(&self, node: AirportIdx) -> bool {
        node.get() < self.airports.len()
    }

    fn incident_edges(&self, node: AirportIdx) -> impl Iterator<Item = ConnectionIdx> + '_ {
        self.airports[node].connections().iter().copied()
    }

    fn endpoints(&self, edge: ConnectionIdx) -> (AirportIdx, AirportIdx) {
        self.connections[edge].airports()
    }

    fn cost(&self, edge: ConnectionIdx) -> Cost {
        self.connections[edge].cost()
    }

    fn opposite(&self, edge: ConnectionIdx, node: AirportIdx) -> AirportIdx {
        let connection = &self.connections[edge];
        debug_assert!(
            connection.connects(node),
            "{edge} does not connect {node}"
        );

        let (from, to) = connection.airports();
        if from == node { to } else { from }
    }
}

#[derive(Default)]
pub struct AirportNetworkBuilder {
    airports: Vec<Airport>,
    connections: Vec<Connection>,
    airports_by_code: FxHashMap<String, AirportIdx>,
}

impl AirportNetworkBuilder {
    pub fn add_airport(&mut self, airport: Airport) -> Result<AirportIdx, NetworkError> {
        if self.airports_by_code.contains_key(airport.code()) {
            return Err(NetworkError::DuplicateAirportCode(airport.code().to_owned()));
        }

        let airport_id = AirportIdx::new(self.airports.len());
        self.airports_by_code.insert(airport.code().to_owned(), airport_id);
        self.airports.push(airport);

        Ok(airport_id)
    }

    pub fn airport_by_code(&self, code: &str) -> Option<AirportIdx> {
        self.airports_by_code.get(code).copied()
    }

    /// Adds an undirected connection. Parallel connections between the same
    /// pair of airports are kept as distinct connections.
    pub fn add_connection(
        &mut self,
        from: AirportIdx,
        to: AirportIdx,
        cost: Cost,
    ) -> Result<ConnectionIdx, NetworkError> {
        for airport_id in [from, to] {
            if airport_id.get() >= self.airports.len() {
                return Err(NetworkError::UnknownAirport(airport_id));
            }
        }

        if from == to {
            return Err(NetworkError::SelfLoop(from));
        }

        if cost.is_nan() {
            return Err(NetworkError::InvalidCost { from, to, cost });
        }

        let connection_id = ConnectionIdx::new(self.connections.len());
        self.connections.push(Connection::new(from, to, cost));
        self.airports[from].push_connection(connection_id);
        self.airports[to].push_connection(connection_id);

        Ok(connection_id)
    }

    /// Adds a connection whose cost is the great-circle distance in kilometres
    /// between both airports.
    pub fn add_great_circle_connection(
        &mut self,
        from: AirportIdx,
        to: AirportIdx,
    ) -> Result<ConnectionIdx, NetworkError> {
        for airport_id in [from, to] {
            if airport_id.get() >= self.airports.len() {
                return Err(NetworkError::UnknownAirport(airport_id));
            }
        }

        let cost = self.airports[from]
            .haversine_distance_km(&self.airports[to])
            .ok_or_else(|| NetworkError::MissingCost {
                from: self.airports[from].code().to_owned(),
                to: self.airports[to].code().to_owned(),
            })?;

        self.add_connection(from, to, cost)
    }

    pub fn build(self) -> AirportNetwork {
        AirportNetwork {
            airports: self.airports,
            connections: self.connections,
            airports_by_code: self.airports_by_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with_airports(codes: &[&str]) -> (AirportNetworkBuilder, Vec<AirportIdx>) {
        let mut builder = AirportNetworkBuilder::default();
        let ids = codes
            .iter()
            .map(|code| builder.add_airport(Airport::new(*code)).unwrap())
            .collect();
        (builder, ids)
    }

    #[test]
    fn test_connections_are_shared_by_both_airports() {
        let (mut builder, ids) = builder_with_airports(&["ZRH", "GVA", "BSL"]);
        let zrh_gva = builder.add_connection(ids[0], ids[1], 3.0).unwrap();
        let gva_bsl = builder.add_connection(ids[1], ids[2], 4.0).unwrap();
        let network = builder.build();

        assert_eq!(network.airport(ids[0]).connections(), &[zrh_gva]);
        assert_eq!(network.airport(ids[1]).connections(), &[zrh_gva, gva_bsl]);
        assert_eq!(network.airport(ids[2]).connections(), &[gva_bsl]);
        assert_eq!(network.num_connections(), 2);
        assert_eq!(network.airport_by_code("BSL"), Some(ids[2]));
        assert_eq!(network.airport_by_code("LHR"), None);
    }

    #[test]
    fn test_duplicate_airport_code() {
        let (mut builder, _) = builder_with_airports(&["ZRH"]);

        assert_eq!(
            builder.add_airport(Airport::new("ZRH").with_name("Zurich")),
            Err(NetworkError::DuplicateAirportCode("ZRH".to_owned()))
        );
    }

    #[test]
    fn test_rejects_invalid_connections() {
        let (mut builder, ids) = builder_with_airports(&["ZRH", "GVA"]);

        assert_eq!(
            builder.add_connection(ids[0], ids[0], 1.0),
            Err(NetworkError::SelfLoop(ids[0]))
        );
        assert_eq!(
            builder.add_connection(ids[0], AirportIdx::new(7), 1.0),
            Err(NetworkError::UnknownAirport(AirportIdx::new(7)))
        );
        assert!(matches!(
            builder.add_connection(ids[0], ids[1], f64::NAN),
            Err(NetworkError::InvalidCost { .. })
        ));
    }

    #[test]
    fn test_accepts_negative_and_parallel_connections() {
        let (mut builder, ids) = builder_with_airports(&["ZRH", "GVA"]);

        let first = builder.add_connection(ids[0], ids[1], -2.0).unwrap();
        let second = builder.add_connection(ids[1], ids[0], 5.0).unwrap();
        let network = builder.build();

        assert_ne!(first, second);
        assert_eq!(network.connection(first).cost(), -2.0);
        assert_eq!(network.airport(ids[0]).connections().len(), 2);
    }

    #[test]
    fn test_great_circle_connection() {
        let mut builder = AirportNetworkBuilder::default();
        let zrh = builder
            .add_airport(Airport::new("ZRH").with_lat_lon(47.4647, 8.5492))
            .unwrap();
        let gva = builder
            .add_airport(Airport::new("GVA").with_lat_lon(46.2381, 6.1090))
            .unwrap();
        let bsl = builder.add_airport(Airport::new("BSL")).unwrap();

        let connection_id = builder.add_great_circle_connection(zrh, gva).unwrap();
        assert_eq!(
            builder.add_great_circle_connection(zrh, bsl),
            Err(NetworkError::MissingCost {
                from: "ZRH".to_owned(),
                to: "BSL".to_owned()
            })
        );

        let network = builder.build();
        assert!(network.connection(connection_id).cost() > 200.0);
    }

    #[test]
    fn test_weighted_graph_view() {
        let (mut builder, ids) = builder_with_airports(&["ZRH", "GVA"]);
        let connection_id = builder.add_connection(ids[0], ids[1], 7.0).unwrap();
        let network = builder.build();

        assert!(network.contains_node(ids[1]));
        assert!(!network.contains_node(AirportIdx::new(2)));
        assert_eq!(network.opposite(connection_id, ids[0]), ids[1]);
        assert_eq!(network.opposite(connection_id, ids[1]), ids[0]);
        assert_eq!(network.cost(connection_id), 7.0);
        assert_eq!(
            network.incident_edges(ids[1]).collect::<Vec<_>>(),
            vec![connection_id]
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not connect")]
    fn test_opposite_of_foreign_airport() {
        let (mut builder, ids) = builder_with_airports(&["ZRH", "GVA", "BSL"]);
        let connection_id = builder.add_connection(ids[0], ids[1], 7.0).unwrap();
        let network = builder.build();

        network.opposite(connection_id, ids[2]);
    }
}
