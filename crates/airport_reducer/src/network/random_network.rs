use rand::Rng;

use super::{
    airport::{Airport, AirportIdx},
    airport_network::{AirportNetwork, AirportNetworkBuilder, NetworkError},
    connection::Cost,
};

pub const MIN_RANDOM_COST: Cost = -10.0;
pub const MAX_RANDOM_COST: Cost = 100.0;

/// Generates a connected network: a random tree over `num_airports` airports
/// plus `extra_connections` random connections on top of it.
///
/// Costs are drawn uniformly from `[MIN_RANDOM_COST, MAX_RANDOM_COST)` and
/// rounded to two decimals.
pub fn random_connected_network<R: Rng + ?Sized>(
    rng: &mut R,
    num_airports: usize,
    extra_connections: usize,
) -> Result<AirportNetwork, NetworkError> {
    let mut builder = AirportNetworkBuilder::default();

    let airports = (0..num_airports)
        .map(|index| builder.add_airport(Airport::new(format!("AP{index}"))))
        .collect::<Result<Vec<_>, _>>()?;

    for index in 1..airports.len() {
        let parent = airports[rng.random_range(0..index)];
        builder.add_connection(airports[index], parent, random_cost(rng))?;
    }

    if airports.len() > 1 {
        for _ in 0..extra_connections {
            let (from, to) = random_pair(rng, &airports);
            builder.add_connection(from, to, random_cost(rng))?;
        }
    }

    Ok(builder.build())
}

fn random_pair<R: Rng + ?Sized>(rng: &mut R, airports: &[AirportIdx]) -> (AirportIdx, AirportIdx) {
    let from = rng.random_range(0..airports.len());
    // Skip `from` so both ends are distinct.
    let mut to = rng.random_range(0..airports.len() - 1);
    if to >= from {
        to += 1;
    }

    (airports[from], airports[to])
}

fn random_cost<R: Rng + ?Sized>(rng: &mut R) -> Cost {
    let cost = rng.random_range(MIN_RANDOM_COST..MAX_RANDOM_COST);
    (cost * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::mst::kruskal::kruskal_spanning_tree;

    #[test]
    fn test_random_network_is_connected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let network = random_connected_network(&mut rng, 25, 10).unwrap();
        let airports = network.airport_indices().collect::<Vec<_>>();

        assert_eq!(network.num_airports(), 25);
        assert_eq!(network.num_connections(), 24 + 10);
        assert!(kruskal_spanning_tree(&network, &airports).is_ok());
    }

    #[test]
    fn test_random_costs_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(2);
        let network = random_connected_network(&mut rng, 10, 30).unwrap();

        for connection in network.connections() {
            assert!(connection.cost() >= MIN_RANDOM_COST);
            assert!(connection.cost() <= MAX_RANDOM_COST);
            let (from, to) = connection.airports();
            assert_ne!(from, to);
        }
    }

    #[test]
    fn test_single_airport_ignores_extra_connections() {
        let mut rng = SmallRng::seed_from_u64(3);
        let network = random_connected_network(&mut rng, 1, 5).unwrap();

        assert_eq!(network.num_airports(), 1);
        assert_eq!(network.num_connections(), 0);
    }
}
