use crate::define_index_newtype;

use super::airport::AirportIdx;

define_index_newtype!(ConnectionIdx, Connection, "connection");

pub type Cost = f64;

/// An undirected, weighted link between two distinct airports.
#[derive(Debug, Clone)]
pub struct Connection {
    airports: (AirportIdx, AirportIdx),
    cost: Cost,
}

impl Connection {
    pub(super) fn new(from: AirportIdx, to: AirportIdx, cost: Cost) -> Self {
        Self {
            airports: (from, to),
            cost,
        }
    }

    pub fn airports(&self) -> (AirportIdx, AirportIdx) {
        self.airports
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn connects(&self, airport: AirportIdx) -> bool {
        self.airports.0 == airport || self.airports.1 == airport
    }
}
