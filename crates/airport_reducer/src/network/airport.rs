use geo::{Distance, Haversine};

use crate::define_index_newtype;

use super::connection::ConnectionIdx;

define_index_newtype!(AirportIdx, Airport, "airport");

const METERS_PER_KILOMETER: f64 = 1_000.0;

pub struct Airport {
    code: String,
    name: Option<String>,
    location: Option<geo::Point>,
    connections: Vec<ConnectionIdx>,
}

impl Airport {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            location: None,
            connections: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_lat_lon(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(geo::Point::new(lon, lat));
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn lat(&self) -> Option<f64> {
        self.location.map(|point| point.y())
    }

    pub fn lon(&self) -> Option<f64> {
        self.location.map(|point| point.x())
    }

    /// Connections incident to this airport, in insertion order.
    pub fn connections(&self) -> &[ConnectionIdx] {
        &self.connections
    }

    /// Great-circle distance in kilometres, `None` if either airport has no
    /// coordinates.
    pub fn haversine_distance_km(&self, to: &Airport) -> Option<f64> {
        let (from, to) = (self.location?, to.location?);
        Some(Haversine.distance(from, to) / METERS_PER_KILOMETER)
    }

    pub(super) fn push_connection(&mut self, connection: ConnectionIdx) {
        self.connections.push(connection);
    }
}
