use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    mst::{mst_params::MstParams, spanning_tree::SpanningTree},
    network::{
        airport::Airport,
        airport_network::{AirportNetwork, AirportNetworkBuilder, NetworkError},
        connection::{Connection, ConnectionIdx, Cost},
    },
};

pub trait FromNetwork<T> {
    fn from_network(value: T, network: &AirportNetwork) -> Self;
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "AirportNetwork")]
pub struct JsonAirportNetwork {
    pub airports: Vec<JsonAirport>,

    #[serde(default)]
    pub connections: Vec<JsonConnection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<MstParams>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Airport")]
pub struct JsonAirport {
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `[lat, lon]` in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
}

impl FromNetwork<&Airport> for JsonAirport {
    fn from_network(value: &Airport, _network: &AirportNetwork) -> Self {
        JsonAirport {
            code: value.code().to_owned(),
            name: value.name().map(str::to_owned),
            coordinates: value.lat().zip(value.lon()).map(|(lat, lon)| [lat, lon]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Connection")]
pub struct JsonConnection {
    pub from: String,
    pub to: String,

    /// Derived from the great-circle distance in kilometres when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
}

impl FromNetwork<&Connection> for JsonConnection {
    fn from_network(value: &Connection, network: &AirportNetwork) -> Self {
        let (from, to) = value.airports();
        JsonConnection {
            from: network.airport(from).code().to_owned(),
            to: network.airport(to).code().to_owned(),
            cost: Some(value.cost()),
        }
    }
}

impl From<&AirportNetwork> for JsonAirportNetwork {
    fn from(network: &AirportNetwork) -> Self {
        JsonAirportNetwork {
            airports: network
                .airports()
                .iter()
                .map(|airport| JsonAirport::from_network(airport, network))
                .collect(),
            connections: network
                .connections()
                .iter()
                .map(|connection| JsonConnection::from_network(connection, network))
                .collect(),
            params: None,
        }
    }
}

impl JsonAirportNetwork {
    #[instrument(skip_all, level = "debug")]
    pub fn build_network(&self) -> Result<AirportNetwork, NetworkError> {
        let mut builder = AirportNetworkBuilder::default();

        for airport in &self.airports {
            let mut network_airport = Airport::new(airport.code.clone());

            if let Some(name) = &airport.name {
                network_airport = network_airport.with_name(name.clone());
            }

            if let Some([lat, lon]) = airport.coordinates {
                network_airport = network_airport.with_lat_lon(lat, lon);
            }

            builder.add_airport(network_airport)?;
        }

        for connection in &self.connections {
            let from = builder
                .airport_by_code(&connection.from)
                .ok_or_else(|| NetworkError::UnknownAirportCode(connection.from.clone()))?;
            let to = builder
                .airport_by_code(&connection.to)
                .ok_or_else(|| NetworkError::UnknownAirportCode(connection.to.clone()))?;

            match connection.cost {
                Some(cost) => builder.add_connection(from, to, cost)?,
                None => builder.add_great_circle_connection(from, to)?,
            };
        }

        Ok(builder.build())
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "SpanningTree")]
pub struct JsonSpanningTree {
    pub total_cost: Cost,
    pub connections: Vec<JsonConnection>,
}

impl FromNetwork<&SpanningTree<ConnectionIdx>> for JsonSpanningTree {
    fn from_network(value: &SpanningTree<ConnectionIdx>, network: &AirportNetwork) -> Self {
        let mut connections = value
            .iter()
            .map(|&connection_id| {
                JsonConnection::from_network(network.connection(connection_id), network)
            })
            .collect::<Vec<_>>();

        // The tree is unordered, sort for stable output.
        connections.sort_by(|a, b| {
            (&a.from, &a.to)
                .cmp(&(&b.from, &b.to))
                .then_with(|| a.cost.unwrap_or_default().total_cmp(&b.cost.unwrap_or_default()))
        });

        JsonSpanningTree {
            total_cost: value.total_cost(),
            connections,
        }
    }
}
