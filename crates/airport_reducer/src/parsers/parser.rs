use std::path::Path;

use crate::network::airport_network::AirportNetwork;

pub trait NetworkParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<AirportNetwork, anyhow::Error>;
}
