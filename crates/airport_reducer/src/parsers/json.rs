use std::{fs::File, io::BufReader, path::Path};

use crate::{
    json::types::JsonAirportNetwork, network::airport_network::AirportNetwork,
    parsers::parser::NetworkParser,
};

pub struct JsonNetworkParser;

impl JsonNetworkParser {
    pub fn read<P: AsRef<Path>>(&self, file: P) -> Result<JsonAirportNetwork, anyhow::Error> {
        let reader = BufReader::new(File::open(file)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl NetworkParser for JsonNetworkParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<AirportNetwork, anyhow::Error> {
        Ok(self.read(file)?.build_network()?)
    }
}
