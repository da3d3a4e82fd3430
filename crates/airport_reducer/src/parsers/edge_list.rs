use std::path::Path;

use crate::{
    network::{
        airport::{Airport, AirportIdx},
        airport_network::{AirportNetwork, AirportNetworkBuilder},
    },
    parsers::parser::NetworkParser,
};

/// Plain text connection list, one `FROM TO COST` triple per line.
///
/// Airports are created in order of first appearance. A line holding a single
/// code declares an airport without connections. Everything after a `#` is a
/// comment; blank lines are ignored.
pub struct EdgeListParser;

impl NetworkParser for EdgeListParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<AirportNetwork, anyhow::Error> {
        let file_content = std::fs::read_to_string(file)?;
        parse(&file_content)
    }
}

pub fn parse(text: &str) -> Result<AirportNetwork, anyhow::Error> {
    let mut builder = AirportNetworkBuilder::default();

    for (line_number, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [code] => {
                airport_or_insert(&mut builder, code)?;
            }
            [from, to, cost] => {
                let cost: f64 = cost.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid cost on line {line_number}: {cost}")
                })?;
                let from = airport_or_insert(&mut builder, from)?;
                let to = airport_or_insert(&mut builder, to)?;
                builder.add_connection(from, to, cost)?;
            }
            _ => anyhow::bail!("Invalid line {line_number}: {line}"),
        }
    }

    Ok(builder.build())
}

fn airport_or_insert(
    builder: &mut AirportNetworkBuilder,
    code: &str,
) -> Result<AirportIdx, anyhow::Error> {
    match builder.airport_by_code(code) {
        Some(airport_id) => Ok(airport_id),
        None => Ok(builder.add_airport(Airport::new(code))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::data_fixture_path;

    #[test]
    fn test_parse_triangle_fixture() {
        let network = EdgeListParser
            .parse(data_fixture_path("triangle.txt"))
            .unwrap();

        assert_eq!(network.num_airports(), 3);
        assert_eq!(network.num_connections(), 3);
        assert_eq!(network.airport_by_code("A"), Some(AirportIdx::new(0)));

        let tree = network.minimal_spanning_tree().unwrap();
        assert_eq!(tree.total_cost(), 3.0);
    }

    #[test]
    fn test_single_airport_line() {
        let network = parse("# lonely\nZRH\n").unwrap();

        assert_eq!(network.num_airports(), 1);
        assert!(network.minimal_spanning_tree().unwrap().is_empty());
    }

    #[test]
    fn test_trailing_comments() {
        let network = parse("ZRH GVA 1.5 # shuttle\nGVA BSL 2.0#night\n").unwrap();

        assert_eq!(network.num_airports(), 3);
        assert_eq!(network.num_connections(), 2);
        assert_eq!(network.minimal_spanning_tree().unwrap().total_cost(), 3.5);
    }

    #[test]
    fn test_invalid_lines() {
        assert!(parse("ZRH GVA").is_err());
        assert!(parse("ZRH GVA cheap").is_err());
        assert!(parse("ZRH ZRH 1.0").is_err());
    }
}
