//! Minimum spanning trees over networks of airports and the connections
//! between them.
//!
//! ```
//! use airport_reducer::network::{
//!     airport::Airport, airport_network::AirportNetworkBuilder,
//! };
//!
//! let mut builder = AirportNetworkBuilder::default();
//! let zrh = builder.add_airport(Airport::new("ZRH")).unwrap();
//! let gva = builder.add_airport(Airport::new("GVA")).unwrap();
//! let bsl = builder.add_airport(Airport::new("BSL")).unwrap();
//! builder.add_connection(zrh, gva, 1.0).unwrap();
//! builder.add_connection(gva, bsl, 2.0).unwrap();
//! builder.add_connection(zrh, bsl, 3.0).unwrap();
//!
//! let network = builder.build();
//! let tree = network.minimal_spanning_tree().unwrap();
//! assert_eq!(tree.total_cost(), 3.0);
//! ```

pub mod json;
pub mod mst;
pub mod network;
pub mod parsers;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
