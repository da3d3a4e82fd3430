pub mod airport;
pub mod airport_network;
pub mod connection;
pub mod random_network;
