pub mod edge_list;
pub mod json;
pub mod parser;
