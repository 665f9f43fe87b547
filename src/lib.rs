pub mod errors;
pub mod input;
pub mod maximum_flow;
pub mod network;
pub mod shortest_path;
