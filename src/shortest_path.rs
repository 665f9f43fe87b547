pub mod dijkstra;
pub mod path;
pub mod status;
