pub mod augmentation;
pub mod ford_fulkerson;
pub mod status;
