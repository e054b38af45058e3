pub mod config;
pub mod distance;
pub mod dsu;
pub mod error;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod planner;
pub mod summary;

pub use config::Config;
pub use error::CircuitError;
pub use parser::JunctionBox;
