/// Number of closest pairs the puzzle connects.
pub const DEFAULT_CONNECTIONS: usize = 1000;

/// How many of the largest circuits get multiplied together.
pub const LARGEST_CIRCUITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Closest pairs to connect before summarizing.
    pub connections: usize,
}

impl Config {
    pub fn with_connections(connections: usize) -> Self {
        Self { connections }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connections: DEFAULT_CONNECTIONS,
        }
    }
}
