pub mod dist;
pub mod error;
pub mod path;
pub mod replication;
pub mod scenario;
pub mod topo;

pub use error::{Result, SimError};

#[cfg(test)]
mod test;
