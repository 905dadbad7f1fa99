pub mod recommendation;
pub mod stress_level;

pub use recommendation::*;
pub use stress_level::*;
