// Data models (structs)
pub mod settings;
pub mod trainer;

pub use settings::*;
pub use trainer::*;
