pub mod paths;
pub mod text;

pub use paths::*;
pub use text::*;
