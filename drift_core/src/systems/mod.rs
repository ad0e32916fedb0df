pub mod barrier;
pub mod movement;

pub use barrier::*;
pub use movement::*;
