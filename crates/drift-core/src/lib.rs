pub mod blob;
pub mod color;
pub mod constants;
pub mod noise;
pub mod particle;
pub mod theme;

pub use blob::*;
pub use color::*;
pub use constants::*;
pub use noise::*;
pub use particle::*;
pub use theme::*;
