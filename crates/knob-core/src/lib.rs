pub mod angle;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod keys;
pub mod value;

pub use angle::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use gesture::*;
pub use keys::*;
pub use value::*;
