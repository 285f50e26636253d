pub mod object;
pub mod params;
pub mod shape;

pub use object::*;
pub use params::*;
pub use shape::*;
