pub mod coordinates;
pub mod details;
pub mod location;
pub mod macros;
pub mod sky;
pub mod time;


pub use coordinates::*;
pub use details::*;
pub use location::*;
pub use sky::*;
pub use time::*;
