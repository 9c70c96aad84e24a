pub mod filter;
pub mod holiday;
pub mod jurisdiction;

pub use filter::*;
pub use holiday::*;
pub use jurisdiction::*;
