pub mod location;
pub mod query;

pub use location::{AddressBar, LocationState};
pub use query::{canonicalize, decode, encode};
