pub mod http;
pub mod traits;

pub use http::{HttpHolidaySource, DEFAULT_API_URL};
pub use traits::{ClientError, ClientResult, HolidaySource};
