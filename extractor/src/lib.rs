pub mod errors;
pub mod kml;
pub mod markers;

mod extract;
mod types;

pub use errors::{ExtractionError, Field, LoadError};
pub use extract::{extract, extract_all};
pub use types::{AddressStyle, ExtractOptions, Placemark, Shop};
