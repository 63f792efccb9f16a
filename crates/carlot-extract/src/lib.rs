pub mod blob;
pub mod error;
pub mod extract;
pub mod normalize;

pub use error::{ExtractError, Result};
pub use extract::{RawListing, extract_listing};
pub use normalize::{clean_km_driven, clean_mileage, clean_price};
