pub mod assemble;
pub mod encode;
pub mod error;
pub mod frame;
pub mod impute;
pub mod output;

pub use assemble::{CityDataset, RowFailure, assemble_city};
pub use encode::one_hot_encode;
pub use error::{Result, TransformError};
pub use frame::records_to_frame;
pub use impute::{ColumnFill, FillValue, fill_missing};
pub use output::{combine_frames, write_csv};
