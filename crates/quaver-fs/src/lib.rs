mod error;
mod relocate;

pub use error::{Error, Result};
pub use relocate::{relocate, relocate_into, unique_file_name};
