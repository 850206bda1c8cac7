pub mod bmi;
pub mod error;
pub mod profile;

pub use error::{Error, Result};
