//! Spoken-form readers for numeric, date, and time tokens

mod datetime;
mod number;

pub use datetime::{DateReader, TimeReader};
pub use number::NumberReader;
