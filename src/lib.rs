//! Classic American soundex: maps an English word to a four character code
//! (`Robert` → `R163`) shared by words that sound alike.

pub mod cli;
mod code;
mod encoder;
mod error;
mod letters;

pub use code::{CODE_LENGTH, Code};
pub use encoder::encode;
pub use error::{Error, Result};
pub use letters::{DigitClass, InvalidDigitClass, classify, is_separator, is_valid_classification};
