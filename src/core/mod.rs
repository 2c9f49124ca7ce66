// Core parsing exports
pub mod error;
pub mod extractor;
pub mod parser;
pub mod scanner;

pub use error::NavtexError;
pub use extractor::{MessageExtractor, START_SENTINEL, END_SENTINEL};
pub use parser::NavtexParser;
pub use scanner::{CoordinateScanner, CoordinateGrammar};
