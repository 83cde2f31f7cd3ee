pub mod reports;
pub mod source;
pub mod tester;

pub use source::{DirSource, SourceError};
pub use tester::*;
