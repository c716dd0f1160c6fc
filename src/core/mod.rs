pub mod errors;
pub mod text;
mod types;

pub use errors::{Error, ErrorKind, Result};
pub use text::SourceText;
pub use types::{Dialect, ExtractOptions, ParamEntry};
