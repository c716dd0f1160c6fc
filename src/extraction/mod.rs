//! Locating a named function and splitting its parameter list.

pub mod extractor;
pub mod parser;
pub mod patterns;

pub use extractor::{extract_params, extract_params_from_file, extract_params_with};
pub use parser::parse_param_list;
pub use patterns::{build_pattern, capture_param_group};
