//! Extract the formal parameter list of a named function from source text.
//!
//! Three dialects are recognized: JavaScript-style `function name(...)`
//! declarations, CoffeeScript-style `name = (...) ->` assignments, and
//! TypeScript declarations whose parameters may carry `: type` annotations.
//! Matching is pattern based, not a full parse; the capture ends at the first
//! `)` so default values containing parentheses are not supported.

pub mod cli;
pub mod config;
pub mod core;
pub mod extraction;
pub mod output;

// Re-export commonly used types
pub use crate::core::{Dialect, Error, ErrorKind, ExtractOptions, ParamEntry, Result, SourceText};

pub use crate::config::{FnParamsConfig, OptionsConfig, OutputFormat};

pub use crate::extraction::{
    build_pattern, extract_params, extract_params_from_file, extract_params_with,
    parse_param_list,
};

pub use crate::output::{render, FunctionParams};
