//! Parameter extraction entry points.
//!
//! `extract_params` validates its inputs in a fixed order and fails on the
//! first violated check:
//!
//! 1. `dialect` is a recognized token (only when options arrive unvalidated,
//!    see [`extract_params_with`])
//! 2. `contents` is text, 3. and non-empty
//! 4. `name` is text, 5. non-empty, 6. and free of whitespace
//! 7. `contents` contains `name` as a substring
//!
//! Once validation passes, a pattern that finds nothing is not an error: the
//! result is simply empty.
//!
//! # Usage
//!
//! ```rust
//! use fn_params::{extract_params, Dialect, ExtractOptions, ParamEntry};
//!
//! let opts = ExtractOptions::new()
//!     .with_dialect(Dialect::TypeScript)
//!     .with_include_types(true);
//! let params = extract_params("function config(x: int) {}", "config", &opts)?;
//!
//! assert_eq!(
//!     params,
//!     vec![ParamEntry::Typed { name: "x".into(), type_annotation: Some("int".into()) }]
//! );
//! # Ok::<(), fn_params::Error>(())
//! ```

use crate::config::OptionsConfig;
use crate::core::{Error, ExtractOptions, ParamEntry, Result, SourceText};
use crate::extraction::parser::parse_param_list;
use crate::extraction::patterns::{build_pattern, capture_param_group};
use std::path::Path;
use tracing::{debug, debug_span};

/// Extract the parameter list of function `name` from `contents`.
pub fn extract_params<C, N>(
    contents: &C,
    name: &N,
    options: &ExtractOptions,
) -> Result<Vec<ParamEntry>>
where
    C: SourceText + ?Sized,
    N: SourceText + ?Sized,
{
    let contents = contents
        .as_text()
        .ok_or_else(|| Error::type_mismatch("contents"))?;
    if contents.is_empty() {
        return Err(Error::invalid_argument("contents", "be non-empty string"));
    }

    let name = name.as_text().ok_or_else(|| Error::type_mismatch("name"))?;
    validate_name(name)?;

    if !contents.contains(name) {
        return Err(Error::NotFound {
            name: name.to_string(),
        });
    }

    let _span = debug_span!("extract_params", name, dialect = ?options.dialect).entered();

    let regex = build_pattern(name, options)?;
    let Some(captured) = capture_param_group(&regex, contents) else {
        debug!("pattern did not match; returning no parameters");
        return Ok(Vec::new());
    };

    let include_types = options.emits_typed_entries();
    let params = parse_param_list(captured, options.dialect, include_types);
    debug!(count = params.len(), include_types, "extracted parameters");
    Ok(params)
}

/// Like [`extract_params`], taking options that still need validation.
///
/// The dialect token is checked before anything else.
pub fn extract_params_with<C, N>(
    contents: &C,
    name: &N,
    config: &OptionsConfig,
) -> Result<Vec<ParamEntry>>
where
    C: SourceText + ?Sized,
    N: SourceText + ?Sized,
{
    let options = ExtractOptions::try_from(config)?;
    extract_params(contents, name, &options)
}

/// Read `path` and extract `name`'s parameters from it.
///
/// Content that is not valid UTF-8 is a `contents` type mismatch.
pub fn extract_params_from_file(
    path: &Path,
    name: &str,
    options: &ExtractOptions,
) -> Result<Vec<ParamEntry>> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source file");
    extract_params(bytes.as_slice(), name, options)
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_argument("name", "be non-empty string"));
    }
    if name.chars().any(is_js_whitespace) {
        return Err(Error::invalid_argument("name", "not contain whitespace"));
    }
    Ok(())
}

/// The ECMAScript `\s` class: Unicode White_Space minus NEL, plus the BOM
fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dialect, ErrorKind};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn js() -> ExtractOptions {
        ExtractOptions::new()
    }

    #[test]
    fn test_non_text_contents() {
        let err = extract_params(&json!(null), "config", &js()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "Expected contents to be a string");
    }

    #[test]
    fn test_non_text_name() {
        let err = extract_params("fileContents", &json!(7), &js()).unwrap_err();
        assert_eq!(err.to_string(), "Expected name to be a string");
    }

    #[test]
    fn test_contents_checked_before_name() {
        let err = extract_params("", "", &js()).unwrap_err();
        assert_eq!(err.to_string(), "Expected contents to be non-empty string");
    }

    #[test]
    fn test_name_validation_order() {
        let err = extract_params("fileContents", "", &js()).unwrap_err();
        assert_eq!(err.to_string(), "Expected name to be non-empty string");

        for name in [" ", "\t", "\n", "a b", "a\u{00a0}b"] {
            let err = extract_params("fileContents a b", name, &js()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "name {:?}", name);
        }
    }

    #[test]
    fn test_whitespace_follows_ecmascript_class() {
        let err = extract_params("function a\u{feff}b() {}", "a\u{feff}b", &js()).unwrap_err();
        assert_eq!(err.to_string(), "Expected name to not contain whitespace");

        // NEL is not in the class, so the name is searched for normally
        let params = extract_params("function a\u{0085}b(x) {}", "a\u{0085}b", &js()).unwrap();
        assert_eq!(params, vec![ParamEntry::from("x")]);
    }

    #[test]
    fn test_containment_is_substring() {
        // "file" occurs inside "fileContents"; validation passes, match fails
        assert!(extract_params("fileContents", "file", &js())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_missing_name() {
        let err = extract_params("fileContents", "funcName", &js()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "Expected function funcName to be in contents"
        );
    }

    #[test]
    fn test_pattern_errors_come_after_validation() {
        let opts = js().with_custom_pattern("(");
        let err = extract_params("abc", "zzz", &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = extract_params("abc", "abc", &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPattern);
    }

    #[test]
    fn test_include_types_ignored_outside_typescript() {
        let opts = js().with_include_types(true);
        let params = extract_params("function f(a: number) {}", "f", &opts).unwrap();
        assert_eq!(params, vec![ParamEntry::from("a: number")]);
    }

    #[test]
    fn test_invalid_dialect_reported_first() {
        let config = OptionsConfig {
            dialect: Some("english".into()),
            ..Default::default()
        };
        let err = extract_params_with(&json!(1), "", &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOption);
    }

    #[test]
    fn test_extract_with_raw_options() {
        let config = OptionsConfig {
            dialect: Some("arrow".into()),
            ..Default::default()
        };
        let params = extract_params_with("config = (x, y) ->", "config", &config).unwrap();
        assert_eq!(params, vec![ParamEntry::from("x"), ParamEntry::from("y")]);
    }

    #[test]
    fn test_first_match_wins() {
        let contents = "function f(a) {}\nfunction f(b, c) {}";
        let params = extract_params(contents, "f", &js().with_dialect(Dialect::TypeScript));
        assert_eq!(params.unwrap(), vec![ParamEntry::from("a")]);
    }
}
