use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::errors::Error;

/// Source dialect a function declaration is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// `function name(a, b) { ... }`
    JavaScript,
    /// `name = (a, b) ->`
    CoffeeScript,
    /// `function name(a: T, b: U) { ... }`
    TypeScript,
}

/// Template applied to the escaped function name to find its parameter group.
///
/// The single capture group spans the shortest text between the first `(` and
/// the next `)`, so default values containing parentheses are cut short.
const FUNCTION_TEMPLATE: &str = r"function\s+{name}\s*\(([\s\S]*?)\)";
const ASSIGNMENT_TEMPLATE: &str = r"{name}\s*=\s*\(([\s\S]*?)\)";

impl Dialect {
    /// Canonical option token
    pub fn token(&self) -> &'static str {
        match self {
            Dialect::JavaScript => "js",
            Dialect::CoffeeScript => "coffee",
            Dialect::TypeScript => "ts",
        }
    }

    /// Pattern template with a `{name}` placeholder
    pub fn default_template(&self) -> &'static str {
        match self {
            Dialect::JavaScript | Dialect::TypeScript => FUNCTION_TEMPLATE,
            Dialect::CoffeeScript => ASSIGNMENT_TEMPLATE,
        }
    }

    /// Only the typed dialect splits `name: type` segments
    pub fn splits_type_annotations(&self) -> bool {
        matches!(self, Dialect::TypeScript)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        static EXTENSION_MAP: &[(&[&str], Dialect)] = &[
            (&["js", "jsx", "mjs", "cjs"], Dialect::JavaScript),
            (&["coffee", "litcoffee"], Dialect::CoffeeScript),
            (&["ts", "tsx", "mts", "cts"], Dialect::TypeScript),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, dialect)| *dialect)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "js" | "function" => Ok(Dialect::JavaScript),
            "coffee" | "arrow" => Ok(Dialect::CoffeeScript),
            "ts" | "typed" => Ok(Dialect::TypeScript),
            _ => Err(Error::InvalidOption {
                option: "dialect",
                expectation: "'js', 'coffee', or 'ts'",
            }),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.token().to_string()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single parsed parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamEntry {
    /// Bare trimmed parameter name
    Name(String),
    /// Name plus its annotation, `None` when the parameter carried no `:`
    Typed {
        name: String,
        #[serde(rename = "type")]
        type_annotation: Option<String>,
    },
}

impl ParamEntry {
    pub fn name(&self) -> &str {
        match self {
            ParamEntry::Name(name) | ParamEntry::Typed { name, .. } => name,
        }
    }

    pub fn type_annotation(&self) -> Option<&str> {
        match self {
            ParamEntry::Name(_) => None,
            ParamEntry::Typed {
                type_annotation, ..
            } => type_annotation.as_deref(),
        }
    }
}

impl fmt::Display for ParamEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_annotation() {
            Some(ty) => write!(f, "{}: {}", self.name(), ty),
            None => f.write_str(self.name()),
        }
    }
}

impl From<&str> for ParamEntry {
    fn from(name: &str) -> Self {
        ParamEntry::Name(name.to_string())
    }
}

/// Validated extraction options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Built-in pattern to use; `None` behaves like JavaScript
    pub dialect: Option<Dialect>,
    /// Regex overriding the dialect pattern; group 1 is the parameter text
    pub custom_pattern: Option<String>,
    /// Return name/type pairs (TypeScript only)
    pub include_types: bool,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn with_custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_pattern = Some(pattern.into());
        self
    }

    pub fn with_include_types(mut self, include: bool) -> Self {
        self.include_types = include;
        self
    }

    /// Whether structured name/type entries are produced
    pub(crate) fn emits_typed_entries(&self) -> bool {
        self.include_types && self.dialect.is_some_and(|d| d.splits_type_annotations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_dialect_tokens_and_aliases() {
        assert_eq!("js".parse::<Dialect>().unwrap(), Dialect::JavaScript);
        assert_eq!("arrow".parse::<Dialect>().unwrap(), Dialect::CoffeeScript);
        assert_eq!("typed".parse::<Dialect>().unwrap(), Dialect::TypeScript);
        for dialect in [
            Dialect::JavaScript,
            Dialect::CoffeeScript,
            Dialect::TypeScript,
        ] {
            assert_eq!(dialect.token().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_unknown_dialect_is_invalid_option() {
        let err = "english".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, Error::InvalidOption { .. }));
        assert_eq!(
            err.to_string(),
            "Expected dialect to be 'js', 'coffee', or 'ts'"
        );
        // tokens are case-sensitive
        assert!("JS".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_dialect_from_path() {
        assert_eq!(
            Dialect::from_path(&PathBuf::from("src/app.coffee")),
            Some(Dialect::CoffeeScript)
        );
        assert_eq!(
            Dialect::from_path(&PathBuf::from("index.tsx")),
            Some(Dialect::TypeScript)
        );
        assert_eq!(Dialect::from_path(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn test_entry_serialization() {
        let bare = serde_json::to_string(&ParamEntry::from("x")).unwrap();
        assert_eq!(bare, r#""x""#);

        let typed = ParamEntry::Typed {
            name: "x".into(),
            type_annotation: Some("int".into()),
        };
        assert_eq!(
            serde_json::to_string(&typed).unwrap(),
            r#"{"name":"x","type":"int"}"#
        );

        let untyped = ParamEntry::Typed {
            name: "y".into(),
            type_annotation: None,
        };
        assert_eq!(
            serde_json::to_string(&untyped).unwrap(),
            r#"{"name":"y","type":null}"#
        );
    }

    #[test]
    fn test_typed_entries_require_typescript() {
        let opts = ExtractOptions::new().with_include_types(true);
        assert!(!opts.emits_typed_entries());
        assert!(opts
            .with_dialect(Dialect::TypeScript)
            .emits_typed_entries());
    }
}
