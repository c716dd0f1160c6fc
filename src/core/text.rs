//! Runtime "is this text?" checks for extraction inputs.
//!
//! `extract_params` accepts anything implementing [`SourceText`] so callers
//! holding raw bytes, optional values, or JSON documents get a
//! `TypeMismatch` instead of having to pre-validate.

/// A value that may or may not hold text
pub trait SourceText {
    /// The value as text, or `None` when it is not a string
    fn as_text(&self) -> Option<&str>;
}

impl SourceText for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl SourceText for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Bytes are text only when they decode as UTF-8
impl SourceText for [u8] {
    fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(self).ok()
    }
}

impl SourceText for Vec<u8> {
    fn as_text(&self) -> Option<&str> {
        self.as_slice().as_text()
    }
}

impl SourceText for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl<T: SourceText + ?Sized> SourceText for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: SourceText> SourceText for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(SourceText::as_text)
    }
}
