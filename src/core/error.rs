//! Purpose: Model every way a text-to-scalar bind can fail.
//! Exports: `BindError`, `BindErrorKind`.
//! Role: Single error taxonomy returned by every binder entrypoint.
//! Invariants: Exactly three causes; callers treat all of them as bad input.
//! Invariants: Serialized kind names are stable once published.

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

use crate::core::kind::Kind;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum BindErrorKind {
    UnsupportedKind,
    Syntax,
    Range,
}

#[derive(Debug)]
pub struct BindError {
    kind: BindErrorKind,
    text: Option<String>,
    target: Option<Kind>,
    type_name: Option<&'static str>,
    message: Option<String>,
    hint: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl BindError {
    pub fn new(kind: BindErrorKind) -> Self {
        Self {
            kind,
            text: None,
            target: None,
            type_name: None,
            message: None,
            hint: None,
            source: None,
        }
    }

    pub fn kind(&self) -> BindErrorKind {
        self.kind
    }

    /// The offending input, verbatim.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Kind tag the text was parsed against, if the destination had one.
    pub fn target(&self) -> Option<Kind> {
        self.target
    }

    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_target(mut self, target: Kind) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_type_name(mut self, type_name: &'static str) -> Self {
        self.type_name = Some(type_name);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Human label for the destination: the kind tag, plus the Rust type when
    /// it is a named alias of that kind.
    pub fn target_label(&self) -> String {
        match (self.target, self.type_name) {
            (Some(kind), Some(type_name)) if type_name != kind.rust_type() => {
                format!("{type_name} ({kind})")
            }
            (Some(kind), _) => kind.to_string(),
            (None, Some(type_name)) => type_name.to_string(),
            (None, None) => "unknown destination".to_string(),
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        match &self.text {
            Some(text) => write!(f, ": cannot bind {text:?} into {}", self.target_label())?,
            None => write!(f, ": cannot bind into {}", self.target_label())?,
        }
        if let Some(message) = &self.message {
            write!(f, " ({message})")?;
        }
        Ok(())
    }
}

impl StdError for BindError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{BindError, BindErrorKind};
    use crate::core::kind::Kind;

    #[test]
    fn kind_names_serialize_stably() {
        let cases = [
            (BindErrorKind::UnsupportedKind, "\"UnsupportedKind\""),
            (BindErrorKind::Syntax, "\"Syntax\""),
            (BindErrorKind::Range, "\"Range\""),
        ];

        for (kind, expected) in cases {
            assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        }
    }

    #[test]
    fn display_names_text_and_target() {
        let err = BindError::new(BindErrorKind::Syntax)
            .with_text("5.7")
            .with_target(Kind::I32)
            .with_type_name("i32")
            .with_message("invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Syntax: cannot bind \"5.7\" into i32 (invalid digit found in string)"
        );
    }

    #[test]
    fn alias_destinations_show_type_and_kind() {
        let err = BindError::new(BindErrorKind::Range)
            .with_text("300")
            .with_target(Kind::U8)
            .with_type_name("app::Percent");
        assert_eq!(err.target_label(), "app::Percent (u8)");
    }

    #[test]
    fn source_is_exposed() {
        let parse_err = "x".parse::<i64>().unwrap_err();
        let err = BindError::new(BindErrorKind::Syntax).with_source(parse_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
