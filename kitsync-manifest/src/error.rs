use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for kitsync-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source text and filename of a config file, for diagnostics with spans.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for a user config that is not valid JSON with comments.
    ///
    /// `line` and `column` are 1-based, as reported by `serde_json`; a zero
    /// line means the error has no position.
    pub fn user_config_error(
        &self,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Box<Error> {
        let span = offset_of(&self.src, line, column).map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::UnparsableUserConfig {
            src: self.named_source(),
            span,
            filename: self.filename.clone(),
            message: message.into(),
        })
    }
}

/// Translate a 1-based line/column position into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);

    // Clamp to the last byte so the label stays inside the source
    Some(offset.min(src.len().saturating_sub(1)))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse kitsync.toml")]
    #[diagnostic(code(kitsync::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid alias key '{key}'")]
    #[diagnostic(
        code(kitsync::invalid_alias_key),
        help("{reason}. Alias keys look like `name` or `name/*`")
    )]
    InvalidAliasKey { key: String, reason: String },

    #[error("invalid alias value '{value}' for '{key}'")]
    #[diagnostic(
        code(kitsync::invalid_alias_value),
        help(
            "{reason}. Alias values are a directory, a directory ending in `/*`, or a file with an extension"
        )
    )]
    InvalidAliasValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(
        code(kitsync::unparsable_user_config),
        help("comments and trailing commas are allowed, everything else must be valid JSON")
    )]
    UnparsableUserConfig {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        filename: String,
        message: String,
    },
}

impl Error {
    /// Create an invalid alias key error
    pub fn invalid_alias_key(key: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidAliasKey {
            key: key.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid alias value error
    pub fn invalid_alias_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidAliasValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 3, 3), Some(14));
        assert_eq!(offset_of(src, 0, 0), None);
    }

    #[test]
    fn test_offset_of_clamps_to_source() {
        assert_eq!(offset_of("{}", 9, 9), Some(1));
    }

    #[test]
    fn test_user_config_error_names_file() {
        let ctx = SourceContext::new("{ nope }", "tsconfig.json");
        let err = ctx.user_config_error("key must be a string", 1, 3);

        assert_eq!(err.to_string(), "failed to parse tsconfig.json");
        match *err {
            Error::UnparsableUserConfig { span, message, .. } => {
                assert_eq!(span, Some(SourceSpan::from((2, 1))));
                assert_eq!(message, "key must be a string");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_alias_key_message() {
        let err = Error::invalid_alias_key("a/*/b", "wildcards are only allowed at the end");
        assert_eq!(err.to_string(), "invalid alias key 'a/*/b'");
    }
}
