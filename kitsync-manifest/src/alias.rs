//! Shape classification for alias keys and values.

use crate::{Error, Result};

/// Suffix marking sub-path matching on an alias key or value.
const WILDCARD: &str = "/*";

/// An alias key split into its name and wildcard marker.
///
/// `$lib` classifies as `{ base: "$lib", has_wildcard: false }`,
/// `$lib/*` as `{ base: "$lib", has_wildcard: true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasKey<'a> {
    base: &'a str,
    has_wildcard: bool,
}

impl<'a> AliasKey<'a> {
    /// Classify an alias key.
    pub fn parse(key: &'a str) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::invalid_alias_key(key, "the key is empty"));
        }

        let (base, has_wildcard) = split_wildcard(key);
        if base.is_empty() {
            return Err(Error::invalid_alias_key(key, "the key has no name before `/*`"));
        }
        if base.contains('*') {
            return Err(Error::invalid_alias_key(
                key,
                "a wildcard is only allowed as a trailing `/*`",
            ));
        }

        Ok(Self { base, has_wildcard })
    }

    pub fn base(&self) -> &'a str {
        self.base
    }

    pub fn has_wildcard(&self) -> bool {
        self.has_wildcard
    }
}

/// An alias value split into its path, wildcard marker, and file extension.
///
/// Exactly one of three shapes: a bare directory, a directory ending in `/*`,
/// or a file with an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasTarget<'a> {
    base: &'a str,
    has_wildcard: bool,
    extension: Option<&'a str>,
}

impl<'a> AliasTarget<'a> {
    /// Classify the value declared for alias `key`.
    pub fn parse(key: &str, value: &'a str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::invalid_alias_value(key, value, "the path is empty"));
        }

        let (base, has_wildcard) = split_wildcard(value);
        if base.is_empty() {
            return Err(Error::invalid_alias_value(
                key,
                value,
                "the path has nothing before `/*`",
            ));
        }
        if base.contains('*') {
            return Err(Error::invalid_alias_value(
                key,
                value,
                "a wildcard is only allowed as a trailing `/*`",
            ));
        }

        let extension = if has_wildcard {
            None
        } else {
            file_extension(base)
        };

        Ok(Self {
            base,
            has_wildcard,
            extension,
        })
    }

    /// The path with any trailing `/*` removed.
    pub fn base(&self) -> &'a str {
        self.base
    }

    pub fn has_wildcard(&self) -> bool {
        self.has_wildcard
    }

    /// File extension without the leading dot, if the value names a file.
    pub fn extension(&self) -> Option<&'a str> {
        self.extension
    }
}

fn split_wildcard(s: &str) -> (&str, bool) {
    match s.strip_suffix(WILDCARD) {
        Some(base) => (base, true),
        None => (s, false),
    }
}

/// A trailing `.` followed by one or more word characters.
fn file_extension(path: &str) -> Option<&str> {
    let (_, ext) = path.rsplit_once('.')?;
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    (!ext.is_empty() && ext.chars().all(is_word)).then_some(ext)
}
