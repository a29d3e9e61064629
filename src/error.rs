//! Error types for INI parsing.
//!
//! Every parsing error is fatal to the parse that produced it: there is no
//! recovery and no partial result. The first error wins, and each error
//! records the 1-based line number on which it was detected.
//!
//! Queries on a successfully parsed document never produce errors; absence
//! is expressed with `None`.
//!
//! ## Examples
//!
//! ```rust
//! use inicfg::{parse_str, Error, IniOptions};
//!
//! let err = parse_str("[section\nname=value", IniOptions::stable()).unwrap_err();
//! assert_eq!(err, Error::UnclosedSection { line: 1 });
//! assert_eq!(err.line(), 1);
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing an INI
/// document.
///
/// Each variant carries the 1-based line number on which it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A section header line did not end with a closing `]`.
    #[error("unclosed section at line {line}")]
    UnclosedSection { line: usize },

    /// The unnamed section `[]` was used without global properties enabled.
    #[error("global scopes not allowed at line {line}")]
    GlobalScopeDisallowed { line: usize },

    /// A key-value line contained no name/value delimiter.
    #[error("name without value at line {line}")]
    NameWithoutValue { line: usize },

    /// A key-value line appeared before any section header, without global
    /// properties enabled.
    #[error("no table defined at line {line}")]
    NoTableDefined { line: usize },

    /// A quoted value had no matching closing quote before the end of the
    /// line.
    #[error("unterminated quoted value at line {line}")]
    UnterminatedQuotedValue { line: usize },

    /// Non-whitespace content followed a closed quote and inline comments
    /// were not enabled.
    #[error("trailing characters after quoted string at line {line}")]
    TrailingCharactersAfterQuotedValue { line: usize },

    /// A Unicode escape decoded to a code point above U+10FFFF or inside
    /// the UTF-16 surrogate range. Surrogates are illegal because decoded
    /// text is always stored as UTF-8.
    #[error("illegal Unicode character at line {line}")]
    IllegalUnicodeCharacter { line: usize },

    /// Fewer hex digits than required followed a `\u` or `\U` escape.
    /// `escape` is the escape character that was being decoded.
    #[error("truncated \\{escape} escape at line {line}")]
    TruncatedUnicodeEscape { escape: char, line: usize },

    /// A `\xHH` escape was not followed by two hex digits.
    #[error("invalid \\xHH escape at line {line}")]
    InvalidHexEscape { line: usize },

    /// The byte source failed while reading.
    #[error("io error at line {line}: {message}")]
    Io { line: usize, message: String },
}

impl Error {
    /// Returns the 1-based line number on which the error was detected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::Error;
    ///
    /// let err = Error::NameWithoutValue { line: 7 };
    /// assert_eq!(err.line(), 7);
    /// ```
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Error::UnclosedSection { line }
            | Error::GlobalScopeDisallowed { line }
            | Error::NameWithoutValue { line }
            | Error::NoTableDefined { line }
            | Error::UnterminatedQuotedValue { line }
            | Error::TrailingCharactersAfterQuotedValue { line }
            | Error::IllegalUnicodeCharacter { line }
            | Error::TruncatedUnicodeEscape { line, .. }
            | Error::InvalidHexEscape { line }
            | Error::Io { line, .. } => *line,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
