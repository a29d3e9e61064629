//! # inicfg
//!
//! A binary-safe INI parser with nested sections, quoted values, and
//! case-insensitive lookups.
//!
//! ## What it does
//!
//! `inicfg` parses line-oriented INI configuration text into an in-memory,
//! queryable [`Ini`] document. Values are opaque byte strings — there is no
//! schema validation and no type coercion, and quoted values may contain
//! any byte, including embedded NULs.
//!
//! ## Key features
//!
//! - **Case-insensitive, ordered tables**: keys compare case-insensitively
//!   and iterate in sorted order, deterministically
//! - **Optional dialect features**: global properties, nested section
//!   paths, inline comments and quoted values are individually selectable
//!   via [`IniOptions`]
//! - **Binary-safe values**: the `\0` escape produces real NUL bytes that
//!   the explicit value length keeps addressable
//! - **All-or-nothing parsing**: the first error aborts the parse and
//!   reports its 1-based line number; there are no partial documents
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick start
//!
//! ```rust
//! use inicfg::{parse_str, IniOptions};
//!
//! let source = "\
//! [database]
//! host = localhost
//! port = 5432
//!
//! [database.replica]
//! host = replica.internal
//! ";
//!
//! let ini = parse_str(source, IniOptions::stable().with_nesting(true)).unwrap();
//!
//! assert_eq!(ini.get("database", "host").and_then(|v| v.as_str()), Some("localhost"));
//! assert_eq!(
//!     ini.get("database.replica", "host").and_then(|v| v.as_str()),
//!     Some("replica.internal"),
//! );
//! ```
//!
//! ## Dialect features
//!
//! Everything beyond plain `[section]` + `key=value` is opt-in:
//!
//! ```rust
//! use inicfg::{parse_str, IniOptions};
//!
//! let source = "\
//! answer = 42                 ; global property with an inline comment
//! [quotes]
//! greeting = 'hello\\tworld'
//! ";
//!
//! let ini = parse_str(source, IniOptions::all()).unwrap();
//! assert_eq!(ini.get("", "answer").and_then(|v| v.as_str()), Some("42"));
//! assert_eq!(
//!     ini.get("quotes", "greeting").and_then(|v| v.as_str()),
//!     Some("hello\tworld"),
//! );
//! ```
//!
//! ## Errors
//!
//! Any malformed line aborts the whole parse with an [`Error`] carrying
//! the 1-based line number:
//!
//! ```rust
//! use inicfg::{parse_str, Error, IniOptions};
//!
//! let err = parse_str("[section]\nname\n", IniOptions::stable()).unwrap_err();
//! assert_eq!(err, Error::NameWithoutValue { line: 2 });
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`basic.rs`** — parsing and querying with the stable feature set
//! - **`features.rs`** — nesting, quoting, inline comments and global
//!   properties
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod map;
pub mod options;
pub mod parser;
pub mod table;
pub mod value;

pub use error::{Error, Result};
pub use map::IniMap;
pub use options::IniOptions;
pub use parser::ByteSource;
pub use table::{Ini, IniTable};
pub use value::IniValue;

use parser::{ReaderSource, SliceSource};
use std::io;

/// Parses an INI document from a string.
///
/// # Examples
///
/// ```rust
/// use inicfg::{parse_str, IniOptions};
///
/// let ini = parse_str("[s]\nkey = value\n", IniOptions::stable()).unwrap();
/// assert_eq!(ini.get("s", "key").and_then(|v| v.as_str()), Some("value"));
/// ```
///
/// # Errors
///
/// Returns the first [`Error`] encountered, with its 1-based line number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(text: &str, options: IniOptions) -> Result<Ini> {
    parse_slice(text.as_bytes(), options)
}

/// Parses an INI document from a byte slice.
///
/// The slice's own length bounds the input; the text does not need a
/// terminator and may contain arbitrary bytes.
///
/// # Errors
///
/// Returns the first [`Error`] encountered, with its 1-based line number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(bytes: &[u8], options: IniOptions) -> Result<Ini> {
    parser::parse(SliceSource::new(bytes), options)
}

/// Parses an INI document from an I/O stream.
///
/// The reader is buffered internally and pulled one byte at a time; read
/// failures surface as [`Error::Io`] with the line being read.
///
/// # Examples
///
/// ```rust
/// use inicfg::{parse_reader, IniOptions};
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"[s]\nkey = value\n");
/// let ini = parse_reader(cursor, IniOptions::stable()).unwrap();
/// assert!(ini.table("s").is_some());
/// ```
///
/// # Errors
///
/// Returns the first [`Error`] encountered, with its 1-based line number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(reader: R, options: IniOptions) -> Result<Ini> {
    parser::parse(ReaderSource::new(reader), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_document() {
        let ini = parse_str(
            "[namespace1]\nname=value\n[section]\nkey1=a\nkey2=b\n",
            IniOptions::stable(),
        )
        .unwrap();
        assert_eq!(
            ini.get("namespace1", "name").and_then(|v| v.as_str()),
            Some("value")
        );
        assert_eq!(ini.get("section", "key1").and_then(|v| v.as_str()), Some("a"));
        assert_eq!(ini.get("section", "key2").and_then(|v| v.as_str()), Some("b"));
        assert!(ini.get("section", "c").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let ini = parse_str("[s]\nk=1\nk=2\n", IniOptions::stable()).unwrap();
        assert_eq!(ini.get("s", "k").and_then(|v| v.as_str()), Some("2"));
    }

    #[test]
    fn test_nested_absolute_path() {
        let ini = parse_str("[a.b.c]\nfoo=bar\n", IniOptions::stable().with_nesting(true))
            .unwrap();
        assert_eq!(ini.get("a.b.c", "foo").and_then(|v| v.as_str()), Some("bar"));
        assert!(ini.table("a").is_some());
    }

    #[test]
    fn test_empty_input_is_empty_document() {
        let ini = parse_str("", IniOptions::stable()).unwrap();
        assert!(ini.table("anything").is_none());
    }

    #[test]
    fn test_parse_slice_and_reader_agree() {
        let text = "[s]\nkey = value\n";
        let from_slice = parse_slice(text.as_bytes(), IniOptions::stable()).unwrap();
        let from_reader =
            parse_reader(std::io::Cursor::new(text.as_bytes()), IniOptions::stable()).unwrap();
        assert_eq!(
            from_slice.get("s", "key").map(|v| v.as_bytes()),
            from_reader.get("s", "key").map(|v| v.as_bytes()),
        );
    }

    #[test]
    fn test_options_builder() {
        let options = IniOptions::stable()
            .with_quoted_values(true)
            .with_comment_char(b'#');
        assert!(options.quoted_values);
        assert_eq!(options.comment_char, b'#');
        assert_eq!(options.name_value_delim, b'=');
    }
}
